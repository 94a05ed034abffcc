//! The presentation tree: an arena of elements addressed by [`NodeId`].
//!
//! Only the handful of operations the menu page needs are provided: building
//! the tree, class/tag/id queries in document order, text and attribute
//! access, and first/last child insertion.

use super::DocumentError;
use std::fmt::Display;

/// Handle to a node inside one [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node_{}", self.0)
    }
}

/// A single element: tag, optional id, class list, attributes and own text.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    text: String,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            text: String::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn set_attribute(&mut self, name: String, value: String) {
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name, value)),
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An element tree rooted at a `body` element.
///
/// Nodes are never freed; a removed node is simply detached and no longer
/// reachable from [`Document::root`].
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                element: Element::new("body"),
                parent: None,
                children: Vec::new(),
            }],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Adds a detached element and returns its id.
    pub fn create(&mut self, element: Element) -> NodeId {
        self.slots.push(Slot {
            element,
            parent: None,
            children: Vec::new(),
        });
        NodeId(self.slots.len() - 1)
    }

    /// Creates `element` and appends it as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, element: Element) -> Result<NodeId, DocumentError> {
        self.slot(parent)?;
        let child = self.create(element);
        self.append_child(parent, child)?;
        Ok(child)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DocumentError> {
        self.check_insertable(parent, child)?;
        self.slot_mut(parent)?.children.push(child);
        self.slot_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Inserts `child` before the current first child of `parent`.
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DocumentError> {
        self.check_insertable(parent, child)?;
        self.slot_mut(parent)?.children.insert(0, child);
        self.slot_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Detaches the child at `index`. Returns `None` when there is no such child.
    pub fn remove_child_at(
        &mut self,
        parent: NodeId,
        index: usize,
    ) -> Result<Option<NodeId>, DocumentError> {
        let children = &mut self.slot_mut(parent)?.children;
        if index >= children.len() {
            return Ok(None);
        }
        let child = children.remove(index);
        self.slot_mut(child)?.parent = None;
        Ok(Some(child))
    }

    pub fn element(&self, id: NodeId) -> Result<&Element, DocumentError> {
        Ok(&self.slot(id)?.element)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], DocumentError> {
        Ok(&self.slot(id)?.children)
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, DocumentError> {
        Ok(self.slot(id)?.parent)
    }

    /// All nodes below `scope` in document (pre-)order, `scope` excluded.
    pub fn descendants(&self, scope: NodeId) -> Result<Vec<NodeId>, DocumentError> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.slot(scope)?.children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.slot(id)?.children.iter().rev());
        }
        Ok(out)
    }

    pub fn find_by_class(&self, scope: NodeId, class: &str) -> Result<Vec<NodeId>, DocumentError> {
        self.filter_descendants(scope, |e| e.has_class(class))
    }

    pub fn first_by_class(
        &self,
        scope: NodeId,
        class: &str,
    ) -> Result<Option<NodeId>, DocumentError> {
        Ok(self.find_by_class(scope, class)?.into_iter().next())
    }

    pub fn find_by_tag(&self, scope: NodeId, tag: &str) -> Result<Vec<NodeId>, DocumentError> {
        self.filter_descendants(scope, |e| e.tag == tag)
    }

    pub fn first_by_tag(&self, scope: NodeId, tag: &str) -> Result<Option<NodeId>, DocumentError> {
        Ok(self.find_by_tag(scope, tag)?.into_iter().next())
    }

    /// Looks up an attached element by its `id`.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        if self.slots[self.root.0].element.id() == Some(id) {
            return Some(self.root);
        }
        self.filter_descendants(self.root, |e| e.id() == Some(id))
            .ok()
            .and_then(|found| found.into_iter().next())
    }

    /// The nearest node carrying `class`, starting at `node` and walking up.
    pub fn closest_with_class(
        &self,
        node: NodeId,
        class: &str,
    ) -> Result<Option<NodeId>, DocumentError> {
        let mut current = Some(node);
        while let Some(id) = current {
            let slot = self.slot(id)?;
            if slot.element.has_class(class) {
                return Ok(Some(id));
            }
            current = slot.parent;
        }
        Ok(None)
    }

    pub fn text(&self, id: NodeId) -> Result<&str, DocumentError> {
        Ok(self.slot(id)?.element.text())
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> Result<(), DocumentError> {
        self.slot_mut(id)?.element.text = text.into();
        Ok(())
    }

    /// Adds `class` if absent, removes it if present. Returns whether it is now present.
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> Result<bool, DocumentError> {
        let classes = &mut self.slot_mut(id)?.element.classes;
        match classes.iter().position(|c| c == class) {
            Some(pos) => {
                classes.remove(pos);
                Ok(false)
            }
            None => {
                classes.push(class.to_string());
                Ok(true)
            }
        }
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Result<Option<&str>, DocumentError> {
        Ok(self.slot(id)?.element.attribute(name))
    }

    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), DocumentError> {
        self.slot_mut(id)?
            .element
            .set_attribute(name.into(), value.into());
        Ok(())
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<(), DocumentError> {
        self.slot_mut(id)?.element.attributes.retain(|(n, _)| n != name);
        Ok(())
    }

    fn filter_descendants(
        &self,
        scope: NodeId,
        predicate: impl Fn(&Element) -> bool,
    ) -> Result<Vec<NodeId>, DocumentError> {
        Ok(self
            .descendants(scope)?
            .into_iter()
            .filter(|id| predicate(&self.slots[id.0].element))
            .collect())
    }

    fn check_insertable(&self, parent: NodeId, child: NodeId) -> Result<(), DocumentError> {
        self.slot(parent)?;
        if child == self.root || self.slot(child)?.parent.is_some() {
            return Err(DocumentError::AlreadyAttached(child));
        }
        let mut current = Some(parent);
        while let Some(id) = current {
            if id == child {
                return Err(DocumentError::WouldCycle(child));
            }
            current = self.slot(id)?.parent;
        }
        Ok(())
    }

    fn slot(&self, id: NodeId) -> Result<&Slot, DocumentError> {
        self.slots.get(id.0).ok_or(DocumentError::UnknownNode(id))
    }

    fn slot_mut(&mut self, id: NodeId) -> Result<&mut Slot, DocumentError> {
        self.slots.get_mut(id.0).ok_or(DocumentError::UnknownNode(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId) {
        let mut doc = Document::new();
        let list = doc.append(doc.root(), Element::new("ul").with_id("list")).unwrap();
        let first = doc.append(list, Element::new("li").with_class("item").with_text("a")).unwrap();
        doc.append(list, Element::new("li").with_class("item").with_text("b")).unwrap();
        (doc, list, first)
    }

    #[test]
    fn test_queries_follow_document_order() {
        let (mut doc, list, first) = sample();
        let nested = doc.append(first, Element::new("span").with_class("item")).unwrap();

        let items = doc.find_by_class(doc.root(), "item").unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], first);
        assert_eq!(items[1], nested);
        assert_eq!(doc.find_by_id("list"), Some(list));
        assert_eq!(doc.first_by_tag(list, "span").unwrap(), Some(nested));
        assert_eq!(doc.closest_with_class(nested, "item").unwrap(), Some(nested));
        assert_eq!(doc.closest_with_class(list, "item").unwrap(), None);
    }

    #[test]
    fn test_prepend_and_remove() {
        let (mut doc, list, first) = sample();
        let head = doc.create(Element::new("li").with_text("head"));
        doc.prepend_child(list, head).unwrap();
        assert_eq!(doc.children(list).unwrap()[0], head);
        assert_eq!(doc.children(list).unwrap()[1], first);

        assert_eq!(doc.remove_child_at(list, 0).unwrap(), Some(head));
        assert_eq!(doc.parent(head).unwrap(), None);
        assert_eq!(doc.remove_child_at(list, 9).unwrap(), None);
        assert!(doc.find_by_class(doc.root(), "item").unwrap().contains(&first));
    }

    #[test]
    fn test_insertion_guards() {
        let (mut doc, list, first) = sample();
        assert_eq!(doc.append_child(list, first), Err(DocumentError::AlreadyAttached(first)));

        let outer = doc.create(Element::new("div"));
        let inner = doc.append(outer, Element::new("div")).unwrap();
        assert_eq!(doc.append_child(inner, outer), Err(DocumentError::WouldCycle(outer)));

        let bogus = NodeId(999);
        assert_eq!(doc.text(bogus), Err(DocumentError::UnknownNode(bogus)));
    }

    #[test]
    fn test_toggle_class_and_attributes() {
        let (mut doc, _, first) = sample();
        assert!(doc.toggle_class(first, "on").unwrap());
        assert!(doc.element(first).unwrap().has_class("on"));
        assert!(!doc.toggle_class(first, "on").unwrap());
        assert!(!doc.element(first).unwrap().has_class("on"));

        doc.set_attribute(first, "value", "1").unwrap();
        doc.set_attribute(first, "value", "2").unwrap();
        assert_eq!(doc.attribute(first, "value").unwrap(), Some("2"));
        doc.remove_attribute(first, "value").unwrap();
        assert_eq!(doc.attribute(first, "value").unwrap(), None);
    }
}
