//! Plain data: the static menu a page is built from and the records read back out of it.

pub mod flavor;
pub mod menu;

pub use flavor::*;
pub use menu::*;
