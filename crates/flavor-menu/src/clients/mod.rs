//! Typed wrappers around page handles.

pub mod menu_client;

pub use menu_client::MenuClient;
