//! # Lifecycle
//!
//! Starting and stopping a menu page. [`MenuSystem`] builds the document,
//! runs the boot sequence, spawns the page dispatcher and hands back a
//! [`MenuClient`](crate::clients::MenuClient).
//!
//! Shutdown follows the channel-closure pattern: dropping the last client
//! closes the dispatcher's queue, the dispatcher finishes the events already
//! queued, runs `on_unmount` and exits, and [`MenuSystem::shutdown`] awaits
//! the task.
//!
//! Logging is initialized once per process with [`setup_tracing`]:
//!
//! ```bash
//! RUST_LOG=info flavor-menu      # boot statistics, orders
//! RUST_LOG=debug flavor-menu     # every event and rejection
//! ```

pub mod menu_system;

pub use menu_system::*;
pub use page_runtime::tracing::setup_tracing;
