//! Bottom panel: a simulated terminal plus static Problems/Output/Debug views.
//!
//! - `grammar` - command table and fallbacks
//! - `input` - Enter detection for the single-line input
//! - `dispatcher` - runs a committed line against the services
//! - `transcript` - command/response log
//! - `services` - REST, rating modal and navigation behind a trait

pub mod cmd;
pub mod dispatcher;
pub mod grammar;
pub mod input;
pub mod panel;
pub mod services;
pub mod transcript;

pub use panel::TerminalPanel;
