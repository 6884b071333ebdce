//! LSP Protocol Implementation
//!
//! Publishes validator diagnostics to editors; no checking logic lives here.

pub mod backend;
pub mod document;
pub mod handlers;
pub mod server;

pub use backend::Backend;
