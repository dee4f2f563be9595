//! Subprocess dispatch for bunkit

mod dispatch;

pub use dispatch::Dispatcher;
