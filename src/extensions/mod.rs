//! Optional observer hooks.
//!
//! Plugins see engine events and a read-only context; they never mutate
//! plot state directly.

pub mod plugins;

pub use plugins::{PcpPlugin, PcpEvent, PluginContext};
