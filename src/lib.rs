//! dnf-pcp: headless parallel-coordinates interaction engine.
//!
//! The engine owns the DNF record set, per-attribute axes with drag reorder
//! and brushing, and an external country filter fed by a typed cross-filter
//! bus. Rendering goes through the [`render::Renderer`] trait so hosts can
//! plug in Cairo or their own surface.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod extensions;
pub mod filter;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{PcpEngine, PcpEngineConfig};
pub use error::{PcpError, PcpResult};
