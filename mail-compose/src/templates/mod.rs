//! Email templates system
//!
//! Provides pluggable renderers selected by template extension, and
//! variable substitution from a [`RenderContext`].

pub mod registry;
pub mod renderer;
pub mod types;

pub use registry::RendererRegistry;
pub use renderer::{FilesystemRenderer, InMemoryRenderer};
pub use types::{MailRenderer, RenderContext};
