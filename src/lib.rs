//! Textcard renders short user-supplied text onto a rasterized card image.
//!
//! The pipeline is synchronous and deterministic: a validated [`RenderConfig`]
//! goes through shape resolution, greedy word-wrap, CPU compositing (clip,
//! diagonal gradient, shadowed text) and is serialized to PNG or JPEG bytes.
//!
//! - Build a [`RenderConfig`] (or deserialize one from JSON)
//! - Create a [`Renderer`], optionally pinning a font with
//!   [`Renderer::with_font_bytes`]
//! - Call [`Renderer::render`] and hand the resulting [`RenderResult`] bytes
//!   to whatever presents or stores them
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod text;

pub(crate) mod layout;

/// Encoded output formats and the frame encoder.
pub mod encode;
/// Shape resolution: clip paths and text-safe areas.
pub mod geometry;
/// Compositing pipeline and the CPU raster backend.
pub mod render;
/// Boundary configuration model and the color-scheme table.
pub mod scene;

pub use crate::encode::raster::RenderResult;
pub use crate::foundation::error::{TextcardError, TextcardResult};
pub use crate::geometry::shape::{SafeArea, ShapeDescriptor, resolve_shape};
pub use crate::layout::wrap::wrap;
pub use crate::render::compositor::FrameRgba;
pub use crate::render::pipeline::Renderer;
pub use crate::scene::config::{
    ColorSchemeId, CornerRadius, OutputFormat, RenderConfig, ShapeId,
};
pub use crate::scene::palette::{ColorScheme, Rgba8};
