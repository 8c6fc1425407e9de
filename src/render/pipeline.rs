use crate::encode::raster::{RenderResult, encode_frame};
use crate::foundation::error::TextcardResult;
use crate::geometry::shape::resolve_shape;
use crate::render::compositor::{Compositor, FrameRgba};
use crate::scene::config::RenderConfig;
use crate::text::styler::TextStyler;

/// The rendering pipeline: validation, shape resolution, compositing and
/// encoding behind one entry point.
///
/// A renderer front-loads font registration and keeps shaping and raster
/// state warm across calls; renders themselves are synchronous and share no
/// mutable state with one another.
pub struct Renderer {
    styler: TextStyler,
    compositor: Compositor,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Construct a renderer using the first usable system font face.
    ///
    /// When no face can be found the renderer still works: shapes and
    /// gradients are produced, glyph drawing is skipped.
    pub fn new() -> Self {
        Self {
            styler: TextStyler::new(),
            compositor: Compositor::new(),
        }
    }

    /// Construct a renderer pinned to the given font bytes.
    ///
    /// Pinning the font makes output byte-stable across machines. Fails if no
    /// font family can be registered from the bytes.
    pub fn with_font_bytes(bytes: Vec<u8>) -> TextcardResult<Self> {
        Ok(Self {
            styler: TextStyler::with_font_bytes(bytes)?,
            compositor: Compositor::new(),
        })
    }

    /// `true` when a font face is available for glyph rendering.
    pub fn has_font(&self) -> bool {
        self.styler.has_font()
    }

    /// Render one config to encoded image bytes.
    ///
    /// Fails with [`TextcardError::InvalidInput`](crate::TextcardError) before
    /// touching any surface, or with an encoding error if serialization
    /// fails; there is no partial output either way.
    #[tracing::instrument(skip(self, config), fields(shape = config.shape.name(), format = config.format.name()))]
    pub fn render(&mut self, config: &RenderConfig) -> TextcardResult<RenderResult> {
        config.validate()?;
        let frame = self.compose(config)?;
        encode_frame(&frame, config.format)
    }

    /// Render one config to a raw straight-alpha RGBA frame, skipping the
    /// encoder.
    pub fn render_frame(&mut self, config: &RenderConfig) -> TextcardResult<FrameRgba> {
        config.validate()?;
        self.compose(config)
    }

    fn compose(&mut self, config: &RenderConfig) -> TextcardResult<FrameRgba> {
        let desc = resolve_shape(
            config.shape,
            config.corner_radius,
            config.width,
            config.height,
        );
        self.compositor.compose(config, &desc, &mut self.styler)
    }
}
