use crate::foundation::error::{TextcardError, TextcardResult};

/// RGBA8 brush color used by Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

// Well-known bold sans-serif faces, tried in order when no font is supplied.
// Minimal container environments often ship none of these; rendering then
// proceeds without glyphs rather than failing the whole pipeline.
const FALLBACK_FONT_FILES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Stateful helper for measuring and laying out single lines of text.
///
/// Owns the Parley font and layout contexts so shaping state is reused across
/// renders. One font family is registered from raw bytes; all layout requests
/// resolve against it at weight bold.
pub(crate) struct TextStyler {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: Option<String>,
    font: Option<vello_cpu::peniko::FontData>,
}

impl TextStyler {
    /// Construct a styler, probing well-known system font files.
    pub(crate) fn new() -> Self {
        let mut styler = Self::empty();
        for path in FALLBACK_FONT_FILES {
            let Ok(bytes) = std::fs::read(path) else {
                continue;
            };
            if styler.register_font_bytes(bytes).is_ok() {
                tracing::debug!(path = %path, "registered fallback font");
                break;
            }
        }
        if styler.font.is_none() {
            tracing::warn!("no usable font found; text will not be drawn");
        }
        styler
    }

    /// Construct a styler pinned to caller-supplied font bytes.
    pub(crate) fn with_font_bytes(bytes: Vec<u8>) -> TextcardResult<Self> {
        let mut styler = Self::empty();
        styler.register_font_bytes(bytes)?;
        Ok(styler)
    }

    fn empty() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            family_name: None,
            font: None,
        }
    }

    fn register_font_bytes(&mut self, bytes: Vec<u8>) -> TextcardResult<()> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            TextcardError::invalid_input("no font families registered from font bytes")
        })?;
        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| TextcardError::invalid_input("registered font family has no name"))?
            .to_string();

        self.family_name = Some(family_name);
        self.font = Some(vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(bytes),
            0,
        ));
        Ok(())
    }

    /// `true` when a font face is available for glyph rendering.
    pub(crate) fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Font data for `vello_cpu` glyph runs, if a face was registered.
    pub(crate) fn font(&self) -> Option<&vello_cpu::peniko::FontData> {
        self.font.as_ref()
    }

    /// Shape one line of text at `size_px`, bold, without line breaking.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> parley::Layout<TextBrushRgba8> {
        let stack = match &self.family_name {
            Some(name) => parley::style::FontStack::Source(std::borrow::Cow::Owned(name.clone())),
            None => parley::style::FontStack::Source(std::borrow::Cow::Borrowed("sans-serif")),
        };

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(stack));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::BOLD,
        ));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    /// Measured advance width of `text` at `size_px`, in pixels.
    pub(crate) fn measure(&mut self, text: &str, size_px: f32) -> f64 {
        f64::from(self.layout_line(text, size_px, TextBrushRgba8::default()).width())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/styler.rs"]
mod tests;
