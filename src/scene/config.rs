use crate::foundation::error::{TextcardError, TextcardResult};
use crate::scene::palette::{ColorScheme, scheme};
use serde::{Deserialize, Serialize};

/// Maximum accepted text length in characters (after trimming).
pub const MAX_TEXT_CHARS: usize = 128;
/// Smallest accepted canvas edge in pixels.
pub const MIN_DIMENSION: u32 = 100;
/// Largest accepted canvas edge in pixels.
pub const MAX_DIMENSION: u32 = 2048;

/// One render request: text plus the full style configuration.
///
/// Immutable once constructed; the caller builds one per render. The document
/// round-trips through JSON so the CLI (or any other frontend) can pass it in
/// whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Text to render, 1–128 characters after trimming.
    pub text: String,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Color scheme, resolved against the fixed table.
    #[serde(default)]
    pub scheme: ColorSchemeId,
    /// Shape mask applied to the canvas.
    #[serde(default)]
    pub shape: ShapeId,
    /// Corner radius, only consulted when `shape` is [`ShapeId::Rounded`].
    #[serde(default)]
    pub corner_radius: CornerRadius,
    /// Output encoding.
    #[serde(default)]
    pub format: OutputFormat,
}

impl RenderConfig {
    /// Reject invalid input before any rendering begins.
    ///
    /// Returns the first violation found; a config that passes here renders
    /// without further input checks.
    pub fn validate(&self) -> TextcardResult<()> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return Err(TextcardError::invalid_input("text must be non-empty"));
        }
        if trimmed.chars().count() > MAX_TEXT_CHARS {
            return Err(TextcardError::invalid_input(format!(
                "text must be at most {MAX_TEXT_CHARS} characters"
            )));
        }
        for (label, v) in [("width", self.width), ("height", self.height)] {
            if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&v) {
                return Err(TextcardError::invalid_input(format!(
                    "{label} must be within [{MIN_DIMENSION}, {MAX_DIMENSION}], got {v}"
                )));
            }
        }
        Ok(())
    }

    /// Resolved colors for this config's scheme.
    pub fn colors(&self) -> &'static ColorScheme {
        scheme(self.scheme)
    }
}

/// Closed enumeration of color schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSchemeId {
    /// Indigo-to-violet, white text.
    #[default]
    Purple,
    /// Teal-to-sky, white text.
    Ocean,
    /// Deep-green-to-mint, white text.
    Forest,
    /// Orange blend, white text.
    Sunset,
    /// Red blend, white text.
    Crimson,
    /// Near-black grays, white text.
    Midnight,
    /// Pale blue-grays, dark text.
    Paper,
}

impl ColorSchemeId {
    /// Every scheme, in table order.
    pub const ALL: [Self; 7] = [
        Self::Purple,
        Self::Ocean,
        Self::Forest,
        Self::Sunset,
        Self::Crimson,
        Self::Midnight,
        Self::Paper,
    ];

    /// Lowercase name as used in JSON and on the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Self::Purple => "purple",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::Sunset => "sunset",
            Self::Crimson => "crimson",
            Self::Midnight => "midnight",
            Self::Paper => "paper",
        }
    }
}

impl std::str::FromStr for ColorSchemeId {
    type Err = TextcardError;

    fn from_str(s: &str) -> TextcardResult<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| TextcardError::invalid_input(format!("unknown color scheme '{s}'")))
    }
}

/// Closed enumeration of shape masks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeId {
    /// Full canvas, no clip.
    #[default]
    Rectangle,
    /// Rectangle with rounded corners.
    Rounded,
    /// Inscribed circle.
    Circle,
    /// Polygon through the four edge midpoints.
    Rhombus,
    /// Upward-pointing triangle.
    Triangle,
    /// Regular hexagon.
    Hexagon,
    /// Ten-point star.
    Star,
}

impl ShapeId {
    /// Every shape, in table order.
    pub const ALL: [Self; 7] = [
        Self::Rectangle,
        Self::Rounded,
        Self::Circle,
        Self::Rhombus,
        Self::Triangle,
        Self::Hexagon,
        Self::Star,
    ];

    /// Lowercase name as used in JSON and on the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Rounded => "rounded",
            Self::Circle => "circle",
            Self::Rhombus => "rhombus",
            Self::Triangle => "triangle",
            Self::Hexagon => "hexagon",
            Self::Star => "star",
        }
    }
}

impl std::str::FromStr for ShapeId {
    type Err = TextcardError;

    fn from_str(s: &str) -> TextcardResult<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| TextcardError::invalid_input(format!("unknown shape '{s}'")))
    }
}

/// Corner radius presets for the rounded-rectangle shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerRadius {
    /// Square corners (radius 0).
    Sharp,
    /// Radius 8px.
    Slight,
    /// Radius 16px.
    #[default]
    Rounded,
    /// Radius 32px.
    VeryRounded,
    /// Radius `min(width, height) / 2` (capsule).
    Pill,
}

impl CornerRadius {
    /// Every preset, smallest radius first.
    pub const ALL: [Self; 5] = [
        Self::Sharp,
        Self::Slight,
        Self::Rounded,
        Self::VeryRounded,
        Self::Pill,
    ];

    /// Kebab-case name as used in JSON and on the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sharp => "sharp",
            Self::Slight => "slight",
            Self::Rounded => "rounded",
            Self::VeryRounded => "very-rounded",
            Self::Pill => "pill",
        }
    }

    /// Pixel radius for a canvas of the given size.
    pub fn radius_px(self, width: u32, height: u32) -> f64 {
        match self {
            Self::Sharp => 0.0,
            Self::Slight => 8.0,
            Self::Rounded => 16.0,
            Self::VeryRounded => 32.0,
            Self::Pill => f64::from(width.min(height)) / 2.0,
        }
    }
}

impl std::str::FromStr for CornerRadius {
    type Err = TextcardError;

    fn from_str(s: &str) -> TextcardResult<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| TextcardError::invalid_input(format!("unknown corner radius '{s}'")))
    }
}

/// Output image encodings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless PNG.
    #[default]
    Png,
    /// JPEG at a fixed quality factor.
    Jpeg,
}

impl OutputFormat {
    /// MIME type string for the encoded bytes.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// Lowercase name as used in JSON and on the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = TextcardError;

    fn from_str(s: &str) -> TextcardResult<Self> {
        match s {
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            _ => Err(TextcardError::invalid_input(format!(
                "unsupported format '{s}' (expected png or jpeg)"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
