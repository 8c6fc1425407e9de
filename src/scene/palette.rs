use crate::scene::config::ColorSchemeId;

/// Straight-alpha RGBA8 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// `true` for fully-opaque white.
    ///
    /// The compositor keys the shadow color off this: white text gets a dark
    /// shadow, any other text color gets a light one.
    pub fn is_white(self) -> bool {
        self == Self::rgb(255, 255, 255)
    }
}

/// One entry of the scheme table: two gradient stops plus a text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    /// Gradient stops, applied from canvas corner (0,0) to corner (w,h).
    pub background: [Rgba8; 2],
    /// Fill color for the rendered text.
    pub text: Rgba8,
}

const WHITE: Rgba8 = Rgba8::rgb(255, 255, 255);

static PURPLE: ColorScheme = ColorScheme {
    background: [Rgba8::rgb(0x66, 0x7e, 0xea), Rgba8::rgb(0x76, 0x4b, 0xa2)],
    text: WHITE,
};

static OCEAN: ColorScheme = ColorScheme {
    background: [Rgba8::rgb(0x21, 0x93, 0xb0), Rgba8::rgb(0x6d, 0xd5, 0xed)],
    text: WHITE,
};

static FOREST: ColorScheme = ColorScheme {
    background: [Rgba8::rgb(0x11, 0x99, 0x8e), Rgba8::rgb(0x38, 0xef, 0x7d)],
    text: WHITE,
};

static SUNSET: ColorScheme = ColorScheme {
    background: [Rgba8::rgb(0xf4, 0x6b, 0x45), Rgba8::rgb(0xee, 0xa8, 0x49)],
    text: WHITE,
};

static CRIMSON: ColorScheme = ColorScheme {
    background: [Rgba8::rgb(0xeb, 0x33, 0x49), Rgba8::rgb(0xf4, 0x5c, 0x43)],
    text: WHITE,
};

static MIDNIGHT: ColorScheme = ColorScheme {
    background: [Rgba8::rgb(0x23, 0x25, 0x26), Rgba8::rgb(0x41, 0x43, 0x45)],
    text: WHITE,
};

// The one dark-on-light entry; exercises the light-shadow path.
static PAPER: ColorScheme = ColorScheme {
    background: [Rgba8::rgb(0xe0, 0xea, 0xfc), Rgba8::rgb(0xcf, 0xde, 0xf3)],
    text: Rgba8::rgb(0x33, 0x33, 0x33),
};

/// Resolve a scheme id against the fixed table.
///
/// The table is process-wide, immutable, and never grows at runtime.
pub fn scheme(id: ColorSchemeId) -> &'static ColorScheme {
    match id {
        ColorSchemeId::Purple => &PURPLE,
        ColorSchemeId::Ocean => &OCEAN,
        ColorSchemeId::Forest => &FOREST,
        ColorSchemeId::Sunset => &SUNSET,
        ColorSchemeId::Crimson => &CRIMSON,
        ColorSchemeId::Midnight => &MIDNIGHT,
        ColorSchemeId::Paper => &PAPER,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/palette.rs"]
mod tests;
