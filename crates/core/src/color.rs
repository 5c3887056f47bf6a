//! Category colors: a fixed palette handed out in first-seen order, plus
//! HSV-based shading so repeated categories stay visually related but
//! distinguishable.

use palette::{FromColor, Hsv, Srgb};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default palette, consumed from the end: the first category seen gets
/// the last entry.
pub const DEFAULT_PALETTE: [Rgb; 8] = [
    Rgb::new(0xFF, 0x6B, 0x6B), // coral
    Rgb::new(0x1E, 0x90, 0xFF), // dodger blue
    Rgb::new(0xFF, 0x69, 0xB4), // hot pink
    Rgb::new(0x48, 0xD1, 0xCC), // medium turquoise
    Rgb::new(0xAA, 0x00, 0x98), // purple
    Rgb::new(0x00, 0xBF, 0xFF), // deep sky blue
    Rgb::new(0x00, 0xA5, 0x00), // green
    Rgb::new(0xFF, 0xA0, 0x7A), // light salmon
];

/// 24-bit RGB color. Serializes as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}': expected #rrggbb")]
pub struct ColorParseError(String);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Darken by reducing the HSV value channel: `v * (1 - factor)`.
    ///
    /// `factor` is clamped to `[0, 1)`; values at or above 1 would clip
    /// through black and invert on the round trip.
    pub fn darken(self, factor: f64) -> Self {
        let factor = (factor as f32).clamp(0.0, 1.0 - f32::EPSILON);
        let srgb = Srgb::new(self.r, self.g, self.b).into_format::<f32>();
        let mut hsv = Hsv::from_color(srgb);
        hsv.value *= 1.0 - factor;
        let out = Srgb::from_color(hsv).into_format::<u8>();
        Self::new(out.red, out.green, out.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorParseError(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError(s.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// More distinct categories than the palette holds. Aborts the layout
/// rather than recycling colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("palette exhausted: {distinct} distinct categories, palette holds {palette}")]
pub struct PaletteExhausted {
    pub distinct: usize,
    pub palette: usize,
}

/// Insertion-ordered registry mapping each category to its base color
/// and a stable 1-based index.
#[derive(Debug)]
pub struct CategoryRegistry {
    palette: Vec<Rgb>,
    original_len: usize,
    assigned: Vec<(String, (Rgb, usize))>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::with_palette(DEFAULT_PALETTE.to_vec())
    }

    pub fn with_palette(palette: Vec<Rgb>) -> Self {
        Self {
            original_len: palette.len(),
            palette,
            assigned: Vec::new(),
        }
    }

    /// First sight of a category pops the next palette color and assigns
    /// the next index (1 for the first category seen, 2 for the second);
    /// repeat sights return the stored pair unchanged.
    pub fn assign(&mut self, category: &str) -> Result<(Rgb, usize), PaletteExhausted> {
        if let Some((_, entry)) = self.assigned.iter().find(|(name, _)| name == category) {
            return Ok(*entry);
        }
        let color = self.palette.pop().ok_or(PaletteExhausted {
            distinct: self.assigned.len() + 1,
            palette: self.original_len,
        })?;
        let index = self.original_len - self.palette.len();
        self.assigned.push((category.to_string(), (color, index)));
        Ok((color, index))
    }

    /// Categories in the order they were first seen.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.assigned.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryRegistry, PaletteExhausted, Rgb, DEFAULT_PALETTE};

    #[test]
    fn indices_follow_first_seen_order_and_stay_stable() {
        let mut registry = CategoryRegistry::new();
        let (color_a, index_a) = registry.assign("Work").expect("palette has room");
        let (color_b, index_b) = registry.assign("Health").expect("palette has room");
        assert_eq!(index_a, 1);
        assert_eq!(index_b, 2);
        assert_eq!(color_a, DEFAULT_PALETTE[7]);
        assert_eq!(color_b, DEFAULT_PALETTE[6]);

        // Repeat lookups return the stored tuple unchanged.
        assert_eq!(registry.assign("Work").expect("repeat"), (color_a, 1));
        assert_eq!(registry.assign("Health").expect("repeat"), (color_b, 2));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn ninth_distinct_category_exhausts_the_palette() {
        let mut registry = CategoryRegistry::new();
        for i in 0..8 {
            registry
                .assign(&format!("cat-{i}"))
                .expect("within palette capacity");
        }
        let err = registry.assign("one-too-many").expect_err("palette is spent");
        assert_eq!(
            err,
            PaletteExhausted {
                distinct: 9,
                palette: 8
            }
        );
        // The failed category is not registered.
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn hex_parse_and_display_round_trip() {
        let color: Rgb = "#ff6b6b".parse().expect("valid hex");
        assert_eq!(color, Rgb::new(0xFF, 0x6B, 0x6B));
        assert_eq!(color.to_string(), "#ff6b6b");
        assert!("#ff6b6".parse::<Rgb>().is_err());
        assert!("ZZ6b6b".parse::<Rgb>().is_err());
    }

    #[test]
    fn darken_zero_is_identity_for_every_palette_color() {
        for color in DEFAULT_PALETTE {
            assert_eq!(color.darken(0.0), color);
        }
    }

    #[test]
    fn darken_near_one_approaches_black() {
        let dark = Rgb::new(0x1E, 0x90, 0xFF).darken(0.999);
        assert!(dark.r <= 1 && dark.g <= 1 && dark.b <= 1);
    }

    #[test]
    fn darken_clamps_factor_instead_of_inverting() {
        let color = Rgb::new(0x00, 0xA5, 0x00);
        let clamped = color.darken(4.2);
        assert_eq!(clamped, Rgb::new(0, 0, 0));
        assert_eq!(color.darken(-0.5), color);
    }

    #[test]
    fn darken_scales_channels_proportionally() {
        // Reducing the HSV value channel scales every RGB channel by the
        // same ratio.
        let dimmed = Rgb::new(0x1E, 0x90, 0xFF).darken(0.5);
        for (darkened, original) in [
            (dimmed.r, 0x1Eu8),
            (dimmed.g, 0x90),
            (dimmed.b, 0xFF),
        ] {
            let expected = f64::from(original) / 2.0;
            assert!(
                (f64::from(darkened) - expected).abs() <= 1.0,
                "channel {original} darkened to {darkened}, expected about {expected}"
            );
        }
    }

    #[test]
    fn darken_preserves_hue_family() {
        // A darkened pure green stays pure green, only dimmer.
        let dimmed = Rgb::new(0x00, 0xA5, 0x00).darken(0.25);
        assert_eq!(dimmed.r, 0);
        assert_eq!(dimmed.b, 0);
        assert!(dimmed.g < 0xA5);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Rgb::new(0xAA, 0x00, 0x98)).expect("serialize");
        assert_eq!(json, "\"#aa0098\"");
        let back: Rgb = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Rgb::new(0xAA, 0x00, 0x98));
    }
}
