use std::fmt;

/// 8-bit sRGB color.
///
/// `Display` renders the `#rrggbb` form the canvas gradient stops expect.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels normalized to [0, 1].
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Rgb::new(0xFF, 0xD7, 0x00).to_string(), "#ffd700");
        assert_eq!(Rgb::new(0x00, 0x00, 0x8b).to_string(), "#00008b");
        assert_eq!(Rgb::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn test_to_unit_range() {
        assert_eq!(Rgb::WHITE.to_unit(), [1.0, 1.0, 1.0]);
        assert_eq!(Rgb::new(0, 0, 0).to_unit(), [0.0, 0.0, 0.0]);
    }
}
