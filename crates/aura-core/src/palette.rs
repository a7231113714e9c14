use std::fmt;

use rand::Rng;

use crate::color::Rgb;

/// Weather classification used to pick the aura palette.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Condition {
    #[default]
    Default,
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    Drizzle,
    Mist,
}

const DEFAULT: &[Rgb] = &[Rgb::WHITE, Rgb::new(0x88, 0x88, 0x88)];
const CLEAR: &[Rgb] = &[
    Rgb::new(0xff, 0xd7, 0x00), // gold
    Rgb::new(0xff, 0xa5, 0x00), // orange
    Rgb::new(0x00, 0xbf, 0xff), // deep sky blue
];
const CLOUDS: &[Rgb] = &[
    Rgb::new(0xb0, 0xc4, 0xde),
    Rgb::new(0x77, 0x88, 0x99),
    Rgb::new(0xf0, 0xf8, 0xff),
];
const RAIN: &[Rgb] = &[
    Rgb::new(0x00, 0x00, 0x8b),
    Rgb::new(0x4b, 0x00, 0x82),
    Rgb::new(0x00, 0xbf, 0xff),
];
const SNOW: &[Rgb] = &[
    Rgb::WHITE,
    Rgb::new(0xf0, 0xff, 0xff),
    Rgb::new(0xe0, 0xff, 0xff),
];
const THUNDERSTORM: &[Rgb] = &[
    Rgb::new(0x4b, 0x00, 0x82),
    Rgb::new(0x80, 0x00, 0x80),
    Rgb::new(0xff, 0xd7, 0x00),
];
const DRIZZLE: &[Rgb] = &[Rgb::new(0xad, 0xd8, 0xe6), Rgb::new(0x87, 0xce, 0xeb)];
const MIST: &[Rgb] = &[Rgb::new(0xd3, 0xd3, 0xd3), Rgb::new(0xc0, 0xc0, 0xc0)];

impl Condition {
    pub const ALL: [Condition; 8] = [
        Condition::Default,
        Condition::Clear,
        Condition::Clouds,
        Condition::Rain,
        Condition::Snow,
        Condition::Thunderstorm,
        Condition::Drizzle,
        Condition::Mist,
    ];

    /// Resolve a classifier tag. Matching is exact; anything unrecognized
    /// maps to [`Condition::Default`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Clear" => Condition::Clear,
            "Clouds" => Condition::Clouds,
            "Rain" => Condition::Rain,
            "Snow" => Condition::Snow,
            "Thunderstorm" => Condition::Thunderstorm,
            "Drizzle" => Condition::Drizzle,
            "Mist" => Condition::Mist,
            _ => Condition::Default,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Condition::Default => "default",
            Condition::Clear => "Clear",
            Condition::Clouds => "Clouds",
            Condition::Rain => "Rain",
            Condition::Snow => "Snow",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Drizzle => "Drizzle",
            Condition::Mist => "Mist",
        }
    }

    /// Candidate colors for this condition. Never empty.
    pub fn palette(self) -> &'static [Rgb] {
        match self {
            Condition::Default => DEFAULT,
            Condition::Clear => CLEAR,
            Condition::Clouds => CLOUDS,
            Condition::Rain => RAIN,
            Condition::Snow => SNOW,
            Condition::Thunderstorm => THUNDERSTORM,
            Condition::Drizzle => DRIZZLE,
            Condition::Mist => MIST,
        }
    }

    /// Uniform draw from [`Condition::palette`].
    pub fn pick_color<R: Rng + ?Sized>(self, rng: &mut R) -> Rgb {
        let palette = self.palette();
        palette[rng.gen_range(0..palette.len())]
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
