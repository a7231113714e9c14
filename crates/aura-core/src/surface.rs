//! Drawing surface abstraction the engine renders into.

use glam::DVec2;

use crate::color::Rgb;

/// Drawing surface dimensions in pixels.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Negative dimensions (e.g. reported before layout) clamp to zero.
    pub fn clamped(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0) as u32,
            height: height.max(0) as u32,
        }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.width as f64, self.height as f64)
    }
}

/// Compositing mode for subsequent fills.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BlendMode {
    #[default]
    SourceOver,
    /// Additive-looking "screen" blending; overlapping glows brighten.
    Screen,
}

impl BlendMode {
    /// Canvas 2D `globalCompositeOperation` name.
    pub fn composite_operation(self) -> &'static str {
        match self {
            BlendMode::SourceOver => "source-over",
            BlendMode::Screen => "screen",
        }
    }
}

/// One radial-gradient disc: `color` at the center fading to fully
/// transparent at `radius`, drawn at opacity `alpha`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Glow {
    pub center: DVec2,
    pub radius: f64,
    pub color: Rgb,
    pub alpha: f64,
}

pub trait DrawSurface {
    type Error;

    /// Clear the whole surface to transparent.
    fn clear(&mut self, size: SurfaceSize) -> Result<(), Self::Error>;

    fn set_blend_mode(&mut self, mode: BlendMode) -> Result<(), Self::Error>;

    /// Fill a disc of `glow.radius` with the two-stop radial gradient.
    fn fill_glow(&mut self, glow: &Glow) -> Result<(), Self::Error>;
}

/// A recorded draw call.
#[derive(Clone, PartialEq, Debug)]
pub enum DrawCommand {
    Clear(SurfaceSize),
    Blend(BlendMode),
    Glow(Glow),
}

/// In-memory surface that records every command, for tests and headless use.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn glows(&self) -> impl Iterator<Item = &Glow> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Glow(g) => Some(g),
            _ => None,
        })
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for RecordingSurface {
    type Error = std::convert::Infallible;

    fn clear(&mut self, size: SurfaceSize) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Clear(size));
        Ok(())
    }

    fn set_blend_mode(&mut self, mode: BlendMode) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Blend(mode));
        Ok(())
    }

    fn fill_glow(&mut self, glow: &Glow) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Glow(*glow));
        Ok(())
    }
}
