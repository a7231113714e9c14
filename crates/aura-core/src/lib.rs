//! Weather-driven ambient particle background ("aura").
//!
//! A fixed pool of large, soft, screen-blended glow particles drifts across
//! a drawing surface, wrapping at the edges, and is re-colored whenever the
//! host reports a new weather condition.

pub mod color;
pub mod config;
pub mod engine;
pub mod frame_loop;
pub mod palette;
pub mod particle;
pub mod rng;
pub mod sprite;
pub mod surface;

pub use color::Rgb;
pub use config::{AuraConfig, ConfigError};
pub use engine::AuraEngine;
pub use frame_loop::{FrameLoop, FrameScheduler, ManualScheduler};
pub use palette::Condition;
pub use particle::Particle;
pub use rng::AuraRng;
pub use sprite::AuraSprite;
pub use surface::{BlendMode, DrawCommand, DrawSurface, Glow, RecordingSurface, SurfaceSize};
