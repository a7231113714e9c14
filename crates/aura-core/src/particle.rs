use glam::DVec2;
use rand::Rng;

use crate::color::Rgb;
use crate::config::AuraConfig;
use crate::palette::Condition;
use crate::surface::{Glow, SurfaceSize};

/// One soft glow blob of the aura.
///
/// `size`, `velocity` and `alpha` are drawn once at spawn; only `position`
/// (every frame) and `color` (on condition change) vary afterwards.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Particle {
    pub position: DVec2,
    /// Glow radius in pixels.
    pub size: f64,
    /// Drift in pixels per frame.
    pub velocity: DVec2,
    pub alpha: f64,
    pub color: Rgb,
}

impl Particle {
    /// Draw a fresh particle somewhere on the surface.
    ///
    /// `config` must be valid (see [`AuraConfig::validate`]); every range it
    /// describes is then non-empty. Position uses a unit draw scaled by the
    /// surface so zero-sized surfaces place particles at the origin.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        config: &AuraConfig,
        surface: SurfaceSize,
        condition: Condition,
    ) -> Self {
        let bounds = surface.as_dvec2();
        let position = DVec2::new(rng.gen::<f64>() * bounds.x, rng.gen::<f64>() * bounds.y);
        let size = rng.gen_range(config.size_min..config.size_max);
        let velocity = DVec2::new(
            rng.gen_range(-config.max_speed..config.max_speed),
            rng.gen_range(-config.max_speed..config.max_speed),
        );
        let alpha = rng.gen_range(0.0..config.max_alpha);
        let color = condition.pick_color(rng);

        Self {
            position,
            size,
            velocity,
            alpha,
            color,
        }
    }

    /// Drift one frame, then wrap each axis independently once the glow is
    /// fully past an edge.
    pub fn update(&mut self, surface: SurfaceSize) {
        self.position += self.velocity;

        let bounds = surface.as_dvec2();
        let size = self.size;
        let wrap = |v: &mut f64, extent: f64| {
            if *v < -size {
                *v = extent + size;
            }
            if *v > extent + size {
                *v = -size;
            }
        };
        wrap(&mut self.position.x, bounds.x);
        wrap(&mut self.position.y, bounds.y);
    }

    pub fn recolor<R: Rng + ?Sized>(&mut self, rng: &mut R, condition: Condition) {
        self.color = condition.pick_color(rng);
    }

    /// True when the particle sits inside the wraparound band of `surface`.
    pub fn within_wrap_bounds(&self, surface: SurfaceSize) -> bool {
        let bounds = surface.as_dvec2();
        let lo = -self.size;
        (lo..=bounds.x + self.size).contains(&self.position.x)
            && (lo..=bounds.y + self.size).contains(&self.position.y)
    }

    pub fn glow(&self) -> Glow {
        Glow {
            center: self.position,
            radius: self.size,
            color: self.color,
            alpha: self.alpha,
        }
    }
}
