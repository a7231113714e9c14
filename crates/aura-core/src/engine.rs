use log::{debug, info};

use crate::config::{AuraConfig, ConfigError};
use crate::palette::Condition;
use crate::particle::Particle;
use crate::rng::AuraRng;
use crate::sprite::{write_sprites, AuraSprite};
use crate::surface::{BlendMode, DrawSurface, SurfaceSize};

/// The aura simulation: a fixed particle pool, the active weather
/// condition and the surface bounds used for wraparound.
///
/// Every instance owns its own state and RNG, so several engines never
/// interfere with each other.
pub struct AuraEngine {
    config: AuraConfig,
    condition: Condition,
    particles: Vec<Particle>,
    surface: SurfaceSize,
    rng: AuraRng,
    running: bool,
}

impl AuraEngine {
    pub fn new(config: AuraConfig, rng: AuraRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            condition: Condition::Default,
            particles: Vec::new(),
            surface: SurfaceSize::default(),
            rng,
            running: false,
        })
    }

    /// Default configuration with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(AuraConfig::default(), AuraRng::from_seed_u64(seed))
            .expect("default aura config is valid")
    }

    /// Set the initial surface dimensions. Call before [`AuraEngine::start`].
    pub fn configure(&mut self, width: i32, height: i32) {
        self.surface = SurfaceSize::clamped(width, height);
    }

    /// Change the wraparound bounds. Existing particles stay where they are;
    /// the next frame wraps against the new size.
    pub fn resize(&mut self, width: i32, height: i32) {
        let size = SurfaceSize::clamped(width, height);
        if size != self.surface {
            debug!(
                "aura resize {}x{} -> {}x{}",
                self.surface.width, self.surface.height, size.width, size.height
            );
        }
        self.surface = size;
    }

    /// Spawn the pool. Returns `false` (and does nothing) when already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        let (config, surface, condition) = (&self.config, self.surface, self.condition);
        let rng = &mut self.rng.0;
        self.particles = (0..config.particle_count)
            .map(|_| Particle::spawn(&mut *rng, config, surface, condition))
            .collect();
        self.running = true;

        info!(
            "aura started: {} particles on {}x{} ({})",
            self.particles.len(),
            surface.width,
            surface.height,
            condition
        );
        true
    }

    /// Switch palettes. Unknown tags select the default palette.
    ///
    /// Returns `true` when the condition changed and every particle was
    /// recolored; a repeat of the current condition is a no-op.
    pub fn set_condition(&mut self, tag: &str) -> bool {
        let condition = Condition::from_tag(tag);
        if condition == self.condition {
            return false;
        }
        debug!("aura condition {} -> {} (tag {:?})", self.condition, condition, tag);
        self.condition = condition;
        for p in &mut self.particles {
            p.recolor(&mut self.rng.0, condition);
        }
        true
    }

    /// Re-draw every particle from scratch in the current bounds and palette.
    /// Pool length is unchanged; does nothing before `start`.
    pub fn reset(&mut self) {
        let (config, surface, condition) = (&self.config, self.surface, self.condition);
        for p in &mut self.particles {
            *p = Particle::spawn(&mut self.rng.0, config, surface, condition);
        }
    }

    /// Apply one frame of drift and wraparound to every particle.
    pub fn advance(&mut self) {
        let surface = self.surface;
        for p in &mut self.particles {
            p.update(surface);
        }
    }

    /// Clear, advance and draw one frame. No-op until started.
    pub fn render_frame<D: DrawSurface>(&mut self, surface: &mut D) -> Result<(), D::Error> {
        if !self.running {
            return Ok(());
        }
        surface.clear(self.surface)?;
        surface.set_blend_mode(BlendMode::Screen)?;

        self.advance();

        // Pool order: later particles land on top.
        for p in &self.particles {
            surface.fill_glow(&p.glow())?;
        }
        Ok(())
    }

    pub fn write_sprites(&self, out: &mut Vec<AuraSprite>) {
        write_sprites(&self.particles, out);
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn surface_size(&self) -> SurfaceSize {
        self.surface
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &AuraConfig {
        &self.config
    }
}
