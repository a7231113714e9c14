use crate::particle::Particle;

/// GPU-friendly particle record: 32 bytes, tightly packed.
///
/// Lets a WebGL/WebGPU host draw the aura itself from a flat buffer instead
/// of going through a [`DrawSurface`](crate::surface::DrawSurface).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct AuraSprite {
    pub position: [f32; 2], //  8 bytes
    pub radius: f32,        //  4 bytes
    pub alpha: f32,         //  4 bytes
    pub color: [f32; 4],    // 16 bytes, rgb + opaque a
}

impl From<&Particle> for AuraSprite {
    fn from(p: &Particle) -> Self {
        let [r, g, b] = p.color.to_unit();
        Self {
            position: [p.position.x as f32, p.position.y as f32],
            radius: p.size as f32,
            alpha: p.alpha as f32,
            color: [r, g, b, 1.0],
        }
    }
}

/// Rewrite `out` so it mirrors `particles` one-to-one, reusing its allocation.
pub fn write_sprites(particles: &[Particle], out: &mut Vec<AuraSprite>) {
    out.clear();
    out.extend(particles.iter().map(AuraSprite::from));
}
