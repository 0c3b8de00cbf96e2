//! Pixel-snow particle field.
//!
//! A fixed set of independent particles falls over the hero section. Each
//! tick advances every particle by its own speed and drift; a particle that
//! leaves the bottom edge is recycled in place (fresh randoms, respawned
//! above the top edge) rather than reallocated. Horizontal positions wrap
//! modulo the field width. Pure numeric simulation: no I/O, no failure modes.

use crate::prng::Prng;

/// Matches the density of the original hero snowfall.
pub const PARTICLE_COUNT: usize = 100;

const SPEED_MIN: f32 = 0.2;
const SPEED_MAX: f32 = 1.2;
const DRIFT_HALF_RANGE: f32 = 0.15;
const OPACITY_MIN: f32 = 0.3;
const OPACITY_MAX: f32 = 0.8;
const SIZE_MIN: u32 = 2;
const SIZE_MAX: u32 = 4;

/// One snow pixel. Plain value record, recycled via [`Particle::respawn`].
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub size: u32,
    pub drift: f32,
    pub opacity: f32,
}

impl Particle {
    /// Fresh particle above the top edge, the only transition out of the
    /// falling state.
    fn respawn(rng: &mut Prng, width: f32, height: f32) -> Self {
        Self {
            x: rng.gen_range_f32(0.0, width.max(1.0)),
            y: -rng.gen_range_f32(0.0, height.max(1.0)),
            speed: rng.gen_range_f32(SPEED_MIN, SPEED_MAX),
            size: rng.gen_range_u32(SIZE_MIN, SIZE_MAX + 1),
            drift: rng.gen_range_f32(-DRIFT_HALF_RANGE, DRIFT_HALF_RANGE),
            opacity: rng.gen_range_f32(OPACITY_MIN, OPACITY_MAX),
        }
    }
}

/// The particle collection plus the geometry it falls through. Owned
/// exclusively by the animation loop; nothing else writes it.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    rng: Prng,
    width: f32,
    height: f32,
}

impl ParticleField {
    pub fn new(count: usize, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = Prng::new(seed);
        let particles = (0..count)
            .map(|_| {
                let mut p = Particle::respawn(&mut rng, width, height);
                // Scatter the initial population across the visible field so
                // the effect does not start with an empty sky.
                p.y = rng.gen_range_f32(0.0, height.max(1.0));
                p
            })
            .collect();

        Self {
            particles,
            rng,
            width,
            height,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Follows the host surface. Existing particles keep falling; out-of-range
    /// ones recycle on their next tick.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    /// One simulation tick.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.y += p.speed;
            p.x += p.drift;

            if p.y > self.height {
                *p = Particle::respawn(&mut self.rng, self.width, self.height);
                continue;
            }

            // Wrap horizontally, no bounce.
            if p.x >= self.width {
                p.x -= self.width;
            } else if p.x < 0.0 {
                p.x += self.width;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respawn_lands_above_the_field_within_width() {
        let mut rng = Prng::new(3);
        for _ in 0..500 {
            let p = Particle::respawn(&mut rng, 800.0, 600.0);
            assert!((0.0..800.0).contains(&p.x));
            assert!(p.y <= 0.0);
            assert!(p.speed > 0.0);
            assert!((SIZE_MIN..=SIZE_MAX).contains(&p.size));
            assert!((OPACITY_MIN..OPACITY_MAX).contains(&p.opacity));
        }
    }

    #[test]
    fn falling_particles_recycle_past_the_bottom() {
        let mut field = ParticleField::new(PARTICLE_COUNT, 640.0, 10.0, 9);
        // Enough ticks for every particle to cross a 10px field at min speed.
        for _ in 0..200 {
            field.step();
        }
        for p in field.particles() {
            assert!(p.y <= field.height() + SPEED_MAX);
        }
    }

    #[test]
    fn horizontal_positions_wrap_modulo_width() {
        let mut field = ParticleField::new(50, 100.0, 100_000.0, 17);
        for _ in 0..5_000 {
            field.step();
            for p in field.particles() {
                assert!((0.0..100.0 + DRIFT_HALF_RANGE).contains(&p.x));
            }
        }
    }

    #[test]
    fn field_size_is_fixed_for_its_lifetime() {
        let mut field = ParticleField::new(PARTICLE_COUNT, 800.0, 600.0, 1);
        for _ in 0..1_000 {
            field.step();
        }
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
    }

    #[test]
    fn resize_clamps_degenerate_dimensions() {
        let mut field = ParticleField::new(4, 800.0, 600.0, 5);
        field.resize(0.0, -3.0);
        assert_eq!(field.width(), 1.0);
        assert_eq!(field.height(), 1.0);
        field.step(); // must not panic or produce NaN positions
        for p in field.particles() {
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }
}
