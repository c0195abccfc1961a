//! Floating particle backdrop for the home section.
//!
//! Particles are placed once at startup and then animated along a fixed
//! keyframe loop. Positions are fractions of the backdrop rect so the field
//! survives window resizes.

use rand::Rng;

/// Number of particles in the home backdrop.
pub const PARTICLE_COUNT: usize = 50;

/// Keyframes of the float loop: (progress, opacity, dx, dy).
const FLOAT_KEYFRAMES: [(f32, f32, f32, f32); 5] = [
    (0.00, 0.0, 0.0, 0.0),
    (0.25, 1.0, 10.0, -20.0),
    (0.50, 0.5, -10.0, 0.0),
    (0.75, 1.0, 5.0, 20.0),
    (1.00, 0.0, 0.0, 0.0),
];

/// A single particle and its animation timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position as a fraction of the backdrop width.
    pub x: f32,
    /// Vertical position as a fraction of the backdrop height.
    pub y: f32,
    /// Diameter in points.
    pub size: f32,
    /// Seconds before the particle starts animating.
    pub delay: f32,
    /// Length of one float loop in seconds.
    pub duration: f32,
}

/// Rendered state of a particle at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFrame {
    pub opacity: f32,
    pub dx: f32,
    pub dy: f32,
}

impl ParticleFrame {
    const HIDDEN: ParticleFrame = ParticleFrame {
        opacity: 0.0,
        dx: 0.0,
        dy: 0.0,
    };
}

impl Particle {
    /// Places a particle at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(0.0..1.0),
            y: rng.gen_range(0.0..1.0),
            size: rng.gen_range(2.0..7.0),
            delay: rng.gen_range(0.0..10.0),
            duration: rng.gen_range(5.0..15.0),
        }
    }

    /// Returns the particle's state `time` seconds after startup.
    pub fn frame_at(&self, time: f32) -> ParticleFrame {
        if time < self.delay || self.duration <= 0.0 {
            return ParticleFrame::HIDDEN;
        }
        let progress = ((time - self.delay) % self.duration) / self.duration;
        float_frame(progress)
    }
}

/// Generates the backdrop particle field.
pub fn generate_field<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}

/// Interpolates the float loop at `progress` in `[0, 1]`.
pub fn float_frame(progress: f32) -> ParticleFrame {
    let progress = progress.clamp(0.0, 1.0);
    for pair in FLOAT_KEYFRAMES.windows(2) {
        let (p0, o0, x0, y0) = pair[0];
        let (p1, o1, x1, y1) = pair[1];
        if progress <= p1 {
            let t = (progress - p0) / (p1 - p0);
            return ParticleFrame {
                opacity: o0 + (o1 - o0) * t,
                dx: x0 + (x1 - x0) * t,
                dy: y0 + (y1 - y0) * t,
            };
        }
    }
    ParticleFrame::HIDDEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_keyframes_hit_exactly() {
        let quarter = float_frame(0.25);
        assert!(approx(quarter.opacity, 1.0));
        assert!(approx(quarter.dx, 10.0));
        assert!(approx(quarter.dy, -20.0));

        let half = float_frame(0.5);
        assert!(approx(half.opacity, 0.5));
        assert!(approx(half.dx, -10.0));

        assert_eq!(float_frame(0.0), ParticleFrame::HIDDEN);
        assert_eq!(float_frame(1.0), ParticleFrame::HIDDEN);
    }

    #[test]
    fn test_interpolates_between_keyframes() {
        let frame = float_frame(0.125);
        assert!(approx(frame.opacity, 0.5));
        assert!(approx(frame.dx, 5.0));
        assert!(approx(frame.dy, -10.0));
    }

    #[test]
    fn test_hidden_before_delay() {
        let particle = Particle {
            x: 0.5,
            y: 0.5,
            size: 3.0,
            delay: 4.0,
            duration: 8.0,
        };
        assert_eq!(particle.frame_at(3.9), ParticleFrame::HIDDEN);
        // One quarter into the loop, then the same point one loop later
        assert!(approx(particle.frame_at(6.0).opacity, 1.0));
        assert!(approx(particle.frame_at(14.0).opacity, 1.0));
    }

    #[test]
    fn test_generated_field_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = generate_field(&mut rng, PARTICLE_COUNT);
        assert_eq!(field.len(), PARTICLE_COUNT);
        for p in &field {
            assert!((0.0..1.0).contains(&p.x));
            assert!((0.0..1.0).contains(&p.y));
            assert!((2.0..7.0).contains(&p.size));
            assert!((0.0..10.0).contains(&p.delay));
            assert!((5.0..15.0).contains(&p.duration));
        }
    }
}
