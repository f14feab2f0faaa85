// Particle struct keeping track of position, velocity, size and color,
// plus the per-frame kinematics applied to it

use crate::color::Color;
use crate::config::ParticleConfig;
use crate::surface::Surface;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// A particle placed uniformly inside `surface`, drifting slowly
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        surface: Surface,
        config: &ParticleConfig,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * surface.width as f64;
        let pos_y = rng.gen::<f64>() * surface.height as f64;
        let radius = rng.gen::<f64>() * (config.max_radius - config.min_radius) + config.min_radius;
        let vel_x = rng.gen::<f64>() * 2.0 * config.max_speed - config.max_speed;
        let vel_y = rng.gen::<f64>() * 2.0 * config.max_speed - config.max_speed;
        let alpha = rng.gen::<f64>() * (config.max_alpha - config.min_alpha) + config.min_alpha;
        let color = Color::from(config.color).with_alpha(alpha);
        Particle::new([pos_x, pos_y], [vel_x, vel_y], radius, color)
    }

    pub fn integrate(&mut self) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
    }

    /// Push the particle directly away from `pointer`
    pub fn repel_from(&mut self, pointer: Vector2<f64>, interaction_radius: f64, strength: f64) {
        let to_pointer = vecmath::vec2_sub(pointer, self.pos);
        let distance = vecmath::vec2_len(to_pointer);
        let force = repulsion_force(distance, interaction_radius);
        if force <= 0.0 {
            return;
        }
        // Pointer exactly on the particle: push along -x, like atan2(0, 0) = 0 would
        let dir = if distance > 0.0 {
            vecmath::vec2_scale(to_pointer, 1.0 / distance)
        } else {
            [1.0, 0.0]
        };
        self.pos = vecmath::vec2_sub(self.pos, vecmath::vec2_scale(dir, force * strength));
    }

    /// Clamp to the surface, bouncing the offending velocity component
    pub fn reflect(&mut self, surface: Surface, damping: f64) {
        let bounds = [surface.width as f64, surface.height as f64];
        for axis in 0..2 {
            if self.pos[axis] < 0.0 {
                self.pos[axis] = 0.0;
                self.vel[axis] *= -damping;
            } else if self.pos[axis] > bounds[axis] {
                self.pos[axis] = bounds[axis];
                self.vel[axis] *= -damping;
            }
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(self.pos, other.pos))
    }
}

/// Repulsion magnitude at `distance` from the pointer, 1 at the pointer, 0 at the radius
pub fn repulsion_force(distance: f64, interaction_radius: f64) -> f64 {
    if distance >= interaction_radius {
        return 0.0;
    }
    let falloff = (interaction_radius - distance) / interaction_radius;
    falloff * falloff
}

/// Opacity of the link between two particles `distance` apart
pub fn link_opacity(distance: f64, link_distance: f64, max_opacity: f64) -> f64 {
    if distance >= link_distance {
        return 0.0;
    }
    let falloff = 1.0 - distance / link_distance;
    falloff * falloff * max_opacity
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still(pos: Vector2<f64>) -> Particle {
        Particle::new(pos, [0.0, 0.0], 1.0, Color::rgb(124, 255, 161))
    }

    #[test]
    fn test_random_particles_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = ParticleConfig::default();
        let surface = Surface::new(800, 600);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, surface, &config);
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 600.0);
            assert!(p.radius >= 0.5 && p.radius < 2.0);
            assert!(p.vel[0] >= -0.15 && p.vel[0] < 0.15);
            assert!(p.vel[1] >= -0.15 && p.vel[1] < 0.15);
            assert!(p.color.a >= 0.1 && p.color.a < 0.3);
            assert_eq!((p.color.r, p.color.g, p.color.b), (124, 255, 161));
        }
    }

    #[test]
    fn test_integrate_adds_velocity() {
        let mut p = Particle::new([10.0, 20.0], [0.1, -0.05], 1.0, Color::rgb(0, 0, 0));
        p.integrate();
        assert!((p.pos[0] - 10.1).abs() < 1e-12);
        assert!((p.pos[1] - 19.95).abs() < 1e-12);
    }

    #[test]
    fn test_reflect_clamps_and_damps() {
        let surface = Surface::new(100, 50);

        let mut p = Particle::new([100.4, 25.0], [0.5, 0.1], 1.0, Color::rgb(0, 0, 0));
        p.reflect(surface, 0.8);
        assert_eq!(p.pos, [100.0, 25.0]);
        assert!((p.vel[0] + 0.4).abs() < 1e-12);
        assert_eq!(p.vel[1], 0.1);

        let mut p = Particle::new([-0.2, -3.0], [-0.1, -0.15], 1.0, Color::rgb(0, 0, 0));
        p.reflect(surface, 0.8);
        assert_eq!(p.pos, [0.0, 0.0]);
        assert!((p.vel[0] - 0.08).abs() < 1e-12);
        assert!((p.vel[1] - 0.12).abs() < 1e-12);
    }

    #[test]
    fn test_reflect_leaves_inside_particles_alone() {
        let mut p = Particle::new([0.0, 50.0], [-0.1, 0.1], 1.0, Color::rgb(0, 0, 0));
        let before = p;
        p.reflect(Surface::new(100, 50), 0.8);
        assert_eq!(p, before);
    }

    #[test]
    fn test_repulsion_force_falls_off_monotonically() {
        assert_eq!(repulsion_force(0.0, 150.0), 1.0);
        assert_eq!(repulsion_force(150.0, 150.0), 0.0);
        assert_eq!(repulsion_force(400.0, 150.0), 0.0);
        assert!((repulsion_force(75.0, 150.0) - 0.25).abs() < 1e-12);

        let mut previous = repulsion_force(0.0, 150.0);
        for step in 1..150 {
            let force = repulsion_force(step as f64, 150.0);
            assert!(force < previous, "force must shrink with distance");
            previous = force;
        }
    }

    #[test]
    fn test_repel_pushes_away_from_pointer() {
        let mut p = still([100.0, 100.0]);
        p.repel_from([100.0 + 75.0, 100.0], 150.0, 1.5);
        // force 0.25 * 1.5 along -x
        assert!((p.pos[0] - (100.0 - 0.375)).abs() < 1e-12);
        assert!((p.pos[1] - 100.0).abs() < 1e-12);

        let mut p = still([100.0, 100.0]);
        p.repel_from([100.0, 400.0], 150.0, 1.5);
        assert_eq!(p.pos, [100.0, 100.0]);
    }

    #[test]
    fn test_repel_with_pointer_on_particle() {
        let mut p = still([10.0, 10.0]);
        p.repel_from([10.0, 10.0], 150.0, 1.5);
        assert!((p.pos[0] - 8.5).abs() < 1e-12);
        assert_eq!(p.pos[1], 10.0);
    }

    #[test]
    fn test_link_opacity() {
        assert_eq!(link_opacity(80.0, 80.0, 0.15), 0.0);
        assert_eq!(link_opacity(120.0, 80.0, 0.15), 0.0);
        assert!((link_opacity(40.0, 80.0, 0.15) - 0.0375).abs() < 1e-12);
        assert!((link_opacity(1e-9, 80.0, 0.15) - 0.15).abs() < 1e-9);
    }
}
