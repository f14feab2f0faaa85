//! Particle store and per-frame simulation.
//!
//! A [`ParticleField`] owns every particle on the surface. [`ParticleField::frame`]
//! advances and paints them in a single pass: each particle is moved, pushed
//! away from the pointer, bounced off the edges, drawn, and then linked to
//! its neighbours. Neighbours later in the list have not moved yet when the
//! links are drawn.

use crate::color::Color;
use crate::config::ParticleConfig;
use crate::input::PointerState;
use crate::particle::{link_opacity, Particle};
use crate::renderer::Painter;
use crate::surface::Surface;
use rand::Rng;

pub struct ParticleField {
    surface: Surface,
    particles: Vec<Particle>,
    config: ParticleConfig,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(surface: Surface, config: ParticleConfig, rng: &mut R) -> Self {
        let mut field = ParticleField {
            surface,
            particles: Vec::new(),
            config,
        };
        field.populate(rng);
        field
    }

    /// Adopt new surface dimensions and regenerate every particle
    pub fn resize<R: Rng + ?Sized>(&mut self, surface: Surface, rng: &mut R) {
        self.surface = surface;
        self.populate(rng);
        log::debug!(
            "particle field resized to {}x{}, {} particles",
            surface.width,
            surface.height,
            self.particles.len()
        );
    }

    fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let count = self
            .surface
            .particle_count(self.config.area_per_particle, self.config.max_particles);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::random(rng, self.surface, &self.config));
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Move one particle by its velocity, the pointer, and the walls
    pub fn advance(&mut self, index: usize, pointer: &PointerState) {
        let config = &self.config;
        let surface = self.surface;
        let particle = &mut self.particles[index];
        particle.integrate();
        if let Some(pointer_pos) = pointer.active_position() {
            particle.repel_from(
                pointer_pos,
                config.interaction_radius,
                config.repulsion_strength,
            );
        }
        particle.reflect(surface, config.bounce_damping);
    }

    /// Advance every particle without drawing
    pub fn step(&mut self, pointer: &PointerState) {
        for i in 0..self.particles.len() {
            self.advance(i, pointer);
        }
    }

    /// Clear the surface, then advance and paint every particle with its links
    pub fn frame<P: Painter + ?Sized>(&mut self, pointer: &PointerState, painter: &mut P) {
        painter.clear(self.surface);
        let hue = Color::from(self.config.color);
        for i in 0..self.particles.len() {
            self.advance(i, pointer);
            let particle = self.particles[i];
            painter.fill_circle(particle.pos, particle.radius, particle.color);

            for (j, other) in self.particles.iter().enumerate() {
                if i == j {
                    continue;
                }
                let distance = particle.distance_to(other);
                if distance >= self.config.link_distance {
                    continue;
                }
                let opacity = link_opacity(
                    distance,
                    self.config.link_distance,
                    self.config.link_max_opacity,
                );
                painter.stroke_line(
                    particle.pos,
                    other.pos,
                    self.config.link_width,
                    hue.with_alpha(opacity),
                );
            }
        }
    }
}
