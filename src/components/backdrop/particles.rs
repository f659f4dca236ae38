//! Drifting light specks that wrap around the viewport edges.

use std::f64::consts::TAU;

use rand::Rng;

use super::config::{ParticleConfig, Range};
use super::surface::Surface;
use super::types::Viewport;

/// A single floating particle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Particle {
	/// Horizontal position in px.
	pub x: f64,
	/// Vertical position in px.
	pub y: f64,
	/// Horizontal velocity in px per tick.
	pub vx: f64,
	/// Vertical drift in px per tick.
	pub vy: f64,
	/// Radius in px.
	pub r: f64,
	/// Fill opacity.
	pub alpha: f64,
	/// Wobble phase in `[0, 2π)`.
	pub phase: f64,
}

impl Particle {
	/// Particle with random attributes for the viewport.
	pub fn new<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, config: &ParticleConfig) -> Self {
		let mut particle = Self::default();
		particle.reset(rng, viewport, config);
		particle
	}

	/// Overwrite every attribute with fresh random values.
	pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport, config: &ParticleConfig) {
		self.x = Range::new(0.0, viewport.width).sample(rng);
		self.y = Range::new(0.0, viewport.height).sample(rng);
		self.vx = config.speed_x.sample(rng);
		self.vy = config.speed_y.sample(rng);
		self.r = config.radius.sample(rng);
		self.alpha = config.alpha.sample(rng);
		self.phase = Range::new(0.0, TAU).sample(rng);
	}

	/// Advance one tick: drift, wobble vertically, then wrap around the edges.
	pub fn update(&mut self, viewport: Viewport, config: &ParticleConfig) {
		// Only sin(phase) is observed, so keep it bounded.
		self.phase = (self.phase + config.phase_step) % TAU;

		self.x += self.vx;
		self.y += self.vy + self.phase.sin() * config.wobble;

		let (mx, my) = (config.margin_x, config.margin_y);
		if self.x < -mx {
			self.x = viewport.width + mx;
		} else if self.x > viewport.width + mx {
			self.x = -mx;
		}
		if self.y < -my {
			self.y = viewport.height + my;
		} else if self.y > viewport.height + my {
			self.y = -my;
		}
	}

	/// Paint the particle as a plain disc.
	pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, config: &ParticleConfig) {
		surface.fill_circle(self.x, self.y, self.r, config.color.with_alpha(self.alpha), None);
	}
}

/// Build a fresh population sized for the viewport.
pub fn seed_particles<R: Rng + ?Sized>(
	rng: &mut R,
	viewport: Viewport,
	config: &ParticleConfig,
) -> Vec<Particle> {
	(0..config.count_for(viewport))
		.map(|_| Particle::new(rng, viewport, config))
		.collect()
}
