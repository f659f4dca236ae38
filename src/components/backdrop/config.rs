//! Tunable parameters for every backdrop layer.
//!
//! This module centralizes the numbers that shape the animation: population
//! sizes, speed and size ranges, link distance and the ring/orbit geometry.
//!
//! Every struct deserializes with `#[serde(default)]`, so a page can override a
//! single value through a JSON block without restating the others:
//!
//! ```json
//! { "balls": { "count": 6 }, "links": { "distance": 140 } }
//! ```

use rand::Rng;
use serde::Deserialize;

use super::style::Color;
use super::types::Viewport;

/// Half-open interval `[min, max)` that attributes are sampled from.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Range {
	/// Inclusive lower bound.
	pub min: f64,
	/// Exclusive upper bound.
	pub max: f64,
}

impl Range {
	/// Range over `[min, max)`.
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Draw a uniform value from the range.
	///
	/// An empty or inverted range yields `min` instead of panicking, which
	/// happens for degenerate viewports (zero width, ball larger than screen).
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
		if self.max > self.min {
			rng.gen_range(self.min..self.max)
		} else {
			self.min
		}
	}

	/// Whether `value` lies inside the half-open interval.
	pub fn contains(&self, value: f64) -> bool {
		value >= self.min && value < self.max
	}
}

/// Drifting particle population and motion.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
	/// Viewport area (px²) that accounts for one extra particle.
	pub area_per_particle: f64,
	/// Particles present regardless of viewport size.
	pub base_count: usize,
	/// Horizontal velocity in px per tick.
	pub speed_x: Range,
	/// Vertical drift in px per tick, before the wobble.
	pub speed_y: Range,
	/// Disc radius in px.
	pub radius: Range,
	/// Fill opacity.
	pub alpha: Range,
	/// Phase advance per tick for the vertical wobble.
	pub phase_step: f64,
	/// Amplitude of the vertical wobble in px per tick.
	pub wobble: f64,
	/// How far past the left/right edge a particle travels before wrapping.
	pub margin_x: f64,
	/// How far past the top/bottom edge a particle travels before wrapping.
	pub margin_y: f64,
	/// Fill color; its alpha is replaced per particle.
	pub color: Color,
}

impl ParticleConfig {
	/// Population size for a viewport: `round(area / area_per_particle) + base`.
	pub fn count_for(&self, viewport: Viewport) -> usize {
		if self.area_per_particle <= 0.0 || viewport.area() <= 0.0 {
			return self.base_count;
		}
		(viewport.area() / self.area_per_particle).round() as usize + self.base_count
	}
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			area_per_particle: 70_000.0,
			base_count: 25,
			speed_x: Range::new(-0.25, 0.25),
			speed_y: Range::new(-0.1, 0.1),
			radius: Range::new(0.6, 2.1),
			alpha: Range::new(0.06, 0.3),
			phase_step: 0.002,
			wobble: 0.15,
			margin_x: 10.0,
			margin_y: 20.0,
			color: Color::WHITE,
		}
	}
}

/// Bouncing ball population.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BallConfig {
	/// Fixed population size, independent of the viewport.
	pub count: usize,
	/// Ball radius in px, clamped to fit the viewport.
	pub radius: Range,
	/// Per-axis velocity range; covers both directions.
	pub speed: Range,
	/// Fill opacity range; each ball keeps the value it was created with.
	pub alpha: Range,
	/// Fill color; its alpha is replaced per ball.
	pub color: Color,
	/// Shadow color of the soft glow.
	pub glow_color: Color,
	/// Shadow blur of the glow in px.
	pub glow_blur: f64,
}

impl Default for BallConfig {
	fn default() -> Self {
		Self {
			count: 18,
			radius: Range::new(10.0, 28.0),
			speed: Range::new(-1.2, 1.2),
			alpha: Range::new(0.10, 0.22),
			color: Color::SLATE,
			glow_color: Color::SLATE.with_alpha(0.18),
			glow_blur: 18.0,
		}
	}
}

/// Connective lines between nearby particles.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
	/// Particles closer than this (px) are linked.
	pub distance: f64,
	/// Line opacity for two coincident particles.
	pub max_opacity: f64,
	/// Stroke width in px.
	pub line_width: f64,
	/// Line color; its alpha is replaced per link.
	pub color: Color,
}

impl LinkConfig {
	/// Squared link distance, compared against squared pair distances.
	pub fn threshold_sq(&self) -> f64 {
		self.distance * self.distance
	}
}

impl Default for LinkConfig {
	fn default() -> Self {
		Self {
			distance: 100.0,
			max_opacity: 0.06,
			line_width: 0.6,
			color: Color::WHITE,
		}
	}
}

/// Dashed rings breathing around the viewport center.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
	/// Number of rings.
	pub count: usize,
	/// Resting radius of the innermost ring in px.
	pub base_radius: f64,
	/// Extra radius per ring index.
	pub radius_step: f64,
	/// Breathing amplitude in px.
	pub amplitude: f64,
	/// Clock divisor (ms) for the breathing sine.
	pub period: f64,
	/// Opacity of the innermost ring.
	pub alpha: f64,
	/// Extra opacity per ring index.
	pub alpha_step: f64,
	/// Stroke width in px.
	pub line_width: f64,
	/// Dash pattern `(dash, gap)` in px.
	pub dash: (f64, f64),
	/// Stroke color; its alpha is replaced per ring.
	pub color: Color,
	/// Shadow color of the glow.
	pub glow_color: Color,
	/// Shadow blur of the glow in px.
	pub glow_blur: f64,
}

impl Default for PulseConfig {
	fn default() -> Self {
		Self {
			count: 3,
			base_radius: 120.0,
			radius_step: 60.0,
			amplitude: 18.0,
			period: 900.0,
			alpha: 0.18,
			alpha_step: 0.07,
			line_width: 2.2,
			dash: (8.0, 12.0),
			color: Color::SLATE,
			glow_color: Color::SLATE.with_alpha(0.25),
			glow_blur: 12.0,
		}
	}
}

/// Small circles orbiting the viewport center.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
	/// Number of orbiting circles, spread evenly by angle.
	pub count: usize,
	/// Clock divisor (ms) for the orbit angle.
	pub angular_period: f64,
	/// Orbit radius of the first circle in px.
	pub base_orbit: f64,
	/// Extra orbit radius per index.
	pub orbit_step: f64,
	/// Resting circle radius in px.
	pub radius: f64,
	/// Radius oscillation amplitude in px.
	pub amplitude: f64,
	/// Clock divisor (ms) for the radius sine.
	pub period: f64,
	/// Stroke width in px.
	pub line_width: f64,
	/// Stroke color.
	pub color: Color,
	/// Shadow color of the glow.
	pub glow_color: Color,
	/// Shadow blur of the glow in px.
	pub glow_blur: f64,
}

impl Default for OrbitConfig {
	fn default() -> Self {
		Self {
			count: 5,
			angular_period: 1200.0,
			base_orbit: 80.0,
			orbit_step: 32.0,
			radius: 22.0,
			amplitude: 10.0,
			period: 600.0,
			line_width: 1.5,
			color: Color::SLATE.with_alpha(0.18),
			glow_color: Color::SLATE.with_alpha(0.18),
			glow_blur: 8.0,
		}
	}
}

/// Top-to-bottom darkening painted under everything else.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct VignetteConfig {
	/// Gradient color at the top edge.
	pub top: Color,
	/// Gradient color at the bottom edge.
	pub bottom: Color,
}

impl Default for VignetteConfig {
	fn default() -> Self {
		Self {
			top: Color::rgba(0, 0, 0, 0.0),
			bottom: Color::rgba(0, 0, 0, 0.18),
		}
	}
}

/// Complete backdrop configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
	/// Drifting particles.
	pub particles: ParticleConfig,
	/// Bouncing balls.
	pub balls: BallConfig,
	/// Lines between nearby particles.
	pub links: LinkConfig,
	/// Pulsing dashed rings.
	pub pulse: PulseConfig,
	/// Orbiting circles.
	pub orbit: OrbitConfig,
	/// Background gradient.
	pub vignette: VignetteConfig,
}
