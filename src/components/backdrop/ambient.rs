//! Clock-driven decorations around the viewport center.
//!
//! Both decorators are pure functions of the animation clock: the same `time`,
//! viewport and config always yield the same rings.

use std::f64::consts::TAU;

use super::config::{OrbitConfig, PulseConfig};
use super::surface::{Glow, Stroke, Surface};
use super::types::Viewport;

/// A stroked circle produced by a decorator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
	/// Center x in px.
	pub x: f64,
	/// Center y in px.
	pub y: f64,
	/// Radius in px, never negative.
	pub radius: f64,
	/// Outline style.
	pub stroke: Stroke,
}

/// Concentric dashed rings whose radii breathe with the clock.
pub fn pulsing_circles(time: f64, viewport: Viewport, config: &PulseConfig) -> Vec<Ring> {
	let (cx, cy) = viewport.center();
	(0..config.count)
		.map(|i| {
			let i = i as f64;
			let radius = config.base_radius
				+ i * config.radius_step
				+ (time / config.period + i).sin() * config.amplitude;
			Ring {
				x: cx,
				y: cy,
				radius: radius.max(0.0),
				stroke: Stroke {
					color: config.color.with_alpha(config.alpha + i * config.alpha_step),
					width: config.line_width,
					dash: Some(config.dash),
					glow: Some(Glow {
						color: config.glow_color,
						blur: config.glow_blur,
					}),
				},
			}
		})
		.collect()
}

/// Small circles evenly spaced on widening orbits, all turning together.
pub fn orbit_circles(time: f64, viewport: Viewport, config: &OrbitConfig) -> Vec<Ring> {
	let (cx, cy) = viewport.center();
	let spacing = if config.count > 0 {
		TAU / config.count as f64
	} else {
		0.0
	};
	(0..config.count)
		.map(|i| {
			let i = i as f64;
			let angle = time / config.angular_period + i * spacing;
			let orbit = config.base_orbit + i * config.orbit_step;
			Ring {
				x: cx + angle.cos() * orbit,
				y: cy + angle.sin() * orbit,
				radius: (config.radius + (time / config.period + i).sin() * config.amplitude)
					.max(0.0),
				stroke: Stroke {
					color: config.color,
					width: config.line_width,
					dash: None,
					glow: Some(Glow {
						color: config.glow_color,
						blur: config.glow_blur,
					}),
				},
			}
		})
		.collect()
}

/// Stroke each ring in order.
pub fn draw_rings<S: Surface + ?Sized>(rings: &[Ring], surface: &mut S) {
	for ring in rings {
		surface.stroke_circle(ring.x, ring.y, ring.radius, &ring.stroke);
	}
}
