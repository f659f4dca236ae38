//! Thin connective lines between particles that drift close together.
//!
//! Every unordered pair is tested once per frame, so the cost is quadratic in
//! the particle count. The population formula keeps that count small.

use super::config::LinkConfig;
use super::particles::Particle;
use super::surface::Surface;

/// Line opacity for two particles `d2` (squared px) apart.
///
/// Falls off linearly in `d²` from `max_opacity` at zero distance to 0 at the
/// link distance, and stays 0 beyond it.
pub fn link_opacity(d2: f64, config: &LinkConfig) -> f64 {
	let threshold_sq = config.threshold_sq();
	if threshold_sq <= 0.0 || d2 >= threshold_sq {
		return 0.0;
	}
	config.max_opacity * (1.0 - d2 / threshold_sq)
}

/// Draw a line for every close pair. Returns how many lines were drawn.
pub fn draw_links<S: Surface + ?Sized>(
	particles: &[Particle],
	surface: &mut S,
	config: &LinkConfig,
) -> usize {
	let mut drawn = 0;
	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let alpha = link_opacity(dx * dx + dy * dy, config);
			if alpha <= 0.0 {
				continue;
			}
			surface.line(
				(a.x, a.y),
				(b.x, b.y),
				config.color.with_alpha(alpha),
				config.line_width,
			);
			drawn += 1;
		}
	}
	drawn
}

#[cfg(test)]
mod tests {
	use super::super::surface::recording::{DrawCall, RecordingSurface};
	use super::*;

	fn at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			..Default::default()
		}
	}

	#[test]
	fn opacity_is_max_at_zero_distance() {
		let config = LinkConfig::default();
		assert_eq!(link_opacity(0.0, &config), config.max_opacity);
	}

	#[test]
	fn opacity_vanishes_at_threshold() {
		let config = LinkConfig::default();
		assert_eq!(link_opacity(10_000.0, &config), 0.0);
		assert_eq!(link_opacity(25_000.0, &config), 0.0);
	}

	#[test]
	fn opacity_decreases_with_distance() {
		let config = LinkConfig::default();
		let mut previous = link_opacity(0.0, &config);
		for d in 1..=100 {
			let d = d as f64;
			let current = link_opacity(d * d, &config);
			assert!(current < previous, "not decreasing at {d}");
			previous = current;
		}
	}

	#[test]
	fn midpoint_in_squared_distance_halves_opacity() {
		let config = LinkConfig::default();
		let half = link_opacity(5_000.0, &config);
		assert!((half - config.max_opacity / 2.0).abs() < 1e-12);
	}

	#[test]
	fn every_close_pair_is_linked_once() {
		let config = LinkConfig::default();
		// Three mutually close particles plus one far away.
		let particles = vec![at(0.0, 0.0), at(30.0, 0.0), at(0.0, 40.0), at(500.0, 500.0)];
		let mut surface = RecordingSurface::default();

		let drawn = draw_links(&particles, &mut surface, &config);

		assert_eq!(drawn, 3);
		assert_eq!(surface.calls.len(), 3);
		assert!(surface.calls.iter().all(|c| matches!(c, DrawCall::Line { .. })));
	}

	#[test]
	fn pair_at_exact_threshold_is_not_linked() {
		let config = LinkConfig::default();
		let particles = vec![at(0.0, 0.0), at(100.0, 0.0)];
		let mut surface = RecordingSurface::default();
		assert_eq!(draw_links(&particles, &mut surface, &config), 0);
	}

	#[test]
	fn line_alpha_matches_opacity_formula() {
		let config = LinkConfig::default();
		let particles = vec![at(0.0, 0.0), at(30.0, 40.0)];
		let mut surface = RecordingSurface::default();
		draw_links(&particles, &mut surface, &config);

		let DrawCall::Line { alpha, from, to } = &surface.calls[0] else {
			panic!("expected a line, got {:?}", surface.calls[0]);
		};
		assert_eq!(*from, (0.0, 0.0));
		assert_eq!(*to, (30.0, 40.0));
		assert!((alpha - 0.045).abs() < 1e-12);
	}
}
