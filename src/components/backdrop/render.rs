//! Per-frame painting of the backdrop.
//!
//! Layers are painted back to front, each one blending over the previous:
//! 1. Clear and vignette gradient
//! 2. Bouncing balls
//! 3. Pulsing rings, then orbit circles
//! 4. Particles
//! 5. Proximity links

use super::ambient::{draw_rings, orbit_circles, pulsing_circles};
use super::links::draw_links;
use super::state::BackdropState;
use super::surface::Surface;

/// Paints one complete frame of the current state.
pub fn render<S: Surface + ?Sized>(state: &BackdropState, time: f64, surface: &mut S) {
	let config = &state.config;
	let viewport = state.viewport;

	surface.clear(viewport.width, viewport.height);
	surface.fill_vertical_gradient(
		viewport.width,
		viewport.height,
		config.vignette.top,
		config.vignette.bottom,
	);

	for ball in &state.balls {
		ball.draw(surface, &config.balls);
	}

	draw_rings(&pulsing_circles(time, viewport, &config.pulse), surface);
	draw_rings(&orbit_circles(time, viewport, &config.orbit), surface);

	for particle in &state.particles {
		particle.draw(surface, &config.particles);
	}

	draw_links(&state.particles, surface, &config.links);
}
