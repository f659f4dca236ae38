//! Backdrop animation state and the frame driver.
//!
//! [`BackdropState`] is the single application context for the canvas: it owns
//! the viewport, both entity populations and the random source. The component
//! shares it between the animation callback and the resize listener; both run
//! on the UI thread and never interleave.

use log::{debug, info};
use rand::rngs::SmallRng;

use super::balls::{BouncingBall, seed_balls};
use super::config::BackdropConfig;
use super::particles::{Particle, seed_particles};
use super::render;
use super::surface::Surface;
use super::types::Viewport;

/// Whether the frame driver keeps scheduling frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
	/// Frames are being scheduled.
	Running,
	/// Terminal: nothing restarts the loop short of a page reload.
	Stopped,
}

/// Everything the animation mutates from frame to frame.
pub struct BackdropState {
	/// Parameters for every layer.
	pub config: BackdropConfig,
	/// Current surface dimensions.
	pub viewport: Viewport,
	/// Drifting particles, sized to the viewport area.
	pub particles: Vec<Particle>,
	/// Bouncing balls.
	pub balls: Vec<BouncingBall>,
	run_state: RunState,
	visible: bool,
	ticks: u64,
	rng: SmallRng,
}

impl BackdropState {
	/// Create a running state with both populations seeded for `viewport`.
	pub fn new(config: BackdropConfig, viewport: Viewport, rng: SmallRng) -> Self {
		let mut state = Self {
			config,
			viewport,
			particles: Vec::new(),
			balls: Vec::new(),
			run_state: RunState::Running,
			visible: true,
			ticks: 0,
			rng,
		};
		state.reseed();
		state
	}

	/// Discard both populations and build new ones for the current viewport.
	pub fn reseed(&mut self) {
		self.particles = seed_particles(&mut self.rng, self.viewport, &self.config.particles);
		self.balls = seed_balls(&mut self.rng, self.viewport, &self.config.balls);
		info!(
			"backdrop: seeded {} particles, {} balls for {}x{}",
			self.particles.len(),
			self.balls.len(),
			self.viewport.width,
			self.viewport.height
		);
	}

	/// Adopt new dimensions. Always reseeds, even if nothing changed.
	pub fn resize(&mut self, viewport: Viewport) {
		debug!(
			"backdrop: resize {}x{} -> {}x{}",
			self.viewport.width, self.viewport.height, viewport.width, viewport.height
		);
		self.viewport = viewport;
		if self.run_state == RunState::Stopped {
			return;
		}
		self.reseed();
	}

	/// Halt the animation for good, drop all entities and hide the surface.
	pub fn stop(&mut self) {
		self.run_state = RunState::Stopped;
		self.particles.clear();
		self.balls.clear();
		self.visible = false;
	}

	#[cfg(test)]
	pub(crate) fn run_state(&self) -> RunState {
		self.run_state
	}

	/// Whether the frame driver keeps scheduling frames.
	pub fn is_running(&self) -> bool {
		self.run_state == RunState::Running
	}

	/// Whether the drawing surface should be shown.
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	/// Number of frames driven so far.
	#[cfg(test)]
	pub(crate) fn ticks(&self) -> u64 {
		self.ticks
	}

	/// Move every entity one tick forward.
	pub fn advance(&mut self) {
		let viewport = self.viewport;
		for ball in &mut self.balls {
			ball.update(viewport);
		}
		for particle in &mut self.particles {
			particle.update(viewport, &self.config.particles);
		}
	}

	/// Run one tick: advance the entities and paint them.
	///
	/// Returns whether the next frame should be scheduled. A stopped state
	/// neither moves nor draws.
	pub fn frame<S: Surface + ?Sized>(&mut self, time: f64, surface: &mut S) -> bool {
		if self.run_state == RunState::Stopped {
			return false;
		}
		self.advance();
		render::render(self, time, surface);
		self.ticks += 1;
		true
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::super::style::Color;
	use super::super::surface::recording::{DrawCall, RecordingSurface};
	use super::*;

	fn state(width: f64, height: f64) -> BackdropState {
		BackdropState::new(
			BackdropConfig::default(),
			Viewport::new(width, height),
			SmallRng::seed_from_u64(42),
		)
	}

	/// Layer of a recorded call, in painting order.
	fn layer(call: &DrawCall) -> u8 {
		match call {
			DrawCall::Clear | DrawCall::Gradient { .. } => 0,
			DrawCall::FillCircle { glow: true, .. } => 1,
			DrawCall::StrokeCircle { .. } => 2,
			DrawCall::FillCircle { glow: false, .. } => 3,
			DrawCall::Line { .. } => 4,
		}
	}

	#[test]
	fn seeds_populations_for_the_viewport() {
		let state = state(1000.0, 800.0);
		assert_eq!(state.particles.len(), 36);
		assert_eq!(state.balls.len(), 18);
		assert!(state.is_running());
		assert!(state.is_visible());
	}

	#[test]
	fn resizing_twice_to_the_same_size_reseeds_both_times() {
		let mut state = state(1000.0, 800.0);
		let before = state.particles.clone();

		state.resize(Viewport::new(1400.0, 900.0));
		let first = state.particles.clone();
		state.resize(Viewport::new(1400.0, 900.0));
		let second = state.particles.clone();

		// round(1_260_000 / 70_000) + 25
		assert_eq!(first.len(), 43);
		assert_eq!(second.len(), 43);
		assert_eq!(state.balls.len(), 18);
		assert_ne!(first, before);
		assert_ne!(first, second);
	}

	#[test]
	fn resize_places_balls_inside_the_new_viewport() {
		let mut state = state(1600.0, 1200.0);
		state.resize(Viewport::new(320.0, 240.0));
		for ball in &state.balls {
			assert!(ball.x >= ball.r && ball.x <= 320.0 - ball.r);
			assert!(ball.y >= ball.r && ball.y <= 240.0 - ball.r);
		}
	}

	#[test]
	fn frame_paints_layers_in_order() {
		let mut state = state(400.0, 300.0);
		// Pack particles together so links are guaranteed.
		for (i, p) in state.particles.iter_mut().enumerate() {
			p.x = 200.0 + i as f64;
			p.y = 150.0;
			p.vx = 0.0;
			p.vy = 0.0;
		}
		let mut surface = RecordingSurface::default();

		assert!(state.frame(0.0, &mut surface));

		let layers: Vec<u8> = surface.calls.iter().map(layer).collect();
		assert!(layers.windows(2).all(|w| w[0] <= w[1]), "out of order: {layers:?}");
		for expected in 0..=4 {
			assert!(layers.contains(&expected), "layer {expected} missing");
		}
		assert_eq!(surface.calls[0], DrawCall::Clear);
		assert_eq!(
			surface.calls[1],
			DrawCall::Gradient {
				top: Color::rgba(0, 0, 0, 0.0),
				bottom: Color::rgba(0, 0, 0, 0.18),
			}
		);
	}

	#[test]
	fn frame_draws_every_entity_once() {
		let mut state = state(1000.0, 800.0);
		let mut surface = RecordingSurface::default();
		state.frame(16.0, &mut surface);

		let count = |f: fn(&DrawCall) -> bool| surface.calls.iter().filter(|c| f(c)).count();
		assert_eq!(count(|c| matches!(c, DrawCall::FillCircle { glow: true, .. })), 18);
		assert_eq!(count(|c| matches!(c, DrawCall::FillCircle { glow: false, .. })), 36);
		assert_eq!(count(|c| matches!(c, DrawCall::StrokeCircle { dashed: true, .. })), 3);
		assert_eq!(count(|c| matches!(c, DrawCall::StrokeCircle { dashed: false, .. })), 5);
	}

	#[test]
	fn frames_advance_entities_and_count_ticks() {
		let mut state = state(1000.0, 800.0);
		let before = state.balls[0].clone();
		let mut surface = RecordingSurface::default();

		for t in 0..3 {
			assert!(state.frame(t as f64 * 16.0, &mut surface));
		}

		assert_eq!(state.ticks(), 3);
		assert_ne!(state.balls[0], before);
	}

	#[test]
	fn stopped_state_never_ticks() {
		let mut state = state(1000.0, 800.0);
		state.stop();
		let mut surface = RecordingSurface::default();

		assert!(!state.frame(0.0, &mut surface));
		assert_eq!(state.ticks(), 0);
		assert!(surface.calls.is_empty());
		assert!(state.particles.is_empty());
		assert!(state.balls.is_empty());
		assert!(!state.is_visible());
		assert_eq!(state.run_state(), RunState::Stopped);
	}

	#[test]
	fn resize_after_stop_keeps_populations_empty() {
		let mut state = state(1000.0, 800.0);
		state.stop();
		state.resize(Viewport::new(1200.0, 900.0));
		assert!(state.particles.is_empty());
		assert!(state.balls.is_empty());
		assert_eq!(state.viewport, Viewport::new(1200.0, 900.0));
	}
}
