//! Reduced-motion accessibility gate.
//!
//! The preference is read once when the backdrop mounts. Changing the OS
//! setting afterwards has no effect until the page is reloaded.

use log::{info, warn};
use web_sys::Window;

use super::state::BackdropState;

/// Media query matched when the user asks for less animation.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Reads the platform's reduced-motion preference. Unknown counts as "no".
pub fn prefers_reduced_motion(window: &Window) -> bool {
	match window.match_media(REDUCED_MOTION_QUERY) {
		Ok(Some(query)) => query.matches(),
		Ok(None) => false,
		Err(e) => {
			warn!("backdrop: matchMedia failed: {:?}", e);
			false
		}
	}
}

/// Stops the state when reduced motion is requested.
///
/// Returns whether the animation may run.
pub fn apply_gate(state: &mut BackdropState, reduced_motion: bool) -> bool {
	if reduced_motion {
		info!("backdrop: reduced motion requested, animation disabled");
		state.stop();
	}
	state.is_running()
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::super::config::BackdropConfig;
	use super::super::surface::recording::RecordingSurface;
	use super::super::types::Viewport;
	use super::*;

	fn state() -> BackdropState {
		BackdropState::new(
			BackdropConfig::default(),
			Viewport::new(1000.0, 800.0),
			SmallRng::seed_from_u64(1),
		)
	}

	#[test]
	fn gate_disables_everything_before_the_first_tick() {
		let mut state = state();
		assert!(!apply_gate(&mut state, true));

		let mut surface = RecordingSurface::default();
		assert!(!state.frame(0.0, &mut surface));

		assert_eq!(state.ticks(), 0);
		assert!(state.particles.is_empty());
		assert!(!state.is_visible());
		assert!(surface.calls.is_empty());
	}

	#[test]
	fn gated_surface_stays_hidden_across_resizes() {
		let mut state = state();
		apply_gate(&mut state, true);

		state.resize(Viewport::new(1920.0, 1080.0));

		assert!(!state.is_visible());
		assert!(!state.is_running());
		assert!(state.particles.is_empty());
		assert!(state.balls.is_empty());
	}

	#[test]
	fn gate_is_a_no_op_without_the_preference() {
		let mut state = state();
		assert!(apply_gate(&mut state, false));
		assert_eq!(state.particles.len(), 36);
		assert!(state.is_visible());
	}
}
