//! Scroll-triggered reveal of page sections.
//!
//! Elements carrying [`REVEAL_CLASS`] gain [`VISIBLE_CLASS`] once their top
//! edge scrolls above a trigger line near the bottom of the window. The class
//! is never removed, so sections stay visible after scrolling back up.

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Element, Window};

/// Class marking an element for scroll reveal.
pub const REVEAL_CLASS: &str = "reveal";
/// Class added once the element is revealed.
pub const VISIBLE_CLASS: &str = "visible";

/// Trigger line as a fraction of the window height.
pub const TRIGGER_RATIO: f64 = 0.85;

/// Delay before the first pass, letting layout settle after mount.
pub const INITIAL_DELAY_MS: i32 = 200;

/// Whether an element whose top edge sits at `top` should be revealed.
pub fn should_reveal(top: f64, window_height: f64) -> bool {
	top <= window_height * TRIGGER_RATIO
}

fn reveal_pass(window: &Window) {
	let Some(document) = window.document() else {
		return;
	};
	let Some(height) = window.inner_height().ok().and_then(|h| h.as_f64()) else {
		return;
	};
	let Ok(nodes) = document.query_selector_all(&format!(".{REVEAL_CLASS}")) else {
		return;
	};
	for i in 0..nodes.length() {
		let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
			continue;
		};
		if should_reveal(element.get_bounding_client_rect().top(), height) {
			let _ = element.class_list().add_1(VISIBLE_CLASS);
		}
	}
}

/// Install the scroll listener and schedule the initial pass.
///
/// The listener lives for the rest of the page's lifetime.
pub fn install_scroll_reveal() {
	let Some(window) = web_sys::window() else {
		return;
	};

	let on_scroll = Closure::<dyn FnMut()>::new(|| {
		if let Some(window) = web_sys::window() {
			reveal_pass(&window);
		}
	});
	let options = AddEventListenerOptions::new();
	options.set_passive(true);
	if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
		"scroll",
		on_scroll.as_ref().unchecked_ref(),
		&options,
	) {
		warn!("reveal: could not listen for scroll: {:?}", e);
	}
	on_scroll.forget();

	let initial = Closure::once_into_js(|| {
		if let Some(window) = web_sys::window() {
			reveal_pass(&window);
		}
	});
	if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
		initial.unchecked_ref(),
		INITIAL_DELAY_MS,
	) {
		warn!("reveal: could not schedule initial pass: {:?}", e);
	}
}
