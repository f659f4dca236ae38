//! Leptos component wrapping the backdrop canvas.
//!
//! The component creates a full-window canvas, seeds the animation state once
//! it is mounted and drives it with `requestAnimationFrame`. A passive resize
//! listener keeps the canvas and both populations matched to the window.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::BackdropConfig;
use super::motion::{apply_gate, prefers_reduced_motion};
use super::state::BackdropState;
use super::types::Viewport;

fn window_viewport(window: &Window) -> Option<Viewport> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some(Viewport::new(width, height))
}

fn size_canvas(canvas: &HtmlCanvasElement, viewport: Viewport) {
	canvas.set_width(viewport.width as u32);
	canvas.set_height(viewport.height as u32);
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn hide(canvas: &HtmlCanvasElement) {
	// `style()` alone resolves to the Leptos builder extension.
	if let Err(e) = web_sys::HtmlElement::style(canvas).set_property("display", "none") {
		warn!("backdrop: could not hide canvas: {:?}", e);
	}
}

/// Renders the animated backdrop behind the page content.
///
/// Pass `config` to override the default animation parameters. When the user
/// prefers reduced motion the canvas is hidden and no frame is ever drawn.
#[component]
pub fn BackdropCanvas(#[prop(optional)] config: Option<BackdropConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<BackdropState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let config = config.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("backdrop: no window, animation disabled");
			return;
		};
		let Some(viewport) = window_viewport(&window) else {
			warn!("backdrop: window size unavailable, animation disabled");
			return;
		};
		size_canvas(&canvas, viewport);

		let Some(mut ctx) = context_2d(&canvas) else {
			warn!("backdrop: 2d context unavailable, animation disabled");
			return;
		};

		let mut state = BackdropState::new(config.clone(), viewport, SmallRng::from_entropy());
		let may_run = apply_gate(&mut state, prefers_reduced_motion(&window));
		if !state.is_visible() {
			hide(&canvas);
		}
		*context.borrow_mut() = Some(state);
		if !may_run {
			return;
		}

		let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(viewport) = web_sys::window().as_ref().and_then(window_viewport) else {
				return;
			};
			size_canvas(&canvas_resize, viewport);
			if let Some(ref mut state) = *context_resize.borrow_mut() {
				state.resize(viewport);
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let options = AddEventListenerOptions::new();
			options.set_passive(true);
			if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
				"resize",
				cb.as_ref().unchecked_ref(),
				&options,
			) {
				warn!("backdrop: could not listen for resize: {:?}", e);
			}
		}

		let (context_anim, animate_inner) = (context.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move |time: f64| {
			let keep_running = match *context_anim.borrow_mut() {
				Some(ref mut state) => state.frame(time, &mut ctx),
				None => false,
			};
			if !keep_running {
				return;
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="bg-canvas"
			class="backdrop-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; z-index: -1; pointer-events: none;"
		/>
	}
}
