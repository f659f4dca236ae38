//! portfolio-backdrop: animated canvas backdrop and bilingual portfolio page.
//!
//! This crate provides a WASM-based client-side page with a particle backdrop,
//! a light/dark theme toggle, a PT/EN language selector and scroll reveals.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

#[cfg(target_arch = "wasm32")]
use getrandom as _;

pub mod components;

pub use components::backdrop::{BackdropCanvas, BackdropConfig};
pub use components::site::{Lang, SiteLinks, SitePage, ThemeMode};

/// Element id of the optional JSON block overriding animation parameters.
pub const BACKDROP_CONFIG_ID: &str = "backdrop-config";
/// Element id of the optional JSON block with the owner's links.
pub const SITE_DATA_ID: &str = "site-data";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-backdrop: logging initialized");
}

/// Parse a JSON document, logging and discarding it when invalid.
fn parse_json<T: DeserializeOwned>(id: &str, json_text: &str) -> Option<T> {
	match serde_json::from_str::<T>(json_text) {
		Ok(value) => Some(value),
		Err(e) => {
			warn!("portfolio-backdrop: failed to parse #{}: {}", id, e);
			None
		}
	}
}

/// Load JSON from a script element with the given id.
fn load_json<T: DeserializeOwned>(id: &str) -> Option<T> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;
	let value = parse_json(id, &json_text);
	if value.is_some() {
		info!("portfolio-backdrop: loaded #{}", id);
	}
	value
}

/// Main application component.
/// Reads optional page data from the DOM and renders the backdrop and page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_json::<BackdropConfig>(BACKDROP_CONFIG_ID).unwrap_or_default();
	let links = load_json::<SiteLinks>(SITE_DATA_ID).unwrap_or_default();

	view! {
		<Title text="Caio Rissa Silveira · Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<BackdropCanvas config=config />
		<SitePage links=links />
	}
}
