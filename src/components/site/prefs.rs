//! Persisted visitor preferences: color theme and page language.
//!
//! Both live in a string key-value store (`localStorage` in the browser) under
//! the keys [`THEME_KEY`] and [`LANG_KEY`]. They are read once at startup and
//! written back on every change.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::warn;

/// Storage key of the theme preference.
pub const THEME_KEY: &str = "theme";
/// Storage key of the language preference.
pub const LANG_KEY: &str = "lang";

/// String key-value store that survives page reloads.
pub trait PreferenceStore {
	/// Stored value for `key`, if any.
	fn get(&self, key: &str) -> Option<String>;
	/// Store `value` under `key`, replacing any previous value.
	fn set(&mut self, key: &str, value: &str);
}

/// Store backed by the browser's `localStorage`.
///
/// When storage is unavailable (privacy mode, sandboxed iframe) reads return
/// nothing and writes are dropped.
#[derive(Clone, Debug)]
pub struct LocalStore {
	storage: Option<web_sys::Storage>,
}

impl LocalStore {
	/// Open the window's `localStorage`.
	pub fn open() -> Self {
		let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
		if storage.is_none() {
			warn!("prefs: localStorage unavailable, preferences will not persist");
		}
		Self { storage }
	}
}

impl PreferenceStore for LocalStore {
	fn get(&self, key: &str) -> Option<String> {
		self.storage.as_ref()?.get_item(key).ok().flatten()
	}

	fn set(&mut self, key: &str, value: &str) {
		let Some(storage) = &self.storage else {
			return;
		};
		if let Err(e) = storage.set_item(key, value) {
			warn!("prefs: could not store {}={}: {:?}", key, value, e);
		}
	}
}

/// In-memory store, used when nothing needs to outlive the process.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
	values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
	fn get(&self, key: &str) -> Option<String> {
		self.values.get(key).cloned()
	}

	fn set(&mut self, key: &str, value: &str) {
		self.values.insert(key.to_string(), value.to_string());
	}
}

/// Color theme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	/// Default light palette.
	#[default]
	Light,
	/// Dark palette.
	Dark,
}

impl ThemeMode {
	/// Restore from a stored value. Only `"dark"` selects dark mode.
	pub fn from_stored(value: Option<&str>) -> Self {
		match value {
			Some("dark") => Self::Dark,
			_ => Self::Light,
		}
	}

	/// Stored form of the mode.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	/// The other mode.
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	/// Class applied to `<body>`.
	pub fn body_class(self) -> &'static str {
		match self {
			Self::Light => "",
			Self::Dark => "dark-mode",
		}
	}

	/// Icon on the toggle button: the mode a click switches to.
	pub fn toggle_icon(self) -> &'static str {
		match self {
			Self::Light => "🌙",
			Self::Dark => "☀️",
		}
	}
}

/// Language of the page text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lang {
	/// Brazilian Portuguese.
	#[default]
	Pt,
	/// English.
	En,
}

impl Lang {
	/// Every supported language, in selector order.
	pub const ALL: [Lang; 2] = [Lang::Pt, Lang::En];

	/// Language code, as stored and used for option values.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Pt => "pt",
			Self::En => "en",
		}
	}

	/// Value for the document's `lang` attribute.
	pub fn html_lang(self) -> &'static str {
		match self {
			Self::Pt => "pt-BR",
			Self::En => "en",
		}
	}

	/// Label of the language's selector option.
	pub fn label(self) -> &'static str {
		match self {
			Self::Pt => "PT",
			Self::En => "EN",
		}
	}

	/// Whether this language's selector option is the selected one while
	/// `current` is active.
	pub fn is_selected(self, current: Lang) -> bool {
		self == current
	}
}

impl fmt::Display for Lang {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Language code that is not one of the supported ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownLang(pub String);

impl fmt::Display for UnknownLang {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown language {:?}", self.0)
	}
}

impl std::error::Error for UnknownLang {}

impl FromStr for Lang {
	type Err = UnknownLang;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"pt" => Ok(Self::Pt),
			"en" => Ok(Self::En),
			other => Err(UnknownLang(other.to_string())),
		}
	}
}

/// Theme and language, kept in sync with a [`PreferenceStore`].
#[derive(Debug)]
pub struct Preferences<S> {
	store: S,
	theme: ThemeMode,
	lang: Lang,
}

impl<S: PreferenceStore> Preferences<S> {
	/// Read both preferences, falling back to light and Portuguese.
	pub fn load(store: S) -> Self {
		let theme = ThemeMode::from_stored(store.get(THEME_KEY).as_deref());
		let lang = match store.get(LANG_KEY) {
			Some(raw) => raw.parse().unwrap_or_else(|e| {
				warn!("prefs: ignoring stored language: {}", e);
				Lang::default()
			}),
			None => Lang::default(),
		};
		Self { store, theme, lang }
	}

	/// Current theme.
	pub fn theme(&self) -> ThemeMode {
		self.theme
	}

	/// Current language.
	pub fn lang(&self) -> Lang {
		self.lang
	}

	/// The backing store.
	pub fn store(&self) -> &S {
		&self.store
	}

	/// Flip the theme and persist it. Returns the mode to paint.
	pub fn toggle_theme(&mut self) -> ThemeMode {
		self.theme = self.theme.toggled();
		self.store.set(THEME_KEY, self.theme.as_str());
		self.theme
	}

	/// Switch to the language named by `code` and persist it.
	///
	/// Unknown codes are logged and leave the current language in place.
	pub fn set_lang(&mut self, code: &str) -> Option<Lang> {
		match code.parse::<Lang>() {
			Ok(lang) => {
				self.lang = lang;
				self.store.set(LANG_KEY, lang.as_str());
				Some(lang)
			}
			Err(e) => {
				warn!("prefs: {}", e);
				None
			}
		}
	}
}
