//! Preference persistence across toggles and reloads.

#![allow(unused_crate_dependencies)]

use portfolio_backdrop::components::site::i18n::{PAGE_KEYS, fill_year};
use portfolio_backdrop::components::site::prefs::{LANG_KEY, THEME_KEY};
use portfolio_backdrop::components::site::{
	Lang, MemoryStore, PreferenceStore, Preferences, TextTable, ThemeMode,
};

#[test]
fn theme_toggled_twice_returns_to_light() {
	let mut prefs = Preferences::load(MemoryStore::default());
	assert_eq!(prefs.theme(), ThemeMode::Light);

	let paints: Vec<ThemeMode> = (0..2).map(|_| prefs.toggle_theme()).collect();

	assert_eq!(paints, vec![ThemeMode::Dark, ThemeMode::Light]);
	assert_eq!(prefs.theme(), ThemeMode::Light);
	assert_eq!(prefs.store().get(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn dark_theme_survives_reload() {
	let mut prefs = Preferences::load(MemoryStore::default());
	prefs.toggle_theme();

	let reloaded = Preferences::load(prefs.store().clone());
	assert_eq!(reloaded.theme(), ThemeMode::Dark);
	assert_eq!(reloaded.theme().body_class(), "dark-mode");
}

#[test]
fn english_is_restored_after_reload() {
	let mut prefs = Preferences::load(MemoryStore::default());
	assert_eq!(prefs.set_lang("en"), Some(Lang::En));
	assert_eq!(prefs.store().get(LANG_KEY).as_deref(), Some("en"));

	// A reload reads the store again, with no toggle in between.
	let reloaded = Preferences::load(prefs.store().clone());
	assert_eq!(reloaded.lang(), Lang::En);

	let table = TextTable::global();
	for key in PAGE_KEYS {
		let text = table.text(reloaded.lang(), key);
		assert_eq!(Some(text.as_str()), table.get(Lang::En, key));
	}
	assert_eq!(table.text(reloaded.lang(), "heroBtnProjects"), "View Projects");
	assert_eq!(
		fill_year(&table.text(reloaded.lang(), "footer"), 2026),
		"© 2026 Caio Rissa Silveira — All rights reserved"
	);
}

#[test]
fn unknown_language_keeps_current_text() {
	let mut prefs = Preferences::load(MemoryStore::default());
	let before = TextTable::global().text(prefs.lang(), "navAbout");

	assert_eq!(prefs.set_lang("de"), None);

	assert_eq!(prefs.lang(), Lang::Pt);
	assert_eq!(TextTable::global().text(prefs.lang(), "navAbout"), before);
	assert_eq!(prefs.store().get(LANG_KEY), None);
}

#[test]
fn language_selector_follows_restored_language() {
	let mut prefs = Preferences::load(MemoryStore::default());
	prefs.set_lang("en");

	let reloaded = Preferences::load(prefs.store().clone());
	let options: Vec<(&str, bool)> = Lang::ALL
		.into_iter()
		.map(|option| (option.label(), option.is_selected(reloaded.lang())))
		.collect();
	assert_eq!(options, vec![("PT", false), ("EN", true)]);
}
