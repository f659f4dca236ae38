//! Page text in Portuguese and English.
//!
//! The table is embedded as JSON and parsed once on first use. Keys are the
//! logical names the page binds its text nodes to (see [`PAGE_KEYS`]).

use std::collections::BTreeMap;
use std::sync::LazyLock;

use log::warn;
use serde::Deserialize;

use super::prefs::Lang;

/// Marker in the footer text replaced with the current year.
pub const YEAR_PLACEHOLDER: &str = "{year}";

/// Every key the page renders.
pub const PAGE_KEYS: [&str; 26] = [
	"navAbout",
	"navProjects",
	"navContact",
	"sobreMim",
	"heroTitle",
	"heroSubtitle",
	"heroBtnProjects",
	"heroBtnContact",
	"aboutTitle",
	"aboutText",
	"skillsTitle",
	"skillsHTML",
	"skillsCSS",
	"skillsJS",
	"skillsREACT",
	"skillsTAILWIND",
	"projectTitle",
	"project1Desc",
	"project2Desc",
	"project3Desc",
	"project4Desc",
	"contactText",
	"contactBtn",
	"connectTitle",
	"connectText",
	"footer",
];

static TEXT_TABLE: LazyLock<TextTable> = LazyLock::new(|| {
	let table = TextTable::parse(include_str!("translations.json")).unwrap_or_else(|e| {
		warn!("i18n: failed to parse text table: {}", e);
		TextTable::default()
	});
	for (lang, key) in table.unpaired_keys() {
		warn!("i18n: {:?} only has {} text", key, lang);
	}
	table
});

/// Localized strings per language, keyed by logical name.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TextTable {
	pt: BTreeMap<String, String>,
	en: BTreeMap<String, String>,
}

impl TextTable {
	/// Parse a `{ "pt": {...}, "en": {...} }` table.
	pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// The table embedded in the binary.
	pub fn global() -> &'static TextTable {
		&TEXT_TABLE
	}

	/// All strings of one language.
	pub fn strings(&self, lang: Lang) -> &BTreeMap<String, String> {
		match lang {
			Lang::Pt => &self.pt,
			Lang::En => &self.en,
		}
	}

	/// Text for `key`, if the language defines it.
	pub fn get(&self, lang: Lang, key: &str) -> Option<&str> {
		self.strings(lang).get(key).map(String::as_str)
	}

	/// Text for `key`, or an empty string (with a warning) when it is missing.
	pub fn text(&self, lang: Lang, key: &str) -> String {
		match self.get(lang, key) {
			Some(text) => text.to_string(),
			None => {
				warn!("i18n: no {} text for {:?}", lang, key);
				String::new()
			}
		}
	}

	/// Keys defined for one language but not the other.
	pub fn unpaired_keys(&self) -> Vec<(Lang, &str)> {
		let mut unpaired = Vec::new();
		for (lang, other) in [(Lang::Pt, Lang::En), (Lang::En, Lang::Pt)] {
			let others = self.strings(other);
			for key in self.strings(lang).keys() {
				if !others.contains_key(key) {
					unpaired.push((lang, key.as_str()));
				}
			}
		}
		unpaired
	}
}

/// Replace the year placeholder in a footer template.
pub fn fill_year(template: &str, year: u32) -> String {
	template.replace(YEAR_PLACEHOLDER, &year.to_string())
}
