//! The page around the backdrop and its small interactions.
//!
//! - Menu button toggling the navigation links on small screens
//! - Light/dark theme toggle, persisted across visits
//! - PT/EN language selector swapping every text node, persisted across visits
//! - Scroll-triggered reveal of sections

pub mod i18n;
mod page;
pub mod prefs;
pub mod reveal;

pub use i18n::TextTable;
pub use page::{SiteLinks, SitePage, SocialLink};
pub use prefs::{Lang, LocalStore, MemoryStore, PreferenceStore, Preferences, ThemeMode};
