//! The portfolio page: header controls, sections and footer.
//!
//! All visible text comes from the [`TextTable`] for the current language, so
//! switching language re-renders every mapped node at once. The stored theme
//! and language are applied while the page is first rendered, before any
//! user interaction.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use leptos_meta::{Body, Html};
use serde::Deserialize;

use super::i18n::{TextTable, fill_year};
use super::prefs::{Lang, LocalStore, Preferences};
use super::reveal::install_scroll_reveal;

const SKILLS: [(&str, &str); 5] = [
	("HTML", "skillsHTML"),
	("CSS", "skillsCSS"),
	("JavaScript", "skillsJS"),
	("React", "skillsREACT"),
	("Tailwind CSS", "skillsTAILWIND"),
];

const PROJECTS: [&str; 4] = ["project1Desc", "project2Desc", "project3Desc", "project4Desc"];

/// A profile link shown in the "connect" card.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SocialLink {
	/// Link text.
	pub label: String,
	/// Link target.
	pub url: String,
}

/// Owner-specific links, read from the page's `site-data` JSON block.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteLinks {
	/// Address for the e-mail button.
	pub email: Option<String>,
	/// Profile links for the connect card.
	pub socials: Vec<SocialLink>,
}

impl SiteLinks {
	/// Target of the e-mail button; falls back to the contact section.
	pub fn mail_href(&self) -> String {
		match &self.email {
			Some(email) => format!("mailto:{email}"),
			None => "#contato".to_string(),
		}
	}
}

fn current_year() -> u32 {
	js_sys::Date::new_0().get_full_year()
}

/// Renders the page and wires the menu, theme and language controls.
#[component]
pub fn SitePage(#[prop(optional)] links: SiteLinks) -> impl IntoView {
	let prefs = Rc::new(RefCell::new(Preferences::load(LocalStore::open())));
	let (theme, set_theme) = signal(prefs.borrow().theme());
	let (lang, set_lang) = signal(prefs.borrow().lang());
	let (menu_open, set_menu_open) = signal(false);
	let year = current_year();

	let prefs_theme = prefs.clone();
	let on_theme_click = move |_: ev::MouseEvent| {
		let mode = prefs_theme.borrow_mut().toggle_theme();
		set_theme.set(mode);
	};

	let prefs_lang = prefs.clone();
	let on_lang_change = move |event: ev::Event| {
		let code = event_target_value(&event);
		if let Some(next) = prefs_lang.borrow_mut().set_lang(&code) {
			set_lang.set(next);
		}
	};

	Effect::new(move |_| install_scroll_reveal());

	let t = move |key: &'static str| move || TextTable::global().text(lang.get(), key);
	let mail_href = links.mail_href();

	view! {
		<Html attr:lang=move || lang.get().html_lang() />
		<Body attr:class=move || theme.get().body_class() />

		<header class="site-header">
			<nav class="nav">
				<a class="brand" href="#">"Caio"</a>
				<button
					id="menu-btn"
					class="menu-btn"
					class:active=move || menu_open.get()
					aria-label="Menu"
					on:click=move |_| set_menu_open.update(|open| *open = !*open)
				>
					"☰"
				</button>
				<ul class="nav-links" class:open=move || menu_open.get()>
					<li><a href="#about">{t("navAbout")}</a></li>
					<li><a href="#projects">{t("navProjects")}</a></li>
					<li><a href="#contato">{t("navContact")}</a></li>
				</ul>
				<div class="nav-controls">
					<button id="themeToggle" class="theme-toggle" on:click=on_theme_click>
						{move || theme.get().toggle_icon()}
					</button>
					<select
						id="langToggle"
						class="lang-toggle"
						aria-label="Idioma / Language"
						on:change=on_lang_change
					>
						{Lang::ALL
							.into_iter()
							.map(|option| {
								view! {
									<option
										value=option.as_str()
										selected=move || option.is_selected(lang.get())
									>
										{option.label()}
									</option>
								}
							})
							.collect_view()}
					</select>
				</div>
			</nav>
		</header>

		<main>
			<section class="hero reveal">
				<div class="hero-left">
					<span class="sobreMim">{t("sobreMim")}</span>
					<h1 inner_html=t("heroTitle")></h1>
					<p class="lead">{t("heroSubtitle")}</p>
					<div class="actions">
						<a class="btn primary" href="#projects">{t("heroBtnProjects")}</a>
						<a class="btn ghost" href="#contato">{t("heroBtnContact")}</a>
					</div>
				</div>
			</section>

			<section id="about" class="reveal">
				<h2 class="section-title">{t("aboutTitle")}</h2>
				<div class="panel">
					<p>{t("aboutText")}</p>
				</div>
				<div class="skills-grid">
					<h3>{t("skillsTitle")}</h3>
					{SKILLS
						.into_iter()
						.map(|(name, key)| {
							view! {
								<div class="skill">
									<div class="skill-info">
										<h4>{name}</h4>
										<p>{t(key)}</p>
									</div>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section id="projects" class="reveal">
				<h2 class="section-title">{t("projectTitle")}</h2>
				<div class="projects-grid">
					{PROJECTS
						.into_iter()
						.enumerate()
						.map(|(i, key)| {
							view! {
								<article class="project-card">
									<span class="project-index">{format!("{:02}", i + 1)}</span>
									<p>{t(key)}</p>
								</article>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section id="contato" class="reveal">
				<div class="contato-card">
					<p>{t("contactText")}</p>
					<a class="botao-email" href=mail_href>{t("contactBtn")}</a>
				</div>
				<div class="connect-card">
					<h3>{t("connectTitle")}</h3>
					<p>{t("connectText")}</p>
					<ul class="socials">
						{links
							.socials
							.into_iter()
							.map(|s| {
								view! {
									<li>
										<a href=s.url target="_blank" rel="noopener">{s.label}</a>
									</li>
								}
							})
							.collect_view()}
					</ul>
				</div>
			</section>
		</main>

		<footer class="footer">
			<small>{move || fill_year(&TextTable::global().text(lang.get(), "footer"), year)}</small>
		</footer>
	}
}
