//! Styles for the rollcall CLI.
//!
//! Templates never name colours. They name what a piece of text *is* (`title`, `muted`,
//! `status-medical-leave`) and the theme decides what that looks like. Two themes exist,
//! one for light and one for dark terminals, and [`resolved_theme`] picks between them with
//! the `dark-light` crate.
//!
//! Each status has its own style so a row's status cell and its line in the summary share a
//! colour. The style name is `status-` followed by the status key, see [`status_style`].
//!
//! A style name the theme does not know renders with a `(!?)` prefix, so a typo in a
//! template shows up on screen instead of silently losing its colour.

use console::Style;
use once_cell::sync::Lazy;
use rollcallapp::model::Status;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const TITLE: &str = "title";
    pub const HEADER: &str = "header";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const COUNT: &str = "count";
    pub const CODE: &str = "code";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

pub fn status_style(status: Status) -> String {
    format!("status-{}", status.key())
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Applies a named style. With `use_color` off the text comes back unchanged, but an
    /// unknown name is still flagged.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static LIGHT_THEME: Lazy<Theme> = Lazy::new(build_light_theme);
pub static DARK_THEME: Lazy<Theme> = Lazy::new(build_dark_theme);

/// The theme matching the terminal's light or dark mode.
pub fn resolved_theme() -> &'static Theme {
    match dark_light::detect() {
        dark_light::Mode::Light => &LIGHT_THEME,
        dark_light::Mode::Dark => &DARK_THEME,
    }
}

fn with_statuses(theme: Theme, palette: [Style; 5]) -> Theme {
    Status::ALL
        .into_iter()
        .zip(palette)
        .fold(theme, |theme, (status, style)| {
            theme.add(&status_style(status), style)
        })
}

fn build_light_theme() -> Theme {
    let muted = Style::new().color256(243);
    let theme = Theme::new()
        .add(names::TITLE, Style::new().black().bold())
        .add(names::HEADER, Style::new().black().bold().underlined())
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, Style::new().color256(249))
        .add(names::COUNT, Style::new().black().bold())
        .add(names::CODE, Style::new().color256(130).bold())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().color256(136).bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted);
    with_statuses(
        theme,
        [
            Style::new().color256(28),
            Style::new().color256(160),
            Style::new().color256(25),
            Style::new().color256(91),
            Style::new().color256(130),
        ],
    )
}

fn build_dark_theme() -> Theme {
    let muted = Style::new().color256(246);
    let theme = Theme::new()
        .add(names::TITLE, Style::new().white().bold())
        .add(names::HEADER, Style::new().white().bold().underlined())
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, Style::new().color256(240))
        .add(names::COUNT, Style::new().white().bold())
        .add(names::CODE, Style::new().color256(214).bold())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted);
    with_statuses(
        theme,
        [
            Style::new().color256(114),
            Style::new().color256(203),
            Style::new().color256(75),
            Style::new().color256(177),
            Style::new().color256(215),
        ],
    )
}
