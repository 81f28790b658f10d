//! Portfolio renderer: turns `ResumeData` into one self-contained HTML document.
//!
//! Every theme is a pure function of its input. The only exception is the
//! professional footer, which carries the calendar year; callers that need
//! byte-stable output go through `ThemeId::render_for_year`.

use chrono::Datelike;
use thiserror::Error;

use crate::models::{ResumeData, ThemeId, ThemeMeta, THEMES};

pub mod escape;
pub mod handlers;
pub mod layout;
pub mod themes;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

impl ThemeId {
    /// Renders with the current UTC year for the themes that print one.
    pub fn render(self, data: &ResumeData) -> String {
        self.render_for_year(data, chrono::Utc::now().year())
    }

    pub fn render_for_year(self, data: &ResumeData, year: i32) -> String {
        match self {
            ThemeId::Minimal => themes::minimal::render(data),
            ThemeId::Bold => themes::bold::render(data),
            ThemeId::Creative => themes::creative::render(data),
            ThemeId::Professional => themes::professional::render(data, year),
            ThemeId::Developer => themes::developer::render(data),
            ThemeId::Elegant => themes::elegant::render(data),
            ThemeId::Monochrome => themes::monochrome::render(data),
            ThemeId::Bauhaus => themes::bauhaus::render(data),
            ThemeId::Linear => themes::linear::render(data),
        }
    }
}

/// Renders `data` with the theme named by `theme`.
///
/// The only failure is an id outside the known set. No caching: each call
/// renders from scratch.
pub fn generate_portfolio(theme: &str, data: &ResumeData) -> Result<String, RenderError> {
    let id: ThemeId = theme.parse()?;
    Ok(id.render(data))
}

/// Static theme catalogue for pickers.
pub fn themes() -> &'static [ThemeMeta] {
    &THEMES
}
