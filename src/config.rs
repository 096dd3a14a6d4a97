//! Build-time site configuration.
//!
//! The site is served as static files, so the only deploy-specific knob is
//! where the JSON content documents live. It is baked in at compile time from
//! `PORTFOLIO_DATA_BASE` and defaults to `/assets/data`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_DATA_BASE: &str = "/assets/data";

/// JSON documents the page consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataDocument {
    NavLinks,
    Experiences,
    Projects,
    Skills,
    Socials,
}

impl DataDocument {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::NavLinks => "navLinks.json",
            Self::Experiences => "experiences.json",
            Self::Projects => "projects.json",
            Self::Skills => "skills.json",
            Self::Socials => "socials.json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub data_base: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_data_base(None)
    }
}

impl SiteConfig {
    /// Build config from `PORTFOLIO_DATA_BASE` as seen by the compiler.
    pub fn from_build_env() -> Self {
        Self::from_data_base(option_env!("PORTFOLIO_DATA_BASE"))
    }

    /// Build config from an optional raw base path.
    ///
    /// Blank values fall back to [`DEFAULT_DATA_BASE`]; trailing slashes are
    /// trimmed so document URLs never contain `//`.
    pub fn from_data_base(raw: Option<&str>) -> Self {
        let base = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_DATA_BASE)
            .trim_end_matches('/');
        Self { data_base: base.to_owned() }
    }

    /// Absolute URL path of one data document.
    pub fn document_url(&self, doc: DataDocument) -> String {
        format!("{}/{}", self.data_base, doc.file_name())
    }
}
