//! Content schema for the JSON documents the page renders.
//!
//! DESIGN
//! ======
//! Each document has a private raw shape that tolerates every field-name
//! variant seen in published content (`liveLink` / `link`, `startDate` /
//! `start-date`, grouped vs. flat link lists) and a public canonical type
//! that components consume. Migration happens once, at read time, so the
//! rendering code never branches on schema versions.
//!
//! Missing or `null` collections degrade to empty ones; a section with no
//! data renders nothing rather than failing. Leaves are read leniently: a
//! mistyped field becomes absent instead of failing the whole document, and
//! when a record carries several spellings of one field the current name
//! wins.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Separator between the start and end of a tenure.
pub const TENURE_SEPARATOR: &str = " \u{2013} ";
/// Label shown instead of an end date while still employed.
pub const PRESENT_LABEL: &str = "Present";
/// Category label used when a technical skill group has no key.
pub const FALLBACK_SKILL_CATEGORY: &str = "Other";

/// Any JSON value where a list is expected; non-arrays read as empty.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => Vec::new(),
    })
}

/// Scalar leaf as text. Strings pass through, numbers and booleans are
/// formatted, anything else is absent.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(&Value::deserialize(deserializer)?))
}

/// Flag leaf with JavaScript truthiness; `null` is absent.
fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        value => Some(is_truthy(&value)),
    })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Decode one record of a list, falling back to an empty record when the
/// entry is not an object.
fn record<T>(value: Value) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    serde_json::from_value(value).unwrap_or_default()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// First non-blank of the current and legacy spellings of a field.
fn preferred(current: Option<String>, legacy: Option<String>) -> Option<String> {
    non_empty(current).or_else(|| non_empty(legacy))
}

// =============================================================================
// Links
// =============================================================================

/// An in-page or external navigation entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: String,
    pub href: String,
    /// Icon class list (e.g. `"fa-solid fa-house"`), rendered before the text.
    pub icon: Option<String>,
}

/// A social profile or contact entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: String,
    /// Web URL, or a `mailto:` address for contact entries.
    pub href: String,
    pub icon: Option<String>,
}

/// Navigation and social links loaded together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkSet {
    pub nav: Vec<NavLink>,
    pub social: Vec<SocialLink>,
}

/// `navLinks.json` and `socials.json`.
///
/// Accepts both `{Links: [{navLinks}, {socialLinks}]}` and the flat
/// `{navLinks, socialLinks}` layout; entries from both are concatenated in
/// document order.
#[derive(Debug, Default, Deserialize)]
pub struct LinksDocument {
    #[serde(rename = "Links", default, deserialize_with = "lenient_list")]
    groups: Vec<Value>,
    #[serde(rename = "navLinks", default, deserialize_with = "lenient_list")]
    nav_links: Vec<Value>,
    #[serde(rename = "socialLinks", default, deserialize_with = "lenient_list")]
    social_links: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LinkGroup {
    #[serde(rename = "navLinks", default, deserialize_with = "lenient_list")]
    nav_links: Vec<Value>,
    #[serde(rename = "socialLinks", default, deserialize_with = "lenient_list")]
    social_links: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawLink {
    #[serde(deserialize_with = "lenient_text")]
    name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    href: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    link: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    icon: Option<String>,
}

impl RawLink {
    fn into_nav(self) -> Option<NavLink> {
        Some(NavLink {
            name: non_empty(self.name)?,
            href: preferred(self.href, self.link)?,
            icon: non_empty(self.icon),
        })
    }

    fn into_social(self) -> Option<SocialLink> {
        let href = preferred(self.href, self.link)?;
        Some(SocialLink {
            name: non_empty(self.name)?,
            href: contact_href(&href),
            icon: non_empty(self.icon),
        })
    }
}

impl LinksDocument {
    /// Flatten grouped and top-level entries, dropping records without a
    /// name or target.
    pub fn into_link_set(self) -> LinkSet {
        let mut nav_raw = Vec::new();
        let mut social_raw = Vec::new();
        for group in self.groups.into_iter().map(record::<LinkGroup>) {
            nav_raw.extend(group.nav_links);
            social_raw.extend(group.social_links);
        }
        nav_raw.extend(self.nav_links);
        social_raw.extend(self.social_links);

        LinkSet {
            nav: nav_raw.into_iter().map(record::<RawLink>).filter_map(RawLink::into_nav).collect(),
            social: social_raw.into_iter().map(record::<RawLink>).filter_map(RawLink::into_social).collect(),
        }
    }
}

/// Prefix bare e-mail addresses with `mailto:`; other targets pass through.
pub fn contact_href(raw: &str) -> String {
    let target = raw.trim();
    if looks_like_email(target) {
        format!("mailto:{target}")
    } else {
        target.to_owned()
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.contains(':') || value.contains('/') || value.contains(char::is_whitespace) {
        return false;
    }
    value
        .split_once('@')
        .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.') && !domain.starts_with('.'))
}

// =============================================================================
// Experience
// =============================================================================

/// Employment period; only the first duration record of a job is consulted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tenure {
    pub start: Option<String>,
    pub end: Option<String>,
    /// Still employed; wins over any explicit end date.
    pub current: bool,
}

impl Tenure {
    /// `"<start> – <end>"` with `Present` for current roles.
    ///
    /// Returns `None` when neither side is known so the whole line can be
    /// omitted.
    pub fn label(&self) -> Option<String> {
        let end = if self.current { Some(PRESENT_LABEL) } else { self.end.as_deref() };
        let parts = [self.start.as_deref(), end]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>();
        if parts.is_empty() { None } else { Some(parts.join(TENURE_SEPARATOR)) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub company_alias: Option<String>,
    pub location: String,
    pub tenure: Tenure,
    pub tasks: Vec<String>,
}

impl Job {
    /// Tab caption: alias, then company, then a positional fallback.
    pub fn tab_label(&self, index: usize) -> String {
        if let Some(alias) = self.company_alias.as_deref().filter(|a| !a.is_empty()) {
            return alias.to_owned();
        }
        if !self.company.is_empty() {
            return self.company.clone();
        }
        format!("Company {}", index + 1)
    }
}

/// `experiences.json`.
#[derive(Debug, Default, Deserialize)]
pub struct ExperiencesDocument {
    #[serde(default, deserialize_with = "lenient_list")]
    jobs: Vec<Value>,
}

impl ExperiencesDocument {
    pub fn into_jobs(self) -> Vec<Job> {
        self.jobs.into_iter().map(record::<RawJob>).map(RawJob::into_job).collect()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawJob {
    #[serde(deserialize_with = "lenient_text")]
    title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    company: Option<String>,
    #[serde(rename = "companyAlias", deserialize_with = "lenient_text")]
    company_alias: Option<String>,
    #[serde(rename = "company-alias", deserialize_with = "lenient_text")]
    company_alias_hyphenated: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    location: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    duration: Vec<Value>,
    #[serde(deserialize_with = "lenient_list")]
    tasks: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDuration {
    #[serde(rename = "startDate", deserialize_with = "lenient_text")]
    start_date: Option<String>,
    #[serde(rename = "start-date", deserialize_with = "lenient_text")]
    start_date_hyphenated: Option<String>,
    #[serde(rename = "endDate", deserialize_with = "lenient_text")]
    end_date: Option<String>,
    #[serde(rename = "end-date", deserialize_with = "lenient_text")]
    end_date_hyphenated: Option<String>,
    #[serde(rename = "stillEmployed?", deserialize_with = "lenient_flag")]
    still_employed: Option<bool>,
    #[serde(rename = "stillEmployed", deserialize_with = "lenient_flag")]
    still_employed_plain: Option<bool>,
}

impl RawJob {
    fn into_job(self) -> Job {
        let tenure = self
            .duration
            .into_iter()
            .next()
            .map(record::<RawDuration>)
            .map(|d| Tenure {
                start: preferred(d.start_date, d.start_date_hyphenated),
                end: preferred(d.end_date, d.end_date_hyphenated),
                current: d.still_employed.or(d.still_employed_plain).unwrap_or(false),
            })
            .unwrap_or_default();

        Job {
            title: self.title.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            company_alias: preferred(self.company_alias, self.company_alias_hyphenated),
            location: self.location.unwrap_or_default(),
            tenure,
            tasks: flatten_tasks(self.tasks.first()),
        }
    }
}

/// Values of the first keyed task record, in key order. Falsy entries are
/// dropped; numbers and booleans render as text.
fn flatten_tasks(first: Option<&Value>) -> Vec<String> {
    let Some(map) = first.and_then(Value::as_object) else {
        return Vec::new();
    };
    map.values()
        .filter(|task| is_truthy(task))
        .filter_map(value_text)
        .collect()
}

// =============================================================================
// Projects
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub image: String,
    pub live_link: String,
    pub source_code: String,
    pub tech_stack: Vec<String>,
}

impl Project {
    pub fn tab_label(&self, index: usize) -> String {
        if self.name.is_empty() {
            format!("Project {}", index + 1)
        } else {
            self.name.clone()
        }
    }
}

/// `projects.json`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectsDocument {
    #[serde(default, deserialize_with = "lenient_list")]
    projects: Vec<Value>,
}

impl ProjectsDocument {
    pub fn into_projects(self) -> Vec<Project> {
        self.projects.into_iter().map(record::<RawProject>).map(RawProject::into_project).collect()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawProject {
    #[serde(deserialize_with = "lenient_text")]
    name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    description: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    image: Option<String>,
    #[serde(rename = "liveLink", deserialize_with = "lenient_text")]
    live_link: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    link: Option<String>,
    #[serde(rename = "sourceCode", deserialize_with = "lenient_text")]
    source_code: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    source: Option<String>,
    #[serde(rename = "techStack", deserialize_with = "lenient_list")]
    tech_stack: Vec<Value>,
}

impl RawProject {
    fn into_project(self) -> Project {
        Project {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            live_link: preferred(self.live_link, self.link).unwrap_or_default(),
            source_code: preferred(self.source_code, self.source).unwrap_or_default(),
            tech_stack: self
                .tech_stack
                .iter()
                .filter_map(value_text)
                .filter(|tech| !tech.is_empty())
                .collect(),
        }
    }
}

// =============================================================================
// Skills
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<Skill>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillsCatalog {
    pub technical: Vec<SkillGroup>,
    pub soft: Vec<Skill>,
}

/// `skills.json`: a list of wrapper records keyed by `"Technical Skills"` and
/// `"Soft Skills"`. Technical skills are further wrapped per category, the
/// category being the record's sole key.
#[derive(Debug, Default, Deserialize)]
pub struct SkillsDocument {
    #[serde(rename = "Skills", default, deserialize_with = "lenient_list")]
    blocks: Vec<Value>,
}

impl SkillsDocument {
    pub fn into_catalog(self) -> SkillsCatalog {
        let technical = find_block(&self.blocks, "Technical Skills")
            .map(|groups| groups.iter().filter_map(Value::as_object).map(skill_group).collect())
            .unwrap_or_default();
        let soft = find_block(&self.blocks, "Soft Skills")
            .map(|items| skills_from(items))
            .unwrap_or_default();
        SkillsCatalog { technical, soft }
    }
}

fn find_block<'a>(blocks: &'a [Value], key: &str) -> Option<&'a [Value]> {
    blocks
        .iter()
        .find_map(|block| block.get(key))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
}

fn skill_group(record: &Map<String, Value>) -> SkillGroup {
    match record.iter().next() {
        Some((category, items)) => SkillGroup {
            category: category.clone(),
            items: items.as_array().map(|items| skills_from(items)).unwrap_or_default(),
        },
        None => SkillGroup { category: FALLBACK_SKILL_CATEGORY.to_owned(), items: Vec::new() },
    }
}

fn skills_from(items: &[Value]) -> Vec<Skill> {
    items
        .iter()
        .filter_map(Value::as_object)
        .map(|item| Skill {
            name: item.get("name").and_then(Value::as_str).unwrap_or_default().to_owned(),
            logo: item
                .get("logo")
                .and_then(Value::as_str)
                .filter(|logo| !logo.is_empty())
                .map(str::to_owned),
        })
        .collect()
}
