//! Skills panel category toggle and logo fallback.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkillCategory {
    #[default]
    Technical,
    Soft,
}

/// Badge text shown when a skill has no logo: the first two ASCII
/// alphanumerics of the name, upper-cased, or `?`.
pub fn skill_initials(name: &str) -> String {
    let initials = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(2)
        .collect::<String>()
        .to_ascii_uppercase();
    if initials.is_empty() { "?".to_owned() } else { initials }
}
