use super::*;
use crate::net::types::SkillGroup;

fn catalog() -> SkillsCatalog {
    SkillsCatalog {
        technical: vec![
            SkillGroup {
                category: "Languages".to_owned(),
                items: vec![
                    Skill { name: "Rust".to_owned(), logo: Some("/img/rust.svg".to_owned()) },
                    Skill { name: "go lang".to_owned(), logo: None },
                ],
            },
            SkillGroup { category: "Database".to_owned(), items: vec![Skill { name: "Postgres".to_owned(), logo: None }] },
        ],
        soft: vec![Skill { name: "Mentoring".to_owned(), logo: None }],
    }
}

fn render(category: SkillCategory) -> String {
    let catalog = RwSignal::new(Some(catalog()));
    let category = RwSignal::new(category);
    view! { <SkillsView catalog category/> }.to_html()
}

#[test]
fn technical_view_renders_one_group_per_category() {
    let html = render(SkillCategory::Technical);
    assert_eq!(html.matches("class=\"skill-group-title\"").count(), 2);
    assert!(html.contains("Languages"));
    assert!(html.contains("src=\"/img/rust.svg\""));
    assert!(html.contains("GO"));
    assert!(!html.contains("RU"));
    assert!(!html.contains("Mentoring"));
}

#[test]
fn soft_view_renders_single_grid() {
    let html = render(SkillCategory::Soft);
    assert_eq!(html.matches("class=\"soft-grid\"").count(), 1);
    assert!(html.contains("Mentoring"));
    assert!(html.contains("ME"));
    assert!(!html.contains("Languages"));
}

#[test]
fn unloaded_catalog_renders_empty_container() {
    let catalog = RwSignal::new(None);
    let category = RwSignal::new(SkillCategory::Technical);
    let html = view! { <SkillsView catalog category/> }.to_html();
    assert!(html.contains("skillsContainer"));
    assert!(!html.contains("skill-item"));
}
