use super::*;

fn sample() -> Project {
    Project {
        name: "Site".to_owned(),
        description: "A <b>bold</b> idea".to_owned(),
        image: "/img/site.png".to_owned(),
        live_link: "https://site.example".to_owned(),
        source_code: "https://github.com/someone/site".to_owned(),
        tech_stack: vec!["Rust".to_owned(), "Leptos".to_owned()],
    }
}

#[test]
fn card_starts_front_facing_on_every_trigger() {
    let html = view! { <ProjectCard project=sample()/> }.to_html();
    assert_eq!(html.matches("aria-pressed=\"false\"").count(), 3);
    assert!(!html.contains("aria-pressed=\"true\""));
    assert!(!html.contains("flipped"));
}

#[test]
fn card_renders_links_and_tech_stack() {
    let html = view! { <ProjectCard project=sample()/> }.to_html();
    assert!(html.contains("href=\"https://github.com/someone/site\""));
    assert!(html.contains("href=\"https://site.example\""));
    assert_eq!(html.matches("class=\"tech-item\"").count(), 2);
    assert!(html.contains("src=\"/img/site.png\""));
    assert!(html.contains("fa-brands fa-github"));
    assert!(html.contains("fa-solid fa-square-arrow-up-right"));
}

#[test]
fn description_is_escaped() {
    let html = view! { <ProjectCard project=sample()/> }.to_html();
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
}
