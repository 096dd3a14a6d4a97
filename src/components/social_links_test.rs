use super::*;

fn social(name: &str, href: &str, icon: Option<&str>) -> SocialLink {
    SocialLink { name: name.to_owned(), href: href.to_owned(), icon: icon.map(str::to_owned) }
}

#[test]
fn icon_keeps_its_classes_plus_social_hook() {
    assert_eq!(icon_class(Some("fa-brands fa-github")), "fa-brands fa-github social-icon");
    assert_eq!(icon_class(Some("  ")), "social-icon");
    assert_eq!(icon_class(None), "social-icon");
}

#[test]
fn social_links_open_externally_with_icon_and_text() {
    let links = RwSignal::new(LinkSet {
        nav: Vec::new(),
        social: vec![
            social("GitHub", "https://github.com/someone", Some("fa-brands fa-github")),
            social("Mail", "mailto:me@example.com", None),
        ],
    });
    let html = view! { <SocialLinks links/> }.to_html();

    assert_eq!(html.matches("class=\"social-li\"").count(), 2);
    assert!(html.contains("class=\"fa-brands fa-github social-icon\""));
    assert!(html.contains("class=\"social-icon\""));
    assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 2);
    assert!(html.contains("GitHub"));
}
