use super::*;

#[test]
fn project_layout_follows_boundary() {
    assert_eq!(ProjectLayout::from_stacked(true), ProjectLayout::Stacked);
    assert_eq!(ProjectLayout::from_stacked(false), ProjectLayout::Tabbed);
    assert_eq!(ProjectLayout::default(), ProjectLayout::Tabbed);
}

#[test]
fn theme_button_moves_to_header_on_compact_screens() {
    assert_eq!(ThemeButtonMount::from_compact(true), ThemeButtonMount::Header);
    assert_eq!(ThemeButtonMount::from_compact(false), ThemeButtonMount::Main);
}

#[test]
fn queries_are_media_expressions() {
    for query in [
        PROJECTS_STACKED_QUERY,
        HERO_STACKED_QUERY,
        COMPACT_HEADER_QUERY,
        REDUCED_MOTION_QUERY,
        LIGHT_SCHEME_QUERY,
    ] {
        assert!(query.starts_with('(') && query.ends_with(')'), "{query}");
    }
}
