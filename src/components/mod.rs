pub mod experience_panel;
pub mod header;
pub mod hero_card;
pub mod nav_menu;
pub mod project_card;
pub mod projects_panel;
pub mod skills_panel;
pub mod social_links;
pub mod theme_toggle;
