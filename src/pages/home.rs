//! The single portfolio page.
//!
//! ARCHITECTURE
//! ============
//! Each section fetches its own document and renders independently; none
//! waits on another. Nav and social links come from one document, so they
//! are loaded here and shared between the header and the hero.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::experience_panel::ExperiencePanel;
use crate::components::header::SiteHeader;
use crate::components::hero_card::{AboutSection, HeroCard};
use crate::components::nav_menu::load_links;
use crate::components::projects_panel::ProjectsPanel;
use crate::components::skills_panel::SkillsPanel;
use crate::components::theme_toggle::ThemeToggle;
use crate::net::types::LinkSet;
use crate::state::layout::ThemeButtonMount;

#[component]
pub fn HomePage(ctx: AppContext) -> impl IntoView {
    let links = RwSignal::new(LinkSet::default());
    load_links(ctx, links);
    let compact = ctx.viewport.compact_header;

    view! {
        <SiteHeader ctx links/>
        <main id="main" class="main">
            <Show when=move || ThemeButtonMount::from_compact(compact.get()) == ThemeButtonMount::Main>
                <ThemeToggle ctx/>
            </Show>
            <HeroCard ctx links/>
            <AboutSection ctx/>
            <ExperiencePanel ctx/>
            <ProjectsPanel ctx/>
            <SkillsPanel ctx/>
        </main>
    }
}
