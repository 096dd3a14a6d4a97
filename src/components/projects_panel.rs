//! Projects section: tabbed single card above the breakpoint, stacked list
//! below it.
//!
//! The remembered tab index lives in `ProjectsState`. Crossing the
//! breakpoint rebuilds every card from that state, so a round trip through
//! the stacked layout comes back to the same selected project.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::project_card::ProjectCard;
use crate::state::layout::ProjectLayout;
use crate::state::projects::ProjectsState;

#[cfg(test)]
#[path = "projects_panel_test.rs"]
mod projects_panel_test;

pub const EMPTY_PROJECTS_MESSAGE: &str = "No projects yet.";

#[component]
pub fn ProjectsPanel(ctx: AppContext) -> impl IntoView {
    let projects = RwSignal::new(None::<ProjectsState>);
    let stacked = ctx.viewport.projects_stacked;
    load_projects(ctx, projects);

    Effect::new(move || {
        let layout = ProjectLayout::from_stacked(stacked.get());
        projects.maybe_update(|p| p.as_mut().is_some_and(|p| p.set_layout(layout)));
    });

    view! {
        <section id="projects" class="projects">
            <article class="sectionContainer">
                <h2 class="sectionTitle">"Projects"</h2>
                <ProjectsView projects/>
            </article>
        </section>
    }
}

fn load_projects(ctx: AppContext, projects: RwSignal<Option<ProjectsState>>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::net::api::{fetch_failed_message, fetch_projects};

        match fetch_projects(&ctx.config.get_value()).await {
            Ok(list) => {
                let layout = ProjectLayout::from_stacked(ctx.viewport.projects_stacked.get_untracked());
                projects.set(Some(ProjectsState::new(list, layout)));
            }
            Err(e) => leptos::logging::error!("{}", fetch_failed_message("Projects", &e)),
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ctx, projects);
    }
}

/// Tab strip and cards for the current layout. `None` means nothing has
/// loaded.
#[component]
pub fn ProjectsView(projects: RwSignal<Option<ProjectsState>>) -> impl IntoView {
    move || {
        let Some(state) = projects.get() else {
            return ().into_any();
        };
        if state.tabs.is_empty() {
            return view! { <p class="project-empty">{EMPTY_PROJECTS_MESSAGE}</p> }.into_any();
        }

        let tabs = state
            .tabs
            .items()
            .iter()
            .enumerate()
            .map(|(index, project)| {
                let select = move |_| projects.maybe_update(|p| p.as_mut().is_some_and(|p| p.select(index)));
                view! {
                    <li>
                        <button
                            type="button"
                            class="project-tab"
                            class:active=state.tabs.is_active(index)
                            role="tab"
                            aria-selected=state.tabs.aria_selected(index)
                            data-index=index.to_string()
                            on:click=select
                        >
                            {project.tab_label(index)}
                        </button>
                    </li>
                }
            })
            .collect_view();
        let cards = state
            .visible_indices()
            .into_iter()
            .filter_map(|index| state.tabs.items().get(index).cloned())
            .map(|project| view! { <ProjectCard project/> })
            .collect_view();

        view! {
            <ul id="projectTabs" class="project-tabs" class:hidden=state.tabs_hidden() role="tablist">
                {tabs}
            </ul>
            <div id="project-card-container" class="project-card-container">{cards}</div>
        }
        .into_any()
    }
}
