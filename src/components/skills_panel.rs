//! Skills section with a Technical / Soft category switch.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::net::types::{Skill, SkillsCatalog};
use crate::state::skills::{SkillCategory, skill_initials};

#[cfg(test)]
#[path = "skills_panel_test.rs"]
mod skills_panel_test;

#[component]
pub fn SkillsPanel(ctx: AppContext) -> impl IntoView {
    let catalog = RwSignal::new(None::<SkillsCatalog>);
    let category = RwSignal::new(SkillCategory::default());
    load_skills(ctx, catalog);

    view! {
        <section id="skills" class="skills">
            <article class="sectionContainer">
                <h2 class="sectionTitle">"Skills"</h2>
                <div class="skills-toggle" role="group" aria-label="Skill category">
                    <CategoryButton id="toggleTechnical" label="Technical" value=SkillCategory::Technical category/>
                    <CategoryButton id="toggleSoft" label="Soft" value=SkillCategory::Soft category/>
                </div>
                <SkillsView catalog category/>
            </article>
        </section>
    }
}

fn load_skills(ctx: AppContext, catalog: RwSignal<Option<SkillsCatalog>>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::net::api::{fetch_failed_message, fetch_skills};

        match fetch_skills(&ctx.config.get_value()).await {
            Ok(loaded) => catalog.set(Some(loaded)),
            Err(e) => leptos::logging::error!("{}", fetch_failed_message("Skills", &e)),
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ctx, catalog);
    }
}

#[component]
fn CategoryButton(
    id: &'static str,
    label: &'static str,
    value: SkillCategory,
    category: RwSignal<SkillCategory>,
) -> impl IntoView {
    view! {
        <button
            id=id
            type="button"
            class="skills-toggle-btn"
            class:active=move || category.get() == value
            aria-pressed=move || if category.get() == value { "true" } else { "false" }
            on:click=move |_| category.set(value)
        >
            {label}
        </button>
    }
}

/// Skills of the active category. Empty until the catalog loads.
#[component]
pub fn SkillsView(catalog: RwSignal<Option<SkillsCatalog>>, category: RwSignal<SkillCategory>) -> impl IntoView {
    view! {
        <div id="skillsContainer" class="skillsContainer">
            {move || {
                let Some(catalog) = catalog.get() else {
                    return ().into_any();
                };
                match category.get() {
                    SkillCategory::Technical => catalog
                        .technical
                        .into_iter()
                        .map(|group| {
                            view! {
                                <section class="skill-group">
                                    <h3 class="skill-group-title">{group.category}</h3>
                                    <div class="skill-list">
                                        {group.items.into_iter().map(|skill| view! { <SkillItem skill/> }).collect_view()}
                                    </div>
                                </section>
                            }
                        })
                        .collect_view()
                        .into_any(),
                    SkillCategory::Soft => view! {
                        <section class="skill-group soft-skills">
                            <div class="soft-grid">
                                {catalog.soft.into_iter().map(|skill| view! { <SkillItem skill/> }).collect_view()}
                            </div>
                        </section>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn SkillItem(skill: Skill) -> impl IntoView {
    let visual = match skill.logo {
        Some(logo) => {
            let alt = format!("{} logo", skill.name);
            view! { <img src=logo alt=alt class="skill-logo" loading="lazy"/> }.into_any()
        }
        None => view! { <span class="skill-logo-fallback" aria-hidden="true">{skill_initials(&skill.name)}</span> }
            .into_any(),
    };

    view! {
        <figure class="skill-item">
            {visual}
            <figcaption class="skill-name">{skill.name}</figcaption>
        </figure>
    }
}
