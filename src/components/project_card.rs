//! One project as a flip card.
//!
//! The image sits on the front face; the back face holds the description and
//! tech stack. Each card owns its flip flag, created fresh whenever the card
//! is rebuilt. Clicks that start inside a nested link never flip the card.

use leptos::prelude::*;

use crate::net::types::Project;
use crate::state::flip::FlipState;
use crate::util::dom::click_origin;

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let flip = RwSignal::new(FlipState::default());
    let on_trigger = move |ev: leptos::ev::MouseEvent| {
        let origin = click_origin(&ev);
        flip.maybe_update(|f| f.handle_click(origin));
    };
    let pressed = move || flip.with(|f| f.aria_pressed());

    let alt = format!("{} preview", project.name);
    let tech = project
        .tech_stack
        .into_iter()
        .map(|tech| view! { <li class="tech-item">{tech}</li> })
        .collect_view();

    view! {
        <section class="projectCard">
            <h3 class="project-title">{project.name}</h3>
            <article class="flip" role="button" aria-pressed=pressed on:click=on_trigger>
                <section class="flip-inner" class:flipped=move || flip.with(|f| f.is_flipped())>
                    <article class="flip-front">
                        <img src=project.image alt=alt class="project-img" aria-pressed=pressed/>
                    </article>
                    <article class="flip-back">
                        <section class="description-flex">
                            <p class="description">{project.description}</p>
                            <ul class="tech-list">{tech}</ul>
                        </section>
                    </article>
                </section>
            </article>
            <article class="links-flex">
                <button type="button" class="infoBox" title="Project details" aria-pressed=pressed on:click=on_trigger>
                    <i class="fa-solid fa-circle-info" aria-hidden="true"></i>
                    <span class="sr-only">"Toggle project details"</span>
                </button>
                <a
                    href=project.source_code
                    class="githubLink"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="Source code"
                >
                    <i class="fa-brands fa-github" aria-hidden="true"></i>
                </a>
                <a
                    href=project.live_link
                    class="siteLink"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="Live site"
                >
                    <i class="fa-solid fa-square-arrow-up-right" aria-hidden="true"></i>
                </a>
            </article>
        </section>
    }
}
