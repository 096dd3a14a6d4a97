//! Hero flip card and the About content it can carry on its back face.
//!
//! Below the hero breakpoint the About content is the hero's back face and a
//! single toggle button (outside the flip surface) turns the card. At and
//! above it, About renders as its own section and the toggle is removed.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::social_links::SocialLinks;
use crate::net::types::LinkSet;

#[cfg(test)]
#[path = "hero_card_test.rs"]
mod hero_card_test;

#[component]
pub fn HeroCard(ctx: AppContext, links: RwSignal<LinkSet>) -> impl IntoView {
    let hero = ctx.hero;
    let stacked = ctx.viewport.hero_stacked;

    // Every crossing remounts About and returns the hero to its front.
    Effect::new(move || {
        let stacked = stacked.get();
        hero.update(|h| h.set_stacked(stacked));
    });

    let has_toggle = Memo::new(move |_| hero.with(|h| h.has_toggle()));

    view! {
        <section id="home" class="hero">
            <article id="heroCard" class="heroCard flip-card">
                <section class="flip-card-inner" class:flipped=move || hero.with(|h| h.flip.is_flipped())>
                    <article class="flip-card-front introCard">
                        <p class="hero-greeting">"Hi, my name is"</p>
                        <h1 class="hero-name">"Portfolio Owner"</h1>
                        <p class="hero-tagline">"I build things for the web."</p>
                        <SocialLinks links/>
                    </article>
                    {move || {
                        has_toggle
                            .get()
                            .then(|| view! { <section id="about" class="flip-card-back about aboutBack"><AboutBody/></section> })
                    }}
                </section>
                {move || {
                    has_toggle
                        .get()
                        .then(|| {
                            view! {
                                <button
                                    type="button"
                                    class="flipToggleBtn"
                                    aria-controls="heroCard"
                                    aria-pressed=move || hero.with(|h| h.flip.aria_pressed())
                                    on:click=move |_| hero.update(|h| {
                                        h.toggle();
                                    })
                                >
                                    <i class="fa-solid fa-rotate flipIcon" aria-hidden="true"></i>
                                    <span class="sr-only">{move || hero.with(|h| h.toggle_label())}</span>
                                </button>
                            }
                        })
                }}
            </article>
        </section>
    }
}

/// Standalone About section, shown when the hero does not carry it.
#[component]
pub fn AboutSection(ctx: AppContext) -> impl IntoView {
    let hero = ctx.hero;
    move || {
        (!hero.with(|h| h.has_toggle())).then(|| {
            view! {
                <section id="about" class="about">
                    <article class="sectionContainer">
                        <AboutBody/>
                    </article>
                </section>
            }
        })
    }
}

#[component]
fn AboutBody() -> impl IntoView {
    view! {
        <h2 class="sectionTitle">"About"</h2>
        <p class="about-text">
            "I design and build web applications end to end, from data model to interface. "
            "I care about fast, accessible pages and code that stays easy to change."
        </p>
    }
}
