//! Fixed site header: scroll-driven classes, menu button and the compact
//! theme button.
//!
//! SYSTEM CONTEXT
//! ==============
//! A window `scroll` listener feeds `HeaderState`. Each upward sample past
//! the threshold schedules a decay task; only the latest one clears
//! `scrollingUp`.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::nav_menu::NavMenu;
use crate::components::theme_toggle::ThemeToggle;
use crate::net::types::LinkSet;
use crate::state::header::HeaderState;
use crate::state::layout::ThemeButtonMount;
use crate::state::menu::MenuState;
use crate::util::dom::scroll_y;

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

#[component]
pub fn SiteHeader(ctx: AppContext, links: RwSignal<LinkSet>) -> impl IntoView {
    let header = RwSignal::new(HeaderState::new(scroll_y()));

    #[cfg(feature = "csr")]
    {
        use std::time::Duration;

        use crate::state::header::SCROLL_UP_DECAY_MS;

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = scroll_y();
            let mut ticket = None;
            header.update(|h| ticket = h.sample(y));
            if let Some(ticket) = ticket {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(Duration::from_millis(u64::from(SCROLL_UP_DECAY_MS))).await;
                    header.maybe_update(|h| h.expire(ticket));
                });
            }
        });
        on_cleanup(move || handle.remove());
    }

    let compact = ctx.viewport.compact_header;
    let menu = ctx.menu;

    view! {
        <header
            id="header"
            class="header"
            class:active=move || header.with(|h| h.past_threshold)
            class:scrollingUp=move || header.with(|h| h.scrolling_up)
        >
            <a class="logo" href="#home">"Portfolio"</a>
            <Show when=move || ThemeButtonMount::from_compact(compact.get()) == ThemeButtonMount::Header>
                <ThemeToggle ctx/>
            </Show>
            <button
                id="menuBtn"
                class="menuBtn"
                type="button"
                class:opened=move || menu.with(|m| m.open)
                aria-label="Toggle navigation"
                aria-controls="nav"
                aria-expanded=move || menu.get().aria_expanded()
                on:click=move |_| menu.update(MenuState::toggle)
            >
                <span class="menuBtn-line"></span>
                <span class="menuBtn-line"></span>
                <span class="menuBtn-line"></span>
            </button>
            <NavMenu ctx links/>
        </header>
    }
}
