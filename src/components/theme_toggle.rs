//! Theme toggle button with the day/night indicator.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::util;

#[component]
pub fn ThemeToggle(ctx: AppContext) -> impl IntoView {
    let theme = ctx.theme;
    let on_click = move |_| {
        let next = util::theme::toggle(theme.get_untracked());
        theme.set(next);
    };

    view! {
        <button class="themeBtn" type="button" title="Toggle theme" aria-label="Toggle theme" on:click=on_click>
            <span class=move || format!("themeIndicator {}", theme.get().time_of_day.class())></span>
        </button>
    }
}
