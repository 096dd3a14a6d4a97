//! Navigation list and the shared link loader.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::net::types::{LinkSet, NavLink};

#[cfg(test)]
#[path = "nav_menu_test.rs"]
mod nav_menu_test;

/// Anchor the hero intercepts while About is its back face.
pub const ABOUT_HREF: &str = "#about";

/// Fetch nav and social links into `links`. `socials.json` is only consulted
/// when the nav document carries no social links of its own.
pub fn load_links(ctx: AppContext, links: RwSignal<LinkSet>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use leptos::logging::error;

        use crate::net::api::{fetch_failed_message, fetch_links, fetch_socials};

        let config = ctx.config.get_value();
        let mut set = match fetch_links(&config).await {
            Ok(set) => set,
            Err(e) => {
                error!("{}", fetch_failed_message("Navigation", &e));
                LinkSet::default()
            }
        };
        if set.social.is_empty() {
            match fetch_socials(&config).await {
                Ok(socials) => set.social = socials.social,
                Err(e) => error!("{}", fetch_failed_message("Social links", &e)),
            }
        }
        links.set(set);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ctx, links);
    }
}

#[component]
pub fn NavMenu(ctx: AppContext, links: RwSignal<LinkSet>) -> impl IntoView {
    let menu = ctx.menu;
    view! {
        <nav id="nav" class="nav" class:opened=move || menu.with(|m| m.open)>
            <ul id="nav-ul" class="nav-ul">
                {move || links.with(|l| l.nav.clone()).into_iter().map(|link| view! { <NavItem ctx link/> }).collect_view()}
            </ul>
        </nav>
    }
}

#[component]
fn NavItem(ctx: AppContext, link: NavLink) -> impl IntoView {
    let to_about = link.href == ABOUT_HREF;
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if to_about {
            let mut flipped = false;
            ctx.hero.update(|h| flipped = h.show_about());
            if flipped {
                ev.prevent_default();
            }
        }
        ctx.close_menu();
    };

    view! {
        <li class="nav-li">
            <a class="nav-li-a" href=link.href on:click=on_click>
                {link.icon.map(|icon| view! { <i class=icon aria-hidden="true"></i> })}
                <span class="nav-text">{link.name}</span>
            </a>
        </li>
    }
}
