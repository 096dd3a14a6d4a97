//! Social/contact links shown on the hero card.

use leptos::prelude::*;

use crate::net::types::{LinkSet, SocialLink};

#[cfg(test)]
#[path = "social_links_test.rs"]
mod social_links_test;

/// Styling hook carried by every social icon next to its own icon classes.
const SOCIAL_ICON_CLASS: &str = "social-icon";

fn icon_class(icon: Option<&str>) -> String {
    match icon.map(str::trim).filter(|i| !i.is_empty()) {
        Some(icon) => format!("{icon} {SOCIAL_ICON_CLASS}"),
        None => SOCIAL_ICON_CLASS.to_owned(),
    }
}

#[component]
pub fn SocialLinks(links: RwSignal<LinkSet>) -> impl IntoView {
    view! {
        <ul id="hero-social-ul" class="hero-social-ul">
            {move || {
                links
                    .with(|l| l.social.clone())
                    .into_iter()
                    .map(|link| view! { <SocialItem link/> })
                    .collect_view()
            }}
        </ul>
    }
}

#[component]
fn SocialItem(link: SocialLink) -> impl IntoView {
    let icon = icon_class(link.icon.as_deref());
    view! {
        <li class="social-li">
            <a class="social-li-a" href=link.href target="_blank" rel="noopener noreferrer">
                <i class=icon aria-hidden="true"></i>
                <span class="social-text">{link.name}</span>
            </a>
        </li>
    }
}
