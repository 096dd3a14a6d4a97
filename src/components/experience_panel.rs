//! Experience section: company tabs and the selected job's detail.
//!
//! SYSTEM CONTEXT
//! ==============
//! `experiences.json` is fetched once. Until it resolves (or if it fails)
//! the panel stays empty; a resolved empty list shows a short message.
//! Selecting a tab swaps the whole panel body, so no row from a previous
//! job can linger.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::net::types::Job;
use crate::state::tabs::TabList;

#[cfg(test)]
#[path = "experience_panel_test.rs"]
mod experience_panel_test;

pub const EMPTY_EXPERIENCE_MESSAGE: &str = "No experience yet.";
const META_SEPARATOR: &str = " \u{b7} ";

#[component]
pub fn ExperiencePanel(ctx: AppContext) -> impl IntoView {
    let jobs = RwSignal::new(None::<TabList<Job>>);
    load_jobs(ctx, jobs);

    view! {
        <section id="experience" class="experience">
            <article class="sectionContainer">
                <h2 class="sectionTitle">"Experience"</h2>
                <ExperienceTabs jobs/>
            </article>
        </section>
    }
}

fn load_jobs(ctx: AppContext, jobs: RwSignal<Option<TabList<Job>>>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::net::api::{fetch_failed_message, fetch_jobs};

        match fetch_jobs(&ctx.config.get_value()).await {
            Ok(list) => jobs.set(Some(TabList::new(list))),
            Err(e) => leptos::logging::error!("{}", fetch_failed_message("Experience", &e)),
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ctx, jobs);
    }
}

/// Tab strip plus detail panel. `None` means nothing has loaded.
#[component]
pub fn ExperienceTabs(jobs: RwSignal<Option<TabList<Job>>>) -> impl IntoView {
    move || {
        let Some(tabs) = jobs.get() else {
            return ().into_any();
        };
        if tabs.is_empty() {
            return view! { <p class="job-empty">{EMPTY_EXPERIENCE_MESSAGE}</p> }.into_any();
        }

        let buttons = tabs
            .items()
            .iter()
            .enumerate()
            .map(|(index, job)| {
                let select = move |_| jobs.maybe_update(|t| t.as_mut().is_some_and(|t| t.select(index)));
                view! {
                    <li>
                        <button
                            type="button"
                            class="company-tab"
                            class:active=tabs.is_active(index)
                            role="tab"
                            aria-selected=tabs.aria_selected(index)
                            aria-controls="jobPanel"
                            data-index=index.to_string()
                            on:click=select
                        >
                            {job.tab_label(index)}
                        </button>
                    </li>
                }
            })
            .collect_view();
        let detail = tabs.selected().cloned().map(|job| view! { <JobDetail job/> });

        view! {
            <div class="subContainer expContainer">
                <aside class="expSidebar">
                    <ul id="companyTabs" class="company-tabs" role="tablist">{buttons}</ul>
                </aside>
                <article id="jobPanel" class="job-panel" role="tabpanel">{detail}</article>
            </div>
        }
        .into_any()
    }
}

#[component]
pub fn JobDetail(job: Job) -> impl IntoView {
    let tenure = job.tenure.label();
    let location = (!job.location.is_empty()).then_some(job.location);
    let separator = (location.is_some() && tenure.is_some()).then_some(META_SEPARATOR);
    let has_meta = location.is_some() || tenure.is_some();

    view! {
        <header class="job-header">
            <h3 class="job-title">
                {job.title}
                " "
                <span class="at">"@"</span>
                " "
                <span class="company-name">{job.company}</span>
            </h3>
            {has_meta
                .then(|| {
                    view! {
                        <p class="job-meta">
                            {location.map(|l| view! { <span class="job-location">{l}</span> })}
                            {separator}
                            {tenure.map(|t| view! { <span class="job-duration">{t}</span> })}
                        </p>
                    }
                })}
        </header>
        <ul class="task-list">
            {job.tasks.into_iter().map(|task| view! { <li class="task-item">{task}</li> }).collect_view()}
        </ul>
    }
}
