//! Latest news & report teasers on the home page.

use leptos::html::Div;
use leptos::prelude::*;

use super::reveal::use_reveal;
use crate::content::reports::{REPORTS, Report};
use crate::state::reveal::{cascade_delay_ms, reveal_class};

/// Card `i` starts its transition `CARD_BASE_DELAY_MS + i * CARD_STEP_MS` after reveal.
const CARD_BASE_DELAY_MS: u32 = 200;
const CARD_STEP_MS: u32 = 100;

#[component]
pub fn NewsReports() -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let visible = use_reveal(container);

    view! {
        <section class="news" id="news">
            <div class="news__container" node_ref=container>
                <header class=move || format!("news__header {}", reveal_class(visible.get()))>
                    <span class="section-eyebrow">"Stay Informed"</span>
                    <h2 class="section-title">"News & Reports"</h2>
                    <p class="section-lead">"Market insight and company updates from our trading desks."</p>
                </header>

                <div class="news__grid">
                    {REPORTS
                        .iter()
                        .enumerate()
                        .map(|(index, report)| view! { <ReportCard report=*report index=index visible=visible /> })
                        .collect_view()}
                </div>

                <div class=move || format!("news__more {}", reveal_class(visible.get()))>
                    <a href="/news" class="btn btn--outline">"View All Updates"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ReportCard(report: Report, index: usize, visible: Signal<bool>) -> impl IntoView {
    let delay = cascade_delay_ms(CARD_BASE_DELAY_MS, CARD_STEP_MS, index);

    view! {
        <article
            class=move || format!("news__card {}", reveal_class(visible.get()))
            style:transition-delay=format!("{delay}ms")
        >
            <img src=report.image alt=report.title class="news__image" loading="lazy" />
            <div class="news__card-body">
                <time class="news__date">{report.date}</time>
                <h3 class="news__title">{report.title}</h3>
                <p class="news__excerpt">{report.excerpt}</p>
                <a href=report.href() class="news__link">"Read More"</a>
            </div>
        </article>
    }
}
