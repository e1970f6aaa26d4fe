//! Company introduction section on the home page.

use leptos::html::Div;
use leptos::prelude::*;

use super::reveal::use_reveal;
use crate::content::company::{ABOUT_PARAGRAPHS, COMPANY_NAME, FEATURES, STATS};
use crate::state::reveal::reveal_class;

#[component]
pub fn AboutUs() -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let visible = use_reveal(container);

    view! {
        <section class="about" id="about">
            <div class="about__container" node_ref=container>
                <div class=move || format!("about__media {}", reveal_class(visible.get()))>
                    <img src="/2.jpeg" alt="Sugar trading operations" class="about__image" attr:loading="lazy" />
                    <div class="about__stats">
                        {STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="about__stat">
                                        <span class="about__stat-value">{stat.value}</span>
                                        <span class="about__stat-label">{stat.label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class=move || format!("about__body {}", reveal_class(visible.get()))>
                    <span class="section-eyebrow">"About Us"</span>
                    <h2 class="section-title">{format!("Welcome to {COMPANY_NAME}")}</h2>
                    {ABOUT_PARAGRAPHS.iter().map(|p| view! { <p class="about__text">{*p}</p> }).collect_view()}

                    <div class="about__features">
                        {FEATURES
                            .iter()
                            .map(|feature| {
                                view! {
                                    <div class="about__feature">
                                        <h3 class="about__feature-title">{feature.title}</h3>
                                        <p class="about__feature-text">{feature.text}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="about__actions">
                        <a href="/contactus" class="btn btn--primary">"Contact Us"</a>
                        <a href="/about" class="btn btn--outline">"Learn More"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
