//! Site footer: brand blurb, link columns, contact details, and copyright.

use leptos::html::Div;
use leptos::prelude::*;

use super::reveal::use_reveal;
use crate::content::company::{
    ADDRESS_LINES, COMPANY_NAME, EMAIL, LEGAL_LINKS, PHONE_DISPLAY, PHONE_HREF, PRODUCTS, QUICK_LINKS, SOCIAL_LINKS,
    TAGLINE, product_href, quick_link_href,
};
use crate::state::reveal::{cascade_delay_ms, reveal_class};
use crate::util::clock::current_year;

const COLUMN_STEP_MS: u32 = 100;

#[component]
pub fn Footer() -> impl IntoView {
    let grid = NodeRef::<Div>::new();
    let visible = use_reveal(grid);

    let column_class = move || format!("footer__column {}", reveal_class(visible.get()));
    let delay = |index: usize| format!("{}ms", cascade_delay_ms(0, COLUMN_STEP_MS, index));

    view! {
        <footer class="footer">
            <div class="footer__grid" node_ref=grid>
                <div class=column_class style:transition-delay=delay(0)>
                    <img src="/logo.png" alt=COMPANY_NAME class="footer__logo" />
                    <p class="footer__blurb">{TAGLINE}</p>
                    <ul class="footer__social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <a href=link.href aria-label=link.name class="footer__social-link">
                                            {link.name}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class=column_class style:transition-delay=delay(1)>
                    <h3 class="footer__heading">"Quick Links"</h3>
                    <ul class="footer__links">
                        {QUICK_LINKS
                            .iter()
                            .map(|label| view! { <li><a href=quick_link_href(label)>{*label}</a></li> })
                            .collect_view()}
                    </ul>
                </div>

                <div class=column_class style:transition-delay=delay(2)>
                    <h3 class="footer__heading">"Our Products"</h3>
                    <ul class="footer__links">
                        {PRODUCTS
                            .iter()
                            .map(|label| view! { <li><a href=product_href(label)>{*label}</a></li> })
                            .collect_view()}
                    </ul>
                </div>

                <div class=column_class style:transition-delay=delay(3)>
                    <h3 class="footer__heading">"Contact Us"</h3>
                    <address class="footer__address">
                        {ADDRESS_LINES.iter().map(|line| view! { <span>{*line}</span> }).collect_view()}
                    </address>
                    <a href=PHONE_HREF class="footer__contact">{PHONE_DISPLAY}</a>
                    <a href=format!("mailto:{EMAIL}") class="footer__contact">{EMAIL}</a>
                </div>
            </div>

            <div class="footer__bottom">
                <p class="footer__copyright">
                    {format!("© {} {COMPANY_NAME}. All rights reserved.", current_year())}
                </p>
                <ul class="footer__legal">
                    {LEGAL_LINKS
                        .iter()
                        .map(|(label, href)| view! { <li><a href=*href>{*label}</a></li> })
                        .collect_view()}
                </ul>
            </div>
        </footer>
    }
}
