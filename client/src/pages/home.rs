//! Landing page.

use leptos::prelude::*;

use crate::components::about_us::AboutUs;
use crate::components::banner::Banner;
use crate::components::news_reports::NewsReports;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Banner />
        <AboutUs />
        <NewsReports />
    }
}
