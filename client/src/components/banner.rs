//! Hero carousel at the top of the home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The banner owns a [`SlideTimer`] in a signal and drives it from a
//! [`FrameLoop`]. Every frame feeds the frame timestamp into `tick`, which
//! updates the progress bar and advances the slide when its interval is up.
//! The loop is cancelled when the banner unmounts.

use leptos::prelude::*;

use crate::content::slides::{SLIDE_DURATION_MS, SLIDES, Slide};
use crate::state::carousel::SlideTimer;
use crate::util::clock::now_ms;
use crate::util::frame_loop::FrameLoop;

#[component]
pub fn Banner() -> impl IntoView {
    let timer = match SlideTimer::new(SLIDES.len(), SLIDE_DURATION_MS, now_ms()) {
        Ok(timer) => RwSignal::new(timer),
        Err(e) => {
            leptos::logging::warn!("hero carousel disabled: {e}");
            return ().into_any();
        }
    };

    let frames = FrameLoop::start(move |now| {
        let _ = timer.try_update(|t| t.tick(now));
    });
    on_cleanup(move || frames.cancel());

    let go_to = move |index: usize| {
        timer.update(|t| {
            if let Err(e) = t.go_to(index, now_ms()) {
                leptos::logging::warn!("slide navigation ignored: {e}");
            }
        });
    };

    view! {
        <section class="hero" aria-roledescription="carousel" aria-label="Highlights">
            {SLIDES
                .iter()
                .enumerate()
                .map(|(index, slide)| view! { <HeroSlide slide=*slide index=index timer=timer /> })
                .collect_view()}

            <div class="hero__dots" role="group" aria-label="Choose slide">
                {(0..SLIDES.len())
                    .map(|index| {
                        view! {
                            <button
                                class="hero__dot"
                                class:hero__dot--active=move || timer.with(|t| t.current() == index)
                                aria-label=format!("Go to slide {}", index + 1)
                                aria-current=move || {
                                    if timer.with(|t| t.current() == index) { "true" } else { "false" }
                                }
                                on:click=move |_| go_to(index)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="hero__progress">
                {(0..SLIDES.len())
                    .map(|index| {
                        view! {
                            <div class="hero__progress-track">
                                <div
                                    class="hero__progress-bar"
                                    style:width=move || format!("{:.2}%", timer.with(|t| t.progress_of(index)))
                                ></div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn HeroSlide(slide: Slide, index: usize, timer: RwSignal<SlideTimer>) -> impl IntoView {
    let is_current = move || timer.with(|t| t.current() == index);
    let position = move || timer.with(|t| t.position_of(index).class());

    view! {
        <div
            class="hero__slide"
            class:hero__slide--active=is_current
            style:background-image=format!("url('{}')", slide.image)
            aria-hidden=move || if is_current() { "false" } else { "true" }
        >
            <div class="hero__overlay"></div>
            <div class=move || format!("hero__content {}", position())>
                <h1 class="hero__title">{slide.title}</h1>
                <p class="hero__description">{slide.description}</p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href=slide.primary.href>
                        {slide.primary.label}
                    </a>
                    <a class="btn btn--outline" href=slide.secondary.href>
                        {slide.secondary.label}
                    </a>
                </div>
            </div>
        </div>
    }
}
