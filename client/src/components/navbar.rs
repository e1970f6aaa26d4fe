//! Site header with desktop dropdowns and the mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! All menu behavior lives in [`NavState`]; this component only translates DOM
//! events into its transitions. Window-level listeners (scroll, resize,
//! Escape, outside press) are registered on hydrate and removed on unmount.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::company::COMPANY_NAME;
use crate::content::navigation::{NAV_TREE, NavEntry};
use crate::state::nav::NavState;

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

const MOBILE_MENU_ID: &str = "mobile-menu";

/// Apply a transition and notify subscribers only when something changed.
fn apply(nav: RwSignal<NavState>, transition: impl FnOnce(&mut NavState)) {
    let mut next = nav.get_untracked();
    transition(&mut next);
    if nav.with_untracked(|current| *current != next) {
        nav.set(next);
    }
}

/// Highlight rule for top-level links: home matches exactly, sections by prefix.
fn is_active_path(entry_path: &str, current: &str) -> bool {
    if entry_path == "/" { current == "/" } else { current.starts_with(entry_path) }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let location = use_location();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::viewport::{classify_click, inner_width, scroll_y};

        Effect::new(move || {
            apply(nav, |s| {
                s.on_resize(inner_width());
                s.on_scroll(scroll_y());
            });
        });

        let scroll = window_event_listener(leptos::ev::scroll, move |_| apply(nav, |s| s.on_scroll(scroll_y())));
        let resize = window_event_listener(leptos::ev::resize, move |_| apply(nav, |s| s.on_resize(inner_width())));
        let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                apply(nav, NavState::on_escape);
            }
        });
        let press = window_event_listener(leptos::ev::mousedown, move |ev| {
            let target = classify_click(ev.target());
            apply(nav, |s| s.on_pointer_down(target));
        });
        on_cleanup(move || {
            scroll.remove();
            resize.remove();
            keydown.remove();
            press.remove();
        });
    }

    let pathname = location.pathname;

    view! {
        <header class="navbar" class:navbar--solid=move || nav.with(NavState::solid_header)>
            <nav class="navbar__inner" aria-label="Main">
                <a href="/" class="navbar__logo" aria-label=COMPANY_NAME>
                    <img src="/logo.png" alt=COMPANY_NAME class="navbar__logo-image" />
                </a>

                <ul class="navbar__menu">
                    {NAV_TREE
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! { <DesktopEntry entry=*entry index=index nav=nav pathname=pathname /> }
                        })
                        .collect_view()}
                </ul>

                <button
                    class="navbar__toggle"
                    class:navbar__toggle--open=move || nav.with(|s| s.mobile_open)
                    aria-label="Toggle menu"
                    aria-controls=MOBILE_MENU_ID
                    aria-expanded=move || if nav.with(|s| s.mobile_open) { "true" } else { "false" }
                    on:click=move |_| nav.update(NavState::toggle_mobile)
                >
                    <span class="navbar__toggle-bar"></span>
                    <span class="navbar__toggle-bar"></span>
                    <span class="navbar__toggle-bar"></span>
                </button>

                <div
                    id=MOBILE_MENU_ID
                    class="navbar__mobile"
                    class:navbar__mobile--open=move || nav.with(|s| s.mobile_open)
                >
                    <ul class="navbar__mobile-list">
                        {NAV_TREE
                            .iter()
                            .enumerate()
                            .map(|(index, entry)| view! { <MobileEntry entry=*entry index=index nav=nav /> })
                            .collect_view()}
                    </ul>
                </div>
            </nav>
        </header>
    }
}

#[component]
fn DesktopEntry(entry: NavEntry, index: usize, nav: RwSignal<NavState>, pathname: Memo<String>) -> impl IntoView {
    let open = move || nav.with(|s| s.dropdown.is_open(index));
    let active = move || pathname.with(|current| is_active_path(entry.path, current));

    view! {
        <li
            class="navbar__item"
            class:navbar__item--open=open
            on:mouseenter=move |_| apply(nav, |s| s.on_hover_enter(NAV_TREE, index))
            on:mouseleave=move |_| apply(nav, NavState::on_hover_leave)
        >
            <a
                href=entry.path
                class="navbar__link"
                class:navbar__link--active=active
                aria-haspopup=entry.has_children().then_some("true")
                aria-expanded=move || entry.has_children().then(|| if open() { "true" } else { "false" })
                on:click=move |ev: leptos::ev::MouseEvent| {
                    let mut consumed = false;
                    nav.update(|s| consumed = s.on_entry_activate(NAV_TREE, index));
                    if consumed {
                        ev.prevent_default();
                    }
                }
            >
                {entry.label}
            </a>
            <Show when=move || entry.has_children()>
                <ul class="navbar__dropdown" class:navbar__dropdown--open=open>
                    {entry
                        .children
                        .iter()
                        .map(|child| {
                            view! {
                                <li>
                                    <a
                                        href=child.path
                                        class="navbar__dropdown-link"
                                        on:click=move |_| nav.update(NavState::on_link_followed)
                                    >
                                        {child.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </li>
    }
}

#[component]
fn MobileEntry(entry: NavEntry, index: usize, nav: RwSignal<NavState>) -> impl IntoView {
    let open = move || nav.with(|s| s.dropdown.is_open(index));
    let submenu_id = entry.submenu_id();

    if !entry.has_children() {
        return view! {
            <li class="navbar__mobile-item">
                <a
                    href=entry.path
                    class="navbar__mobile-link"
                    on:click=move |_| nav.update(|s| {
                        s.on_entry_activate(NAV_TREE, index);
                    })
                >
                    {entry.label}
                </a>
            </li>
        }
        .into_any();
    }

    view! {
        <li class="navbar__mobile-item">
            <button
                type="button"
                class="navbar__mobile-link navbar__mobile-link--parent"
                aria-controls=submenu_id.clone()
                aria-expanded=move || if open() { "true" } else { "false" }
                on:click=move |_| nav.update(|s| {
                    s.on_entry_activate(NAV_TREE, index);
                })
            >
                {entry.label}
                <span class="navbar__chevron" class:navbar__chevron--open=open aria-hidden="true"></span>
            </button>
            <ul id=submenu_id class="navbar__mobile-submenu" class:navbar__mobile-submenu--open=open>
                {entry
                    .children
                    .iter()
                    .map(|child| {
                        view! {
                            <li>
                                <a
                                    href=child.path
                                    class="navbar__mobile-sublink"
                                    on:click=move |_| nav.update(NavState::on_link_followed)
                                >
                                    {child.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </li>
    }
    .into_any()
}
