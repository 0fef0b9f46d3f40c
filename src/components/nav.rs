use gloo_events::EventListener;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::content::{Brand, NavLink};

/// How far the page must scroll before the bar gets its solid style.
const SCROLLED_THRESHOLD_PX: f64 = 2.0;

fn window_scrolled() -> bool {
    window()
        .and_then(|w| w.scroll_y().ok())
        .map(|y| y > SCROLLED_THRESHOLD_PX)
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: Brand,
    pub links: Vec<NavLink>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { brand, links } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(window_scrolled);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            is_scrolled.set(window_scrolled());

            let listener = window().map(|w| {
                EventListener::new(&w, "scroll", move |_| {
                    is_scrolled.set(window_scrolled());
                })
            });

            move || drop(listener)
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let link_list = |on_click: Option<Callback<MouseEvent>>| -> Html {
        links
            .iter()
            .map(|link| {
                html! {
                    <a key={link.label.clone()} href={link.href.clone()} class="nav-link" onclick={on_click.clone()}>
                        {link.label.clone()}
                    </a>
                }
            })
            .collect()
    };

    html! {
        <nav
            role="navigation"
            aria-label="Main navigation"
            class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}
        >
            <div class="nav-content">
                <a href="#top" class="nav-logo">
                    <span class="nav-logo-primary">{brand.primary.clone()}</span>
                    <span class="nav-logo-secondary">{brand.secondary.clone()}</span>
                </a>

                <div class="nav-desktop">
                    { link_list(None) }
                    <a href="#cta" class="nav-cta">{"Get Started"}</a>
                </div>

                <div class="nav-mobile-actions">
                    <button
                        class="burger-menu"
                        aria-label="Toggle menu"
                        aria-expanded={(*menu_open).to_string()}
                        aria-controls="mobile-nav-panel"
                        onclick={toggle_menu}
                    >
                        {
                            if *menu_open {
                                html! {
                                    <svg viewBox="0 0 24 24" class="burger-icon">
                                        <line x1="18" y1="6" x2="6" y2="18" />
                                        <line x1="6" y1="6" x2="18" y2="18" />
                                    </svg>
                                }
                            } else {
                                html! {
                                    <svg viewBox="0 0 24 24" class="burger-icon">
                                        <line x1="3" y1="6" x2="21" y2="6" />
                                        <line x1="3" y1="12" x2="21" y2="12" />
                                        <line x1="3" y1="18" x2="21" y2="18" />
                                    </svg>
                                }
                            }
                        }
                    </button>
                    <a href="#cta" class="nav-cta">{"Get Started"}</a>
                </div>
            </div>

            <div
                id="mobile-nav-panel"
                class={classes!("mobile-panel", (*menu_open).then(|| "open"))}
            >
                { link_list(Some(close_menu)) }
            </div>
        </nav>
    }
}
