use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::motion::sections::{
    nearest_section, ActiveTheme, FrameThrottle, RevealAction, RevealMap, SectionId, ThemeAction,
};
use crate::motion::word_cycle::run_word_cycle;
use crate::schedule::BrowserScheduler;

/// Share of a section that must be on screen before it fades in.
const REVEAL_THRESHOLD: f64 = 0.1;

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Marks revealable sections as seen the first time they intersect the
/// viewport. The observer lives as long as the calling component.
#[hook]
pub fn use_section_reveal() -> UseReducerHandle<RevealMap> {
    let revealed = use_reducer(RevealMap::default);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let on_entries = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                    move |entries: js_sys::Array, _observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            if !entry.is_intersecting() {
                                continue;
                            }
                            if let Some(section) = SectionId::from_dom_id(&entry.target().id()) {
                                revealed.dispatch(RevealAction::Intersected(section));
                            }
                        }
                    },
                );

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
                let observer = IntersectionObserver::new_with_options(
                    on_entries.as_ref().unchecked_ref(),
                    &options,
                )
                .ok();

                if let (Some(observer), Some(document)) =
                    (observer.as_ref(), window().and_then(|w| w.document()))
                {
                    for section in SectionId::REVEALABLE {
                        if let Some(element) = document.get_element_by_id(section.dom_id()) {
                            observer.observe(&element);
                        }
                    }
                    debug!("Observing {} sections for reveal", SectionId::REVEALABLE.len());
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(on_entries);
                }
            },
            (),
        );
    }

    revealed
}

fn section_centers(document: &Document) -> Vec<(SectionId, Option<f64>)> {
    SectionId::ALL
        .into_iter()
        .map(|section| {
            let center = document.get_element_by_id(section.dom_id()).map(|element| {
                let rect = element.get_bounding_client_rect();
                rect.top() + rect.height() / 2.0
            });
            (section, center)
        })
        .collect()
}

fn nearest_to_viewport_center() -> Option<SectionId> {
    let window = window()?;
    let document = window.document()?;
    let viewport_center = window.inner_height().ok()?.as_f64()? / 2.0;
    nearest_section(section_centers(&document), viewport_center)
}

/// Tracks which section sits closest to the middle of the viewport.
/// Scroll bursts are folded into one measurement per animation frame.
#[hook]
pub fn use_active_theme() -> UseReducerHandle<ActiveTheme> {
    let theme = use_reducer(ActiveTheme::default);

    {
        let theme = theme.clone();
        use_effect_with_deps(
            move |_| {
                let recompute = Rc::new(move || {
                    if let Some(section) = nearest_to_viewport_center() {
                        theme.dispatch(ThemeAction::Nearest(section));
                    }
                });
                let throttle = Rc::new(FrameThrottle::new(BrowserScheduler, {
                    let recompute = recompute.clone();
                    move || recompute()
                }));
                let mut listeners = Vec::new();

                if let Some(window) = window() {
                    recompute();

                    let on_scroll = {
                        let throttle = throttle.clone();
                        move |_: &Event| throttle.trigger()
                    };
                    listeners.push(EventListener::new(&window, "scroll", on_scroll));

                    let on_resize = {
                        let recompute = recompute.clone();
                        move |_: &Event| recompute()
                    };
                    listeners.push(EventListener::new(&window, "resize", on_resize));
                }

                move || {
                    drop(listeners);
                    throttle.cancel();
                }
            },
            (),
        );
    }

    theme
}

/// Drives the hero word list. Returns the index on screen and whether it is
/// faded in.
#[hook]
pub fn use_word_cycle(len: usize) -> (usize, bool) {
    let shown = use_state_eq(|| (0usize, true));

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |len| {
                let running = run_word_cycle(&BrowserScheduler, *len, move |frame| shown.set(frame));
                move || drop(running)
            },
            len,
        );
    }

    *shown
}
