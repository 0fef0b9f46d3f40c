use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::config;
use crate::content::{TickerContent, TickerItem};
use crate::hooks::prefers_reduced_motion;
use crate::motion::ticker::{Direction, TickerRowState};
use crate::schedule::{BrowserScheduler, Scheduler};

/// Owns the per-frame loop of one row. Dropping the pending frame and the
/// resize listener is all it takes to stop it.
struct RowDriver<S: Scheduler> {
    scheduler: S,
    state: Rc<RefCell<TickerRowState>>,
    track: NodeRef,
    group: NodeRef,
    frame: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler + 'static> RowDriver<S> {
    fn new(
        scheduler: S,
        state: Rc<RefCell<TickerRowState>>,
        track: NodeRef,
        group: NodeRef,
    ) -> Self {
        Self {
            scheduler,
            state,
            track,
            group,
            frame: RefCell::new(None),
        }
    }

    fn measure(&self) {
        let width = self
            .group
            .cast::<HtmlElement>()
            .map(|group| group.offset_width() as f64)
            .unwrap_or(0.0);
        self.state.borrow_mut().measure(width);
        self.paint();
        debug!("Ticker row measured at {}px", width);
    }

    fn paint(&self) {
        if let Some(track) = self.track.cast::<HtmlElement>() {
            let transform = self.state.borrow().transform();
            track.style().set_property("transform", &transform).ok();
        }
    }

    fn schedule(self: &Rc<Self>) {
        let driver = Rc::clone(self);
        let handle = self
            .scheduler
            .request_frame(Box::new(move |timestamp| driver.tick(timestamp)));
        *self.frame.borrow_mut() = Some(handle);
    }

    fn tick(self: &Rc<Self>, timestamp: f64) {
        self.state.borrow_mut().frame(timestamp);
        self.paint();
        self.schedule();
    }

    fn stop(&self) {
        self.frame.borrow_mut().take();
    }
}

#[derive(Properties, PartialEq)]
pub struct TickerRowProps {
    pub items: Vec<TickerItem>,
    pub direction: Direction,
    pub speed: f64,
}

#[function_component(TickerRow)]
pub fn ticker_row(props: &TickerRowProps) -> Html {
    let TickerRowProps { items, direction, speed } = props;
    let track_ref = use_node_ref();
    let group_ref = use_node_ref();
    let row = use_mut_ref(|| TickerRowState::new(*direction, *speed));

    {
        let row = row.clone();
        let track_ref = track_ref.clone();
        let group_ref = group_ref.clone();
        use_effect_with_deps(
            move |(direction, speed, _)| {
                *row.borrow_mut() = TickerRowState::new(*direction, *speed);

                let driver = Rc::new(RowDriver::new(BrowserScheduler, row, track_ref, group_ref));
                driver.measure();

                if prefers_reduced_motion() {
                    debug!("Reduced motion requested, ticker row stays still");
                } else {
                    driver.schedule();
                }

                let resize = window().map(|w| {
                    let driver = driver.clone();
                    EventListener::new(&w, "resize", move |_| driver.measure())
                });

                move || {
                    drop(resize);
                    driver.stop();
                }
            },
            (*direction, *speed, items.clone()),
        );
    }

    let on_enter = {
        let row = row.clone();
        Callback::from(move |_: MouseEvent| row.borrow_mut().set_hovering(true))
    };
    let on_leave = {
        let row = row.clone();
        Callback::from(move |_: MouseEvent| row.borrow_mut().set_hovering(false))
    };

    let render_group = |copy: usize| -> Html {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                html! {
                    <div
                        key={format!("{}-{}", copy, i)}
                        class="ticker-item"
                        onmouseenter={on_enter.clone()}
                        onmouseleave={on_leave.clone()}
                    >
                        <img src={config::asset_url(&item.image_url)} alt={item.title.clone()} loading="lazy" />
                        <span>{item.title.clone()}</span>
                    </div>
                }
            })
            .collect()
    };

    html! {
        <div class="ticker-row">
            <div class="ticker-track" ref={track_ref}>
                <div class="ticker-group" ref={group_ref}>
                    { render_group(0) }
                </div>
                <div class="ticker-group" aria-hidden="true">
                    { render_group(1) }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TickerProps {
    pub content: TickerContent,
}

/// Two rows running in opposite directions.
#[function_component(Ticker)]
pub fn ticker(props: &TickerProps) -> Html {
    let TickerContent { top_speed, bottom_speed, top, bottom } = &props.content;

    html! {
        <section class="ticker" aria-label="Clients and partners">
            <TickerRow items={top.clone()} direction={Direction::Left} speed={*top_speed} />
            <TickerRow items={bottom.clone()} direction={Direction::Right} speed={*bottom_speed} />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::manual::ManualScheduler;

    type Row = (Rc<RowDriver<ManualScheduler>>, Rc<RefCell<TickerRowState>>);

    fn running_row(scheduler: &ManualScheduler) -> Row {
        let state = Rc::new(RefCell::new(TickerRowState::new(Direction::Left, 100.0)));
        state.borrow_mut().measure(400.0);
        let driver = Rc::new(RowDriver::new(
            scheduler.clone(),
            state.clone(),
            NodeRef::default(),
            NodeRef::default(),
        ));
        driver.schedule();
        (driver, state)
    }

    #[test]
    fn each_frame_queues_the_next() {
        let scheduler = ManualScheduler::default();
        let (_driver, state) = running_row(&scheduler);

        scheduler.run_frame(0.0);
        scheduler.run_frame(16.0);
        assert!(state.borrow().offset_px < 0.0);
        assert_eq!(scheduler.pending_frames(), 1);
    }

    #[test]
    fn stopped_row_is_never_written_again() {
        let scheduler = ManualScheduler::default();
        let (driver, state) = running_row(&scheduler);
        scheduler.run_frame(0.0);
        scheduler.run_frame(16.0);

        driver.stop();
        let frozen = *state.borrow();
        assert_eq!(scheduler.pending_frames(), 0);
        for frame in 2..10 {
            scheduler.run_frame(frame as f64 * 16.0);
        }
        assert_eq!(*state.borrow(), frozen);
        // the pending frame no longer keeps the driver alive
        assert_eq!(Rc::strong_count(&driver), 1);
    }
}
