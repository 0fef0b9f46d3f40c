//! Where animation frames and repeating ticks come from.
//!
//! Every registration returns a handle; dropping the handle cancels it. The
//! page runs on [`BrowserScheduler`], tests drive time by hand.

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Interval;

pub trait Scheduler {
    type Handle;

    /// Runs `callback` once on the next display frame with its timestamp.
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Handle;

    /// Runs `callback` every `millis` until the handle is dropped.
    fn every(&self, millis: u32, callback: Box<dyn FnMut()>) -> Self::Handle;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

pub struct BrowserHandle {
    _frame: Option<AnimationFrame>,
    _interval: Option<Interval>,
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserHandle;

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> BrowserHandle {
        BrowserHandle {
            _frame: Some(request_animation_frame(callback)),
            _interval: None,
        }
    }

    fn every(&self, millis: u32, callback: Box<dyn FnMut()>) -> BrowserHandle {
        BrowserHandle {
            _frame: None,
            _interval: Some(Interval::new(millis, callback)),
        }
    }
}

#[cfg(test)]
pub mod manual {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::{Rc, Weak};

    use super::Scheduler;

    type Repeating = Rc<RefCell<Box<dyn FnMut()>>>;

    #[derive(Default)]
    struct Queue {
        next_id: u64,
        live: HashSet<u64>,
        frames: Vec<(u64, Box<dyn FnOnce(f64)>)>,
        intervals: Vec<(u64, u32, Repeating)>,
    }

    impl Queue {
        fn register(&mut self) -> u64 {
            self.next_id += 1;
            self.live.insert(self.next_id);
            self.next_id
        }
    }

    /// Scheduler whose clock only moves when a test says so.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    pub struct ManualHandle {
        id: u64,
        queue: Weak<RefCell<Queue>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            let Some(queue) = self.queue.upgrade() else { return };
            // Callbacks are dropped after the borrow ends; they may own handles.
            let _cancelled = {
                let mut queue = queue.borrow_mut();
                queue.live.remove(&self.id);
                let (frames, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut queue.frames)
                    .into_iter()
                    .partition(|(id, _)| *id == self.id);
                queue.frames = kept;
                let (intervals, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut queue.intervals)
                    .into_iter()
                    .partition(|(id, _, _)| *id == self.id);
                queue.intervals = kept;
                (frames, intervals)
            };
        }
    }

    impl ManualScheduler {
        fn handle(&self, id: u64) -> ManualHandle {
            ManualHandle {
                id,
                queue: Rc::downgrade(&self.queue),
            }
        }

        fn is_live(&self, id: u64) -> bool {
            self.queue.borrow().live.contains(&id)
        }

        pub fn pending_frames(&self) -> usize {
            self.queue.borrow().frames.len()
        }

        pub fn active_intervals(&self) -> usize {
            self.queue.borrow().intervals.len()
        }

        /// Fires every frame callback queued before this call.
        pub fn run_frame(&self, timestamp: f64) {
            let frames = std::mem::take(&mut self.queue.borrow_mut().frames);
            for (id, callback) in frames {
                if !self.queue.borrow_mut().live.remove(&id) {
                    continue;
                }
                callback(timestamp);
            }
        }

        /// Lets `millis` pass for every registered interval.
        pub fn advance(&self, millis: u32) {
            let intervals = self.queue.borrow().intervals.clone();
            for (id, period, callback) in intervals {
                for _ in 0..millis / period.max(1) {
                    if !self.is_live(id) {
                        break;
                    }
                    (*callback.borrow_mut())();
                }
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> ManualHandle {
            let id = {
                let mut queue = self.queue.borrow_mut();
                let id = queue.register();
                queue.frames.push((id, callback));
                id
            };
            self.handle(id)
        }

        fn every(&self, millis: u32, callback: Box<dyn FnMut()>) -> ManualHandle {
            let id = {
                let mut queue = self.queue.borrow_mut();
                let id = queue.register();
                queue.intervals.push((id, millis, Rc::new(RefCell::new(callback))));
                id
            };
            self.handle(id)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::manual::ManualScheduler;
    use super::Scheduler;

    #[test]
    fn dropped_frame_never_fires() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));

        let handle = scheduler.request_frame(Box::new({
            let fired = fired.clone();
            move |_| fired.set(fired.get() + 1)
        }));
        drop(handle);
        scheduler.run_frame(16.0);

        assert_eq!(fired.get(), 0);
        assert_eq!(scheduler.pending_frames(), 0);
    }

    #[test]
    fn interval_runs_until_dropped() {
        let scheduler = ManualScheduler::default();
        let ticks = Rc::new(Cell::new(0));

        let handle = scheduler.every(100, Box::new({
            let ticks = ticks.clone();
            move || ticks.set(ticks.get() + 1)
        }));
        scheduler.advance(450);
        assert_eq!(ticks.get(), 4);

        drop(handle);
        scheduler.advance(1_000);
        assert_eq!(ticks.get(), 4);
        assert_eq!(scheduler.active_intervals(), 0);
    }
}
