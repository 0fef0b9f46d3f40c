use crate::schedule::Scheduler;

/// How long a word stays fully visible.
pub const DISPLAY_MS: u32 = 2200;
/// Length of the fade-out before the next word appears.
pub const FADE_MS: u32 = 500;
/// Scheduler resolution. Both phase lengths are multiples of it.
pub const TICK_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Fading,
}

impl Phase {
    fn duration_ms(self) -> u32 {
        match self {
            Phase::Visible => DISPLAY_MS,
            Phase::Fading => FADE_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordCycle {
    len: usize,
    index: usize,
    phase: Phase,
    elapsed_in_phase_ms: u32,
}

impl WordCycle {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            phase: Phase::Visible,
            elapsed_in_phase_ms: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase() == Phase::Visible
    }

    /// What the page shows: the current word and whether it is faded in.
    pub fn frame(&self) -> (usize, bool) {
        (self.index(), self.is_visible())
    }

    /// Runs the machine forward. Several transitions can happen in one call
    /// if `elapsed_ms` spans them.
    pub fn advance(&mut self, elapsed_ms: u32) {
        if self.len == 0 {
            return;
        }
        let mut remaining = elapsed_ms;
        loop {
            let left_in_phase = self.phase.duration_ms() - self.elapsed_in_phase_ms;
            if remaining < left_in_phase {
                self.elapsed_in_phase_ms += remaining;
                return;
            }
            remaining -= left_in_phase;
            self.elapsed_in_phase_ms = 0;
            self.phase = match self.phase {
                Phase::Visible => Phase::Fading,
                Phase::Fading => {
                    self.index = (self.index + 1) % self.len;
                    Phase::Visible
                }
            };
        }
    }
}

/// Starts a cycle over `len` words on a repeating `TICK_MS` tick. `on_frame`
/// gets the first frame right away and then every change. Dropping the
/// returned handle stops the cycle.
pub fn run_word_cycle<S: Scheduler>(
    scheduler: &S,
    len: usize,
    on_frame: impl Fn((usize, bool)) + 'static,
) -> S::Handle {
    let mut cycle = WordCycle::new(len);
    let mut shown = cycle.frame();
    on_frame(shown);

    scheduler.every(
        TICK_MS,
        Box::new(move || {
            cycle.advance(TICK_MS);
            if cycle.frame() != shown {
                shown = cycle.frame();
                on_frame(shown);
            }
        }),
    )
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::schedule::manual::ManualScheduler;

    const PERIOD_MS: u32 = DISPLAY_MS + FADE_MS;
    const WORDS: [&str; 3] = ["Creators", "Startups", "Brands"];

    fn ticked(cycle: &mut WordCycle, total_ms: u32) {
        for _ in 0..total_ms / TICK_MS {
            cycle.advance(TICK_MS);
        }
    }

    #[test]
    fn starts_visible_on_first_word() {
        let cycle = WordCycle::new(WORDS.len());
        assert_eq!(cycle.index(), 0);
        assert!(cycle.is_visible());
    }

    #[test]
    fn fades_after_display_time() {
        let mut cycle = WordCycle::new(WORDS.len());
        ticked(&mut cycle, DISPLAY_MS - TICK_MS);
        assert!(cycle.is_visible());
        cycle.advance(TICK_MS);
        assert_eq!(cycle.phase(), Phase::Fading);
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn one_period_moves_to_next_word() {
        let mut cycle = WordCycle::new(WORDS.len());
        ticked(&mut cycle, PERIOD_MS);
        assert_eq!(WORDS[cycle.index()], "Startups");
        assert!(cycle.is_visible());
    }

    #[test]
    fn three_periods_wrap_around() {
        let mut cycle = WordCycle::new(WORDS.len());
        ticked(&mut cycle, 3 * PERIOD_MS);
        assert_eq!(cycle.index(), 0);
        assert!(cycle.is_visible());
    }

    #[test]
    fn large_steps_match_small_ticks() {
        let mut coarse = WordCycle::new(WORDS.len());
        let mut fine = WordCycle::new(WORDS.len());
        coarse.advance(7 * PERIOD_MS + 2_300);
        ticked(&mut fine, 7 * PERIOD_MS + 2_300);
        assert_eq!(coarse, fine);
        assert_eq!(coarse.index(), 1);
        assert_eq!(coarse.phase(), Phase::Fading);
    }

    #[test]
    fn empty_list_never_moves() {
        let mut cycle = WordCycle::new(0);
        cycle.advance(10 * PERIOD_MS);
        assert_eq!(cycle.index(), 0);
        assert!(cycle.is_visible());
    }

    #[test]
    fn frame_only_changes_on_transitions() {
        let mut cycle = WordCycle::new(WORDS.len());
        let mut changes = 0;
        let mut last = cycle.frame();
        for _ in 0..(2 * PERIOD_MS / TICK_MS) {
            cycle.advance(TICK_MS);
            if cycle.frame() != last {
                changes += 1;
                last = cycle.frame();
            }
        }
        // fade out + next word, twice
        assert_eq!(changes, 4);
        assert_eq!(last, (2, true));
    }

    #[test]
    fn scheduled_cycle_reports_each_change() {
        let scheduler = ManualScheduler::default();
        let frames = Rc::new(RefCell::new(Vec::new()));
        let _running = run_word_cycle(&scheduler, WORDS.len(), {
            let frames = frames.clone();
            move |frame| frames.borrow_mut().push(frame)
        });

        scheduler.advance(PERIOD_MS);
        assert_eq!(*frames.borrow(), vec![(0, true), (0, false), (1, true)]);
    }

    #[test]
    fn no_writes_after_cycle_is_dropped() {
        let scheduler = ManualScheduler::default();
        let frames = Rc::new(RefCell::new(Vec::new()));
        let running = run_word_cycle(&scheduler, WORDS.len(), {
            let frames = frames.clone();
            move |frame| frames.borrow_mut().push(frame)
        });
        scheduler.advance(DISPLAY_MS);
        let written = frames.borrow().len();

        drop(running);
        scheduler.advance(10 * PERIOD_MS);
        assert_eq!(frames.borrow().len(), written);
        assert_eq!(scheduler.active_intervals(), 0);
    }
}
