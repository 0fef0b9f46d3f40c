use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use yew::functional::Reducible;

use crate::schedule::Scheduler;

/// Page sections in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Top,
    Services,
    Work,
    Testimonials,
    Cta,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Top,
        SectionId::Services,
        SectionId::Work,
        SectionId::Testimonials,
        SectionId::Cta,
    ];

    /// Sections that fade in the first time they scroll into view.
    pub const REVEALABLE: [SectionId; 4] = [
        SectionId::Services,
        SectionId::Work,
        SectionId::Testimonials,
        SectionId::Cta,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Top => "top",
            SectionId::Services => "services",
            SectionId::Work => "work",
            SectionId::Testimonials => "testimonials",
            SectionId::Cta => "cta",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|section| section.dom_id() == id)
    }

    pub fn theme_class(self) -> String {
        format!("theme-{}", self.dom_id())
    }
}

/// Sections that have been seen at least once. There is no way to remove an
/// entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealMap {
    revealed: BTreeSet<SectionId>,
}

impl RevealMap {
    /// Returns true only the first time a section is revealed.
    pub fn reveal(&mut self, section: SectionId) -> bool {
        self.revealed.insert(section)
    }

    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.revealed.contains(&section)
    }
}

pub enum RevealAction {
    Intersected(SectionId),
}

impl Reducible for RevealMap {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let RevealAction::Intersected(section) = action;
        if self.is_revealed(section) {
            return self;
        }
        let mut next = (*self).clone();
        next.reveal(section);
        next.into()
    }
}

/// The section nearest the middle of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveTheme(pub SectionId);

impl Default for ActiveTheme {
    fn default() -> Self {
        ActiveTheme(SectionId::ALL[0])
    }
}

pub enum ThemeAction {
    Nearest(SectionId),
}

impl Reducible for ActiveTheme {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let ThemeAction::Nearest(section) = action;
        if self.0 == section {
            return self;
        }
        ActiveTheme(section).into()
    }
}

/// Picks the section whose vertical midpoint is closest to `viewport_center`.
/// `None` centers are sections missing from the document; they are skipped.
/// Ties keep the earliest section.
pub fn nearest_section<I>(centers: I, viewport_center: f64) -> Option<SectionId>
where
    I: IntoIterator<Item = (SectionId, Option<f64>)>,
{
    let mut best: Option<(SectionId, f64)> = None;
    for (section, center) in centers {
        let Some(center) = center else { continue };
        let distance = (center - viewport_center).abs();
        if distance.is_nan() {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((section, distance)),
        }
    }
    best.map(|(section, _)| section)
}

/// Collapses a burst of scroll events into one recomputation per frame.
#[derive(Debug, Default)]
pub struct ScrollGate {
    pending: bool,
}

impl ScrollGate {
    /// True when the caller should schedule a frame.
    pub fn try_schedule(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }
}

/// Runs `work` on the next frame after a trigger, at most once per frame.
/// After `cancel` nothing queued runs and further triggers are ignored.
pub struct FrameThrottle<S: Scheduler> {
    scheduler: S,
    gate: Rc<RefCell<ScrollGate>>,
    pending: RefCell<Option<S::Handle>>,
    work: Rc<dyn Fn()>,
}

impl<S: Scheduler> FrameThrottle<S> {
    pub fn new(scheduler: S, work: impl Fn() + 'static) -> Self {
        Self {
            scheduler,
            gate: Rc::new(RefCell::new(ScrollGate::default())),
            pending: RefCell::new(None),
            work: Rc::new(work),
        }
    }

    pub fn trigger(&self) {
        if !self.gate.borrow_mut().try_schedule() {
            return;
        }
        let gate = self.gate.clone();
        let work = self.work.clone();
        let handle = self.scheduler.request_frame(Box::new(move |_| {
            gate.borrow_mut().complete();
            work();
        }));
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        // Leave the gate closed so a late event cannot queue another frame.
        self.gate.borrow_mut().pending = true;
        self.pending.borrow_mut().take();
    }
}
