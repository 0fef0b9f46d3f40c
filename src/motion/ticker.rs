//! Frame law for the continuous logo ticker.
//!
//! A row renders its items twice back to back, so the track is exactly two
//! group widths long. The offset only ever needs to travel one group width
//! before it can jump back by that width without any visible change.

/// Longest frame we account for. Anything longer (background tab, GC pause)
/// is treated as this many milliseconds.
pub const MAX_FRAME_MS: f64 = 64.0;

/// Speed factor while the pointer rests on an item.
pub const HOVER_MULTIPLIER: f64 = 0.28;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// +1 when the offset grows, -1 when it shrinks.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickerRowState {
    pub direction: Direction,
    pub base_speed_px_per_sec: f64,
    pub offset_px: f64,
    pub track_width_px: f64,
    pub hovering: bool,
    pub last_frame_ms: Option<f64>,
}

impl TickerRowState {
    pub fn new(direction: Direction, base_speed_px_per_sec: f64) -> Self {
        Self {
            direction,
            base_speed_px_per_sec,
            offset_px: seed_offset(direction, 0.0),
            track_width_px: 0.0,
            hovering: false,
            last_frame_ms: None,
        }
    }

    /// Takes a fresh width of one item group and re-seeds the row.
    pub fn measure(&mut self, width_px: f64) {
        let width_px = if width_px.is_finite() { width_px.max(0.0) } else { 0.0 };
        self.track_width_px = width_px;
        self.offset_px = seed_offset(self.direction, width_px);
        self.last_frame_ms = None;
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn multiplier(&self) -> f64 {
        if self.hovering {
            HOVER_MULTIPLIER
        } else {
            1.0
        }
    }

    /// Feeds an animation-frame timestamp. The first frame after a (re)seed
    /// only records the timestamp.
    pub fn frame(&mut self, now_ms: f64) {
        let elapsed_ms = match self.last_frame_ms {
            Some(last) => now_ms - last,
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);
        *self = advance(*self, elapsed_ms);
    }

    pub fn transform(&self) -> String {
        format!("translate3d({:.3}px, 0, 0)", self.offset_px)
    }
}

/// Offset at mount: a Left row starts at its home edge, a Right row starts one
/// group to the left so the second copy fills the viewport.
pub fn seed_offset(direction: Direction, width_px: f64) -> f64 {
    match direction {
        Direction::Left => 0.0,
        Direction::Right => -width_px,
    }
}

/// Clamp applied to the time between two frames.
pub fn clamp_elapsed(elapsed_ms: f64) -> f64 {
    if elapsed_ms.is_nan() {
        return 0.0;
    }
    elapsed_ms.clamp(0.0, MAX_FRAME_MS)
}

/// Moves the row by the distance covered in `elapsed_ms` and wraps it back
/// into its home window.
pub fn advance(state: TickerRowState, elapsed_ms: f64) -> TickerRowState {
    let elapsed_ms = clamp_elapsed(elapsed_ms);
    let delta_px = state.base_speed_px_per_sec * state.multiplier() * elapsed_ms / 1000.0;
    let moved = state.offset_px + state.direction.sign() * delta_px;

    TickerRowState {
        offset_px: wrap(state.direction, moved, state.track_width_px),
        ..state
    }
}

/// Keeps Left offsets in `(-w, 0]` and Right offsets in `[-w, 0)`.
/// A zero width (row not laid out yet) disables wrapping.
pub fn wrap(direction: Direction, offset_px: f64, width_px: f64) -> f64 {
    if width_px <= 0.0 {
        return offset_px;
    }
    match direction {
        Direction::Left if offset_px <= -width_px || offset_px > 0.0 => {
            let wrapped = offset_px % width_px;
            if wrapped > 0.0 {
                wrapped - width_px
            } else {
                wrapped
            }
        }
        Direction::Right if offset_px >= 0.0 || offset_px < -width_px => {
            let wrapped = offset_px % width_px;
            if wrapped >= 0.0 {
                wrapped - width_px
            } else {
                wrapped
            }
        }
        _ => offset_px,
    }
}
