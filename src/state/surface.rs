use crate::draw::Painter;
use crate::model::{JsRandom, RandomSource, Rgb, TouchId, TouchInput, TouchPhase};
use crate::state::finger::{FingerTrail, TrailStyle};
use crate::util::clog;

/// Gap (ms) after which a new touch may reset a fully released canvas.
pub const DEFAULT_IDLE_RESET_MS: f64 = 100.0;

/// Tracks every finger on the canvas, keyed by touch identifier.
///
/// Trails stay visible after release and are only dropped in bulk: when a
/// new touch begins after an idle gap and no finger is still down.
#[derive(Debug)]
pub struct TouchSurface<R: RandomSource = JsRandom> {
    // Insertion order is render order.
    fingers: Vec<(TouchId, FingerTrail)>,
    last_event_time: f64,
    idle_reset_ms: f64,
    redraw_requested: bool,
    rng: R,
}

impl Default for TouchSurface<JsRandom> {
    fn default() -> Self {
        Self::with_rng(DEFAULT_IDLE_RESET_MS, JsRandom)
    }
}

impl<R: RandomSource> TouchSurface<R> {
    pub fn with_rng(idle_reset_ms: f64, rng: R) -> Self {
        Self {
            fingers: Vec::new(),
            last_event_time: 0.0,
            idle_reset_ms,
            redraw_requested: false,
            rng,
        }
    }

    pub fn handle_touch_event(&mut self, ev: &TouchInput) {
        match ev.phase {
            TouchPhase::Begin => {
                if ev.time - self.last_event_time > self.idle_reset_ms {
                    self.remove_inactive_fingers();
                }
                let trail = FingerTrail::new(ev.pos, Rgb::random(&mut self.rng));
                match self.get_mut(ev.id) {
                    Some(existing) => *existing = trail,
                    None => self.fingers.push((ev.id, trail)),
                }
            }
            TouchPhase::Update | TouchPhase::End | TouchPhase::Cancel => {
                match self.get_mut(ev.id) {
                    Some(trail) if !trail.is_active() => {
                        clog(&format!("touch {:?}: {:?} after release ignored", ev.id, ev.phase));
                    }
                    Some(trail) => match ev.phase {
                        TouchPhase::Update => {
                            trail.push(ev.pos);
                        }
                        TouchPhase::End => trail.end(),
                        _ => trail.cancel(),
                    },
                    None => clog(&format!("touch {:?}: {:?} for unknown finger ignored", ev.id, ev.phase)),
                }
            }
        }
        self.last_event_time = ev.time;
        self.redraw_requested = true;
    }

    /// Clears every trail, but only if none of them is still active.
    pub fn remove_inactive_fingers(&mut self) {
        if self.fingers.iter().any(|(_, t)| t.is_active()) {
            return;
        }
        if !self.fingers.is_empty() {
            clog(&format!("idle reset: dropping {} trails", self.fingers.len()));
        }
        self.fingers.clear();
    }

    /// Drops all trails unconditionally.
    pub fn clear(&mut self) {
        self.fingers.clear();
        self.redraw_requested = true;
    }

    #[cfg(test)]
    pub fn render(&self, painter: &mut impl Painter, width: f64, height: f64) {
        self.render_with(painter, width, height, TrailStyle::default());
    }

    pub fn render_with(
        &self,
        painter: &mut impl Painter,
        width: f64,
        height: f64,
        style: TrailStyle,
    ) {
        painter.set_source_rgb(Rgb::WHITE);
        painter.paint(width, height);
        for (_, trail) in &self.fingers {
            trail.render_with(painter, width, height, style);
        }
    }

    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Returns whether a redraw was requested since the last call.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::replace(&mut self.redraw_requested, false)
    }

    #[cfg(test)]
    pub fn get(&self, id: TouchId) -> Option<&FingerTrail> {
        self.fingers.iter().find(|(k, _)| *k == id).map(|(_, t)| t)
    }

    fn get_mut(&mut self, id: TouchId) -> Option<&mut FingerTrail> {
        self.fingers.iter_mut().find(|(k, _)| *k == id).map(|(_, t)| t)
    }

    #[cfg(test)]
    pub fn trails(&self) -> impl Iterator<Item = (TouchId, &FingerTrail)> {
        self.fingers.iter().map(|(k, t)| (*k, t))
    }

    pub fn len(&self) -> usize {
        self.fingers.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.fingers.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.fingers.iter().filter(|(_, t)| t.is_active()).count()
    }

    pub fn cancelled_count(&self) -> usize {
        self.fingers.iter().filter(|(_, t)| t.is_cancelled()).count()
    }

    #[cfg(test)]
    pub fn last_event_time(&self) -> f64 {
        self.last_event_time
    }
}
