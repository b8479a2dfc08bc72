//! Core data types for the multi-touch view.
//! Touch input as delivered by the host, plus the geometry and color types
//! the trails are built from.

use serde::{Deserialize, Serialize};

/// Opaque identifier of one finger's contact, stable from begin to release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TouchId(pub i32);

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// RGB color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 1.0, g: 1.0, b: 1.0 };
    /// Alert color forced onto cancelled trails.
    pub const RED: Rgb = Rgb { r: 1.0, g: 0.0, b: 0.0 };
    pub const GRAY: Rgb = Rgb { r: 0.5, g: 0.5, b: 0.5 };

    #[cfg(test)]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn random(rng: &mut impl RandomSource) -> Self {
        let r = rng.next_unit();
        let g = rng.next_unit();
        let b = rng.next_unit();
        Self { r, g, b }
    }

    pub fn to_css(self) -> String {
        let ch = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("rgb({},{},{})", ch(self.r), ch(self.g), ch(self.b))
    }
}

/// Source of uniformly distributed numbers in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Browser `Math.random()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchPhase {
    Begin,
    Update,
    End,
    Cancel,
}

impl TouchPhase {
    /// Maps a DOM touch event type (`touchstart`, ...) to a phase.
    pub fn from_dom_event(kind: &str) -> Option<Self> {
        match kind {
            "touchstart" => Some(TouchPhase::Begin),
            "touchmove" => Some(TouchPhase::Update),
            "touchend" => Some(TouchPhase::End),
            "touchcancel" => Some(TouchPhase::Cancel),
            _ => None,
        }
    }
}

/// One touch event for one contact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TouchInput {
    pub phase: TouchPhase,
    pub id: TouchId,
    pub pos: Point,
    /// Event timestamp in milliseconds.
    pub time: f64,
}

impl TouchInput {
    pub fn new(phase: TouchPhase, id: TouchId, x: f64, y: f64, time: f64) -> Self {
        Self {
            phase,
            id,
            pos: Point::new(x, y),
            time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_css_color_is_scaled_and_clamped() {
        assert_eq!(Rgb::RED.to_css(), "rgb(255,0,0)");
        assert_eq!(Rgb::GRAY.to_css(), "rgb(128,128,128)");
        assert_eq!(Rgb::new(1.5, -0.2, 0.0).to_css(), "rgb(255,0,0)");
    }

    #[test]
    fn test_random_color_draws_three_components() {
        let c = Rgb::random(&mut Fixed(0.25));
        assert_eq!(c, Rgb::new(0.25, 0.25, 0.25));
    }

    #[test]
    fn test_dom_event_names_map_to_phases() {
        assert_eq!(TouchPhase::from_dom_event("touchstart"), Some(TouchPhase::Begin));
        assert_eq!(TouchPhase::from_dom_event("touchmove"), Some(TouchPhase::Update));
        assert_eq!(TouchPhase::from_dom_event("touchend"), Some(TouchPhase::End));
        assert_eq!(TouchPhase::from_dom_event("touchcancel"), Some(TouchPhase::Cancel));
        assert_eq!(TouchPhase::from_dom_event("mousedown"), None);
    }
}
