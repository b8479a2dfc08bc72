use std::f64::consts::PI;

use crate::draw::Painter;
use crate::model::{Point, Rgb};

pub const TRAIL_LINE_WIDTH: f64 = 5.0;
pub const FOOTPRINT_RADIUS: f64 = 30.0;
pub const FOOTPRINT_LINE_WIDTH: f64 = 10.0;
pub const CROSSHAIR_LINE_WIDTH: f64 = 1.0;

/// Which overlays an active trail draws on top of its path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailStyle {
    pub footprint: bool,
    pub crosshair: bool,
}

impl Default for TrailStyle {
    fn default() -> Self {
        Self {
            footprint: true,
            crosshair: true,
        }
    }
}

/// Recorded path of one finger from touch-down to release or cancel.
#[derive(Clone, Debug, PartialEq)]
pub struct FingerTrail {
    path: Vec<Point>,
    color: Rgb,
    active: bool,
    cancelled: bool,
}

impl FingerTrail {
    pub fn new(start: Point, color: Rgb) -> Self {
        Self {
            path: vec![start],
            color,
            active: true,
            cancelled: false,
        }
    }

    #[cfg(test)]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    #[cfg(test)]
    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn last_point(&self) -> Point {
        // path is never empty
        self.path[self.path.len() - 1]
    }

    /// Appends a sample. Returns false if the trail is no longer active.
    pub fn push(&mut self, p: Point) -> bool {
        if !self.active {
            return false;
        }
        self.path.push(p);
        true
    }

    /// Normal lift-off.
    pub fn end(&mut self) {
        self.active = false;
    }

    /// Abnormal termination; the trail turns red.
    pub fn cancel(&mut self) {
        self.active = false;
        self.cancelled = true;
        self.color = Rgb::RED;
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
        painter.set_source_rgb(self.color);
        self.draw_trail(painter);
        if !self.active {
            return;
        }
        if style.footprint {
            self.draw_footprint(painter);
        }
        if style.crosshair {
            painter.set_source_rgb(Rgb::GRAY);
            self.draw_crosshair(painter, width, height);
        }
    }

    fn draw_trail(&self, painter: &mut impl Painter) {
        painter.set_line_width(TRAIL_LINE_WIDTH);
        let first = self.path[0];
        painter.move_to(first.x, first.y);
        for p in &self.path {
            painter.line_to(p.x, p.y);
        }
        painter.stroke();
    }

    fn draw_footprint(&self, painter: &mut impl Painter) {
        let p = self.last_point();
        painter.set_line_width(FOOTPRINT_LINE_WIDTH);
        painter.arc(p.x, p.y, FOOTPRINT_RADIUS, 0.0, 2.0 * PI);
        painter.stroke();
    }

    fn draw_crosshair(&self, painter: &mut impl Painter, width: f64, height: f64) {
        let p = self.last_point();
        painter.set_line_width(CROSSHAIR_LINE_WIDTH);
        painter.move_to(p.x, 0.0);
        painter.line_to(p.x, height);
        painter.move_to(0.0, p.y);
        painter.line_to(width, p.y);
        painter.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::recording::{Cmd, RecordingPainter};

    fn trail() -> FingerTrail {
        let mut t = FingerTrail::new(Point::new(10.0, 10.0), Rgb::new(0.2, 0.4, 0.6));
        t.push(Point::new(20.0, 10.0));
        t
    }

    #[test]
    fn test_new_trail_has_single_point() {
        let t = FingerTrail::new(Point::new(1.0, 2.0), Rgb::WHITE);
        assert_eq!(t.path(), &[Point::new(1.0, 2.0)]);
        assert!(t.is_active());
        assert!(!t.is_cancelled());
    }

    #[test]
    fn test_end_keeps_color() {
        let mut t = trail();
        t.end();
        assert!(!t.is_active());
        assert!(!t.is_cancelled());
        assert_eq!(t.color(), Rgb::new(0.2, 0.4, 0.6));
    }

    #[test]
    fn test_cancel_forces_red() {
        let mut t = trail();
        t.cancel();
        assert!(!t.is_active());
        assert!(t.is_cancelled());
        assert_eq!(t.color(), Rgb::RED);
    }

    #[test]
    fn test_inactive_trail_rejects_points() {
        let mut t = trail();
        t.end();
        assert!(!t.push(Point::new(99.0, 99.0)));
        assert_eq!(t.path().len(), 2);
    }

    #[test]
    fn test_active_render_draws_path_footprint_and_crosshair() {
        let t = trail();
        let mut p = RecordingPainter::default();
        t.render(&mut p, 200.0, 100.0);
        assert_eq!(
            p.cmds,
            vec![
                Cmd::Color(Rgb::new(0.2, 0.4, 0.6)),
                Cmd::LineWidth(5.0),
                Cmd::MoveTo(10.0, 10.0),
                Cmd::LineTo(10.0, 10.0),
                Cmd::LineTo(20.0, 10.0),
                Cmd::Stroke,
                Cmd::LineWidth(10.0),
                Cmd::Arc { x: 20.0, y: 10.0, radius: 30.0 },
                Cmd::Stroke,
                Cmd::Color(Rgb::GRAY),
                Cmd::LineWidth(1.0),
                Cmd::MoveTo(20.0, 0.0),
                Cmd::LineTo(20.0, 100.0),
                Cmd::MoveTo(0.0, 10.0),
                Cmd::LineTo(200.0, 10.0),
                Cmd::Stroke,
            ]
        );
    }

    #[test]
    fn test_inactive_render_draws_only_path() {
        let finishers: [fn(&mut FingerTrail); 2] = [FingerTrail::end, FingerTrail::cancel];
        for finish in finishers {
            let mut t = trail();
            finish(&mut t);
            let mut p = RecordingPainter::default();
            t.render(&mut p, 200.0, 100.0);
            assert_eq!(p.arcs(), 0);
            assert_eq!(p.strokes(), 1);
            assert!(!p.used_color(Rgb::GRAY));
            assert!(!p.cmds.contains(&Cmd::LineWidth(CROSSHAIR_LINE_WIDTH)));
        }
    }

    #[test]
    fn test_style_can_hide_overlays() {
        let t = trail();
        let mut p = RecordingPainter::default();
        let style = TrailStyle {
            footprint: false,
            crosshair: true,
        };
        t.render_with(&mut p, 200.0, 100.0, style);
        assert_eq!(p.arcs(), 0);
        assert!(p.used_color(Rgb::GRAY));

        let mut p = RecordingPainter::default();
        let style = TrailStyle {
            footprint: true,
            crosshair: false,
        };
        t.render_with(&mut p, 200.0, 100.0, style);
        assert_eq!(p.arcs(), 1);
        assert!(!p.used_color(Rgb::GRAY));
    }
}
