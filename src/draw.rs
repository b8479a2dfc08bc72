// Drawing primitives the trails are rendered with.
use web_sys::CanvasRenderingContext2d;

use crate::model::Rgb;

/// Path-based 2D drawing context. A stroke consumes the current path.
pub trait Painter {
    fn set_source_rgb(&mut self, color: Rgb);
    fn set_line_width(&mut self, width: f64);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    fn stroke(&mut self);
    /// Fills the whole `width` x `height` area with the current color.
    fn paint(&mut self, width: f64, height: f64);
}

impl Painter for CanvasRenderingContext2d {
    fn set_source_rgb(&mut self, color: Rgb) {
        let css = color.to_css();
        self.set_stroke_style_str(&css);
        self.set_fill_style_str(&css);
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        CanvasRenderingContext2d::arc(self, x, y, radius, start, end).ok();
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
        self.begin_path();
    }

    fn paint(&mut self, width: f64, height: f64) {
        self.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
        self.fill_rect(0.0, 0.0, width, height);
        self.begin_path();
    }
}

#[cfg(test)]
pub mod recording {
    use super::Painter;
    use crate::model::Rgb;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Cmd {
        Color(Rgb),
        LineWidth(f64),
        MoveTo(f64, f64),
        LineTo(f64, f64),
        Arc { x: f64, y: f64, radius: f64 },
        Stroke,
        Paint(f64, f64),
    }

    #[derive(Default, Debug)]
    pub struct RecordingPainter {
        pub cmds: Vec<Cmd>,
    }

    impl RecordingPainter {
        pub fn arcs(&self) -> usize {
            self.cmds.iter().filter(|c| matches!(c, Cmd::Arc { .. })).count()
        }

        pub fn strokes(&self) -> usize {
            self.cmds.iter().filter(|c| matches!(c, Cmd::Stroke)).count()
        }

        pub fn used_color(&self, color: Rgb) -> bool {
            self.cmds.contains(&Cmd::Color(color))
        }
    }

    impl Painter for RecordingPainter {
        fn set_source_rgb(&mut self, color: Rgb) {
            self.cmds.push(Cmd::Color(color));
        }
        fn set_line_width(&mut self, width: f64) {
            self.cmds.push(Cmd::LineWidth(width));
        }
        fn move_to(&mut self, x: f64, y: f64) {
            self.cmds.push(Cmd::MoveTo(x, y));
        }
        fn line_to(&mut self, x: f64, y: f64) {
            self.cmds.push(Cmd::LineTo(x, y));
        }
        fn arc(&mut self, x: f64, y: f64, radius: f64, _start: f64, _end: f64) {
            self.cmds.push(Cmd::Arc { x, y, radius });
        }
        fn stroke(&mut self) {
            self.cmds.push(Cmd::Stroke);
        }
        fn paint(&mut self, width: f64, height: f64) {
            self.cmds.push(Cmd::Paint(width, height));
        }
    }
}
