//! Drawing primitives: the op buffer a tile render fills, and the sink
//! protocol consumers replay it through.
//!
//! # Conventions
//!
//! The origin is the tile's top-left corner, +x right, +y down. Angles are
//! radians from the +x axis increasing toward +y (clockwise on screen). An
//! arc with `counterclockwise: false` sweeps toward increasing angles,
//! matching canvas `arc()` semantics.

use std::fmt;

use glam::DVec2;

/// Packed RGB color, `0xRRGGBB`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xffffff);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// One drawing command.
///
/// `Rect` and `RoundedRect` are composites: [`Path::replay`] routes them
/// through [`PathSink::rect`] / [`PathSink::rounded_rect`], whose default
/// implementations decompose into the six primitive commands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathOp {
    MoveTo(DVec2),
    LineTo(DVec2),
    Arc {
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    },
    Rect {
        origin: DVec2,
        width: f64,
        height: f64,
    },
    RoundedRect {
        origin: DVec2,
        width: f64,
        height: f64,
        radius: f64,
    },
    BeginFill(Color),
    EndFill,
    SetLineStyle {
        width: f64,
        color: Color,
        alpha: f64,
    },
}

impl fmt::Display for PathOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathOp::MoveTo(to) => write!(f, "move_to x={} y={}", to.x, to.y),
            PathOp::LineTo(to) => write!(f, "line_to x={} y={}", to.x, to.y),
            PathOp::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                counterclockwise,
            } => write!(
                f,
                "arc cx={} cy={} r={} start={} end={} ccw={}",
                center.x, center.y, radius, start_angle, end_angle, counterclockwise
            ),
            PathOp::Rect {
                origin,
                width,
                height,
            } => write!(f, "rect x={} y={} w={} h={}", origin.x, origin.y, width, height),
            PathOp::RoundedRect {
                origin,
                width,
                height,
                radius,
            } => write!(
                f,
                "rounded_rect x={} y={} w={} h={} r={}",
                origin.x, origin.y, width, height, radius
            ),
            PathOp::BeginFill(color) => write!(f, "begin_fill color={color}"),
            PathOp::EndFill => write!(f, "end_fill"),
            PathOp::SetLineStyle {
                width,
                color,
                alpha,
            } => write!(f, "set_line_style width={width} color={color} alpha={alpha}"),
        }
    }
}

/// Ordered buffer of [`PathOp`]s produced by one tile render.
///
/// `Display` prints one op per line, which the snapshot tests rely on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    ops: Vec<PathOp>,
}

impl Path {
    pub fn new() -> Self {
        Path { ops: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Path {
            ops: Vec::with_capacity(capacity),
        }
    }

    /// Drop all ops, keeping the allocation.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn move_to(&mut self, to: DVec2) {
        self.ops.push(PathOp::MoveTo(to));
    }

    pub fn line_to(&mut self, to: DVec2) {
        self.ops.push(PathOp::LineTo(to));
    }

    pub fn arc(
        &mut self,
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    ) {
        self.ops.push(PathOp::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            counterclockwise,
        });
    }

    pub fn rect(&mut self, origin: DVec2, width: f64, height: f64) {
        self.ops.push(PathOp::Rect {
            origin,
            width,
            height,
        });
    }

    pub fn rounded_rect(&mut self, origin: DVec2, width: f64, height: f64, radius: f64) {
        self.ops.push(PathOp::RoundedRect {
            origin,
            width,
            height,
            radius,
        });
    }

    pub fn begin_fill(&mut self, color: Color) {
        self.ops.push(PathOp::BeginFill(color));
    }

    pub fn end_fill(&mut self) {
        self.ops.push(PathOp::EndFill);
    }

    pub fn set_line_style(&mut self, width: f64, color: Color, alpha: f64) {
        self.ops.push(PathOp::SetLineStyle {
            width,
            color,
            alpha,
        });
    }

    /// Feed every op to `sink`, in order.
    pub fn replay<S: PathSink + ?Sized>(&self, sink: &mut S) {
        for op in &self.ops {
            match *op {
                PathOp::MoveTo(to) => sink.move_to(to.x, to.y),
                PathOp::LineTo(to) => sink.line_to(to.x, to.y),
                PathOp::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    counterclockwise,
                } => sink.arc(center.x, center.y, radius, start_angle, end_angle, counterclockwise),
                PathOp::Rect {
                    origin,
                    width,
                    height,
                } => sink.rect(origin.x, origin.y, width, height),
                PathOp::RoundedRect {
                    origin,
                    width,
                    height,
                    radius,
                } => sink.rounded_rect(origin.x, origin.y, width, height, radius),
                PathOp::BeginFill(color) => sink.begin_fill(color),
                PathOp::EndFill => sink.end_fill(),
                PathOp::SetLineStyle {
                    width,
                    color,
                    alpha,
                } => sink.set_line_style(width, color, alpha),
            }
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            writeln!(f, "{op}")?;
        }
        Ok(())
    }
}

/// Consumer protocol for replaying a [`Path`].
///
/// Implement the six required methods to target a canvas, an SVG writer,
/// a tessellator or a test recorder. `rect` and `rounded_rect` come with
/// default decompositions; override them when the target draws rectangles
/// natively.
pub trait PathSink {
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    );
    fn begin_fill(&mut self, color: Color);
    fn end_fill(&mut self);
    fn set_line_style(&mut self, width: f64, color: Color, alpha: f64);

    /// Axis-aligned rectangle: a move and four lines back to the start.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.move_to(x, y);
        self.line_to(x + width, y);
        self.line_to(x + width, y + height);
        self.line_to(x, y + height);
        self.line_to(x, y);
    }

    /// Rounded rectangle: four edges and four quarter arcs, all sweeping
    /// toward increasing angles, starting after the top-left corner.
    fn rounded_rect(&mut self, x: f64, y: f64, width: f64, height: f64, radius: f64) {
        use std::f64::consts::{FRAC_PI_2, PI, TAU};

        let r = radius.min(width / 2.0).min(height / 2.0);
        self.move_to(x + r, y);
        self.line_to(x + width - r, y);
        self.arc(x + width - r, y + r, r, 1.5 * PI, TAU, false);
        self.line_to(x + width, y + height - r);
        self.arc(x + width - r, y + height - r, r, 0.0, FRAC_PI_2, false);
        self.line_to(x + r, y + height);
        self.arc(x + r, y + height - r, r, FRAC_PI_2, PI, false);
        self.line_to(x, y + r);
        self.arc(x + r, y + r, r, PI, 1.5 * PI, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every sink call for decomposition checks.
    #[derive(Debug, Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Call {
        Move(f64, f64),
        Line(f64, f64),
        Arc(f64, f64, f64, f64, f64, bool),
        Fill(Color),
        End,
        Style(f64, Color, f64),
    }

    impl PathSink for Recorder {
        fn move_to(&mut self, x: f64, y: f64) {
            self.calls.push(Call::Move(x, y));
        }
        fn line_to(&mut self, x: f64, y: f64) {
            self.calls.push(Call::Line(x, y));
        }
        fn arc(
            &mut self,
            cx: f64,
            cy: f64,
            radius: f64,
            start_angle: f64,
            end_angle: f64,
            counterclockwise: bool,
        ) {
            self.calls.push(Call::Arc(cx, cy, radius, start_angle, end_angle, counterclockwise));
        }
        fn begin_fill(&mut self, color: Color) {
            self.calls.push(Call::Fill(color));
        }
        fn end_fill(&mut self) {
            self.calls.push(Call::End);
        }
        fn set_line_style(&mut self, width: f64, color: Color, alpha: f64) {
            self.calls.push(Call::Style(width, color, alpha));
        }
    }

    /// Point on an arc at the given angle.
    fn arc_point(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
        (cx + r * angle.cos(), cy + r * angle.sin())
    }

    fn assert_close(a: (f64, f64), b: (f64, f64)) {
        const EPSILON: f64 = 1e-9;
        assert!(
            (a.0 - b.0).abs() < EPSILON && (a.1 - b.1).abs() < EPSILON,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn ops_keep_push_order() {
        let mut path = Path::new();
        path.move_to(DVec2::new(1.0, 2.0));
        path.line_to(DVec2::new(3.0, 4.0));
        path.end_fill();
        assert_eq!(
            path.ops(),
            &[
                PathOp::MoveTo(DVec2::new(1.0, 2.0)),
                PathOp::LineTo(DVec2::new(3.0, 4.0)),
                PathOp::EndFill,
            ]
        );
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut path = Path::new();
        path.end_fill();
        assert!(!path.is_empty());
        path.clear();
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
    }

    #[test]
    fn replay_maps_primitives_one_to_one() {
        let mut path = Path::new();
        path.set_line_style(4.0, Color::BLACK, 1.0);
        path.move_to(DVec2::new(1.0, 2.0));
        path.line_to(DVec2::new(3.0, 4.0));
        path.arc(DVec2::new(5.0, 6.0), 7.0, 0.0, 1.0, true);
        path.begin_fill(Color::WHITE);
        path.end_fill();

        let mut recorder = Recorder::default();
        path.replay(&mut recorder);
        assert_eq!(
            recorder.calls,
            vec![
                Call::Style(4.0, Color::BLACK, 1.0),
                Call::Move(1.0, 2.0),
                Call::Line(3.0, 4.0),
                Call::Arc(5.0, 6.0, 7.0, 0.0, 1.0, true),
                Call::Fill(Color::WHITE),
                Call::End,
            ]
        );
    }

    #[test]
    fn rect_decomposes_into_a_closed_outline() {
        let mut path = Path::new();
        path.rect(DVec2::new(10.0, 20.0), 30.0, 40.0);

        let mut recorder = Recorder::default();
        path.replay(&mut recorder);
        assert_eq!(
            recorder.calls,
            vec![
                Call::Move(10.0, 20.0),
                Call::Line(40.0, 20.0),
                Call::Line(40.0, 60.0),
                Call::Line(10.0, 60.0),
                Call::Line(10.0, 20.0),
            ]
        );
    }

    #[test]
    fn rounded_rect_decomposition_is_continuous() {
        let mut path = Path::new();
        path.rounded_rect(DVec2::new(0.0, 0.0), 100.0, 80.0, 10.0);

        let mut recorder = Recorder::default();
        path.replay(&mut recorder);
        assert_eq!(recorder.calls.len(), 9); // move + 4 lines + 4 arcs

        // Walk the calls checking each arc picks up where the pen is and
        // hands off to the next line.
        let mut pen = (f64::NAN, f64::NAN);
        for call in &recorder.calls {
            match *call {
                Call::Move(x, y) | Call::Line(x, y) => pen = (x, y),
                Call::Arc(cx, cy, r, start, end, _) => {
                    assert_close(arc_point(cx, cy, r, start), pen);
                    pen = arc_point(cx, cy, r, end);
                }
                _ => panic!("unexpected call in rounded rect"),
            }
        }
        // The last arc closes back onto the starting point.
        assert_close(pen, (10.0, 0.0));
    }

    #[test]
    fn rounded_rect_radius_is_clamped() {
        let mut path = Path::new();
        path.rounded_rect(DVec2::new(0.0, 0.0), 10.0, 40.0, 50.0);

        let mut recorder = Recorder::default();
        path.replay(&mut recorder);
        // Radius clamps to half the short edge, so the first line starts
        // at the horizontal midpoint.
        assert_eq!(recorder.calls[0], Call::Move(5.0, 0.0));
    }

    #[test]
    fn sinks_can_override_rect_handling() {
        struct NativeRects {
            rects: usize,
            primitives: usize,
        }
        impl PathSink for NativeRects {
            fn move_to(&mut self, _: f64, _: f64) {
                self.primitives += 1;
            }
            fn line_to(&mut self, _: f64, _: f64) {
                self.primitives += 1;
            }
            fn arc(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64, _: bool) {
                self.primitives += 1;
            }
            fn begin_fill(&mut self, _: Color) {}
            fn end_fill(&mut self) {}
            fn set_line_style(&mut self, _: f64, _: Color, _: f64) {}
            fn rect(&mut self, _: f64, _: f64, _: f64, _: f64) {
                self.rects += 1;
            }
            fn rounded_rect(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64) {
                self.rects += 1;
            }
        }

        let mut path = Path::new();
        path.rect(DVec2::new(0.0, 0.0), 1.0, 1.0);
        path.rounded_rect(DVec2::new(0.0, 0.0), 4.0, 4.0, 1.0);

        let mut sink = NativeRects {
            rects: 0,
            primitives: 0,
        };
        path.replay(&mut sink);
        assert_eq!(sink.rects, 2);
        assert_eq!(sink.primitives, 0);
    }

    // ==================== Display ====================

    #[test]
    fn op_display_formats() {
        assert_eq!(
            PathOp::MoveTo(DVec2::new(1.0, 2.5)).to_string(),
            "move_to x=1 y=2.5"
        );
        assert_eq!(
            PathOp::BeginFill(Color(0x00ff00)).to_string(),
            "begin_fill color=#00ff00"
        );
        assert_eq!(
            PathOp::SetLineStyle {
                width: 4.0,
                color: Color::BLACK,
                alpha: 1.0
            }
            .to_string(),
            "set_line_style width=4 color=#000000 alpha=1"
        );
        assert_eq!(
            PathOp::Arc {
                center: DVec2::new(70.0, 70.0),
                radius: 20.0,
                start_angle: 0.0,
                end_angle: 1.5,
                counterclockwise: false
            }
            .to_string(),
            "arc cx=70 cy=70 r=20 start=0 end=1.5 ccw=false"
        );
    }

    #[test]
    fn path_display_is_one_op_per_line() {
        let mut path = Path::new();
        path.begin_fill(Color::WHITE);
        path.end_fill();
        assert_eq!(path.to_string(), "begin_fill color=#ffffff\nend_fill\n");
    }
}
