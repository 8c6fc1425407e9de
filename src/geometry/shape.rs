use crate::scene::config::{CornerRadius, ShapeId};
use kurbo::{BezPath, Circle, Point, RoundedRect};

// Flattening tolerance used when lowering arcs to bezier paths.
const PATH_TOLERANCE: f64 = 0.1;

/// Region of the canvas that text may occupy.
///
/// Offsets are relative to the canvas center; `font_scale` shrinks the base
/// font size for shapes with little interior room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeArea {
    /// Usable width in pixels.
    pub width: f64,
    /// Usable height in pixels.
    pub height: f64,
    /// Horizontal center offset from canvas center, in pixels.
    pub offset_x: f64,
    /// Vertical center offset from canvas center, in pixels.
    pub offset_y: f64,
    /// Font size multiplier in `(0, 1]`.
    pub font_scale: f64,
}

/// Resolved geometry for one render: an optional clip path plus the safe area.
///
/// Derived per render from the shape id and canvas dimensions; never persisted.
#[derive(Debug, Clone)]
pub struct ShapeDescriptor {
    /// Closed clip path restricting all drawing, or `None` for the full canvas.
    pub clip: Option<BezPath>,
    /// Where text may be laid out.
    pub safe_area: SafeArea,
}

/// Resolve a shape id against canvas dimensions.
///
/// The returned safe area never exceeds the canvas bounds, and any clip path
/// is closed. `corner_radius` is only consulted for [`ShapeId::Rounded`].
pub fn resolve_shape(
    shape: ShapeId,
    corner_radius: CornerRadius,
    width: u32,
    height: u32,
) -> ShapeDescriptor {
    let w = f64::from(width);
    let h = f64::from(height);
    let min_side = w.min(h);
    let (cx, cy) = (w / 2.0, h / 2.0);

    match shape {
        ShapeId::Rectangle => ShapeDescriptor {
            clip: None,
            safe_area: centered(w * 0.8, h * 0.8, 1.0),
        },
        ShapeId::Rounded => {
            let radius = corner_radius.radius_px(width, height);
            let rr = RoundedRect::new(0.0, 0.0, w, h, radius);
            ShapeDescriptor {
                clip: Some(to_bez_path(&rr)),
                safe_area: centered(w * 0.8, h * 0.8, 1.0),
            }
        }
        ShapeId::Circle => {
            let circle = Circle::new((cx, cy), min_side / 2.0);
            ShapeDescriptor {
                clip: Some(to_bez_path(&circle)),
                safe_area: centered(min_side * 0.7, min_side * 0.7, 0.9),
            }
        }
        ShapeId::Rhombus => ShapeDescriptor {
            clip: Some(polygon(&[
                Point::new(cx, 0.0),
                Point::new(w, cy),
                Point::new(cx, h),
                Point::new(0.0, cy),
            ])),
            safe_area: centered(w * 0.5, h * 0.5, 0.8),
        },
        ShapeId::Triangle => ShapeDescriptor {
            clip: Some(polygon(&[
                Point::new(cx, 0.0),
                Point::new(w, h),
                Point::new(0.0, h),
            ])),
            // The wide part of the triangle sits low, so the text block does too.
            safe_area: SafeArea {
                width: w * 0.6,
                height: h * 0.4,
                offset_x: 0.0,
                offset_y: h * 0.15,
                font_scale: 0.7,
            },
        },
        ShapeId::Hexagon => {
            let r = min_side / 2.0;
            let pts: Vec<Point> = (0..6)
                .map(|i| {
                    let angle = f64::from(i) * std::f64::consts::FRAC_PI_3;
                    Point::new(cx + r * angle.cos(), cy + r * angle.sin())
                })
                .collect();
            ShapeDescriptor {
                clip: Some(polygon(&pts)),
                safe_area: centered(min_side * 0.65, min_side * 0.65, 0.85),
            }
        }
        ShapeId::Star => {
            let outer = min_side / 2.0;
            let inner = outer * 0.4;
            // Ten alternating vertices, point 0 straight up.
            let pts: Vec<Point> = (0..10)
                .map(|i| {
                    let r = if i % 2 == 0 { outer } else { inner };
                    let angle =
                        -std::f64::consts::FRAC_PI_2 + f64::from(i) * std::f64::consts::PI / 5.0;
                    Point::new(cx + r * angle.cos(), cy + r * angle.sin())
                })
                .collect();
            ShapeDescriptor {
                clip: Some(polygon(&pts)),
                safe_area: centered(min_side * 0.35, min_side * 0.35, 0.6),
            }
        }
    }
}

fn centered(width: f64, height: f64, font_scale: f64) -> SafeArea {
    SafeArea {
        width,
        height,
        offset_x: 0.0,
        offset_y: 0.0,
        font_scale,
    }
}

fn to_bez_path(shape: &impl kurbo::Shape) -> BezPath {
    let mut path = BezPath::new();
    for el in shape.path_elements(PATH_TOLERANCE) {
        path.push(el);
    }
    path
}

fn polygon(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
        path.close_path();
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shape.rs"]
mod tests;
