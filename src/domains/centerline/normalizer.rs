use super::types::Point;

/// Local frame anchored at the lower-left corner of the marker bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedFrame {
    pub x_min: f64,
    pub y_min: f64,
    pub x_range: f64,
    pub y_range: f64,
}

impl NormalizedFrame {
    pub fn to_absolute(&self, local: Point) -> Point {
        Point::new(local.x + self.x_min, local.y + self.y_min)
    }

    pub fn to_local(&self, absolute: Point) -> Point {
        Point::new(absolute.x - self.x_min, absolute.y - self.y_min)
    }

    /// True when at least one axis has no extent to sweep.
    pub fn is_degenerate(&self) -> bool {
        !(self.x_range > 0.0 && self.y_range > 0.0)
    }
}

/// Translate positions so the minimum x and y become zero.
///
/// Returns `None` for an empty slice. Every returned coordinate is `>= 0`.
pub fn normalize(positions: &[Point]) -> Option<(NormalizedFrame, Vec<Point>)> {
    let first = positions.first()?;

    let (mut x_min, mut y_min) = (first.x, first.y);
    let (mut x_max, mut y_max) = (first.x, first.y);
    for p in positions.iter().skip(1) {
        x_min = x_min.min(p.x);
        y_min = y_min.min(p.y);
        x_max = x_max.max(p.x);
        y_max = y_max.max(p.y);
    }

    let frame = NormalizedFrame {
        x_min,
        y_min,
        x_range: x_max - x_min,
        y_range: y_max - y_min,
    };
    let local = positions.iter().map(|p| frame.to_local(*p)).collect();

    Some((frame, local))
}
