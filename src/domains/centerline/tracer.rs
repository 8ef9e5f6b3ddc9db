use super::classifier::BoundaryClassifier;
use super::normalizer::NormalizedFrame;
use super::types::{CandidateSet, Point};

/// Grid steps per axis.
pub const GRID_DIVISIONS: usize = 10;

/// First swept coordinate on both axes; skips the zero boundary of the frame.
pub const SWEEP_ORIGIN: f64 = 1.0;

/// Sweep coordinates `SWEEP_ORIGIN, SWEEP_ORIGIN + step, ...` strictly below `range`.
fn axis_samples(range: f64, step: f64) -> impl Iterator<Item = f64> {
    (0..)
        .map(move |k| SWEEP_ORIGIN + k as f64 * step)
        .take_while(move |v| *v < range)
}

/// Number of grid cells the sweep visits for `frame`; an upper bound on the candidates.
pub fn swept_cells(frame: &NormalizedFrame) -> usize {
    if frame.is_degenerate() || !frame.x_range.is_finite() || !frame.y_range.is_finite() {
        return 0;
    }
    let columns = axis_samples(frame.x_range, frame.x_range / GRID_DIVISIONS as f64).count();
    let rows = axis_samples(frame.y_range, frame.y_range / GRID_DIVISIONS as f64).count();
    columns * rows
}

/// Sweep the normalized extent row by row and emit a point wherever the
/// predicted side changes. Points come back in absolute coordinates.
pub fn trace_boundary<C>(classifier: &C, frame: &NormalizedFrame) -> CandidateSet
where
    C: BoundaryClassifier + ?Sized,
{
    let mut candidates = CandidateSet::new();

    if frame.is_degenerate() || !frame.x_range.is_finite() || !frame.y_range.is_finite() {
        tracing::debug!(
            x_range = frame.x_range,
            y_range = frame.y_range,
            "zero extent, skipping grid sweep"
        );
        return candidates;
    }

    let step_x = frame.x_range / GRID_DIVISIONS as f64;
    let step_y = frame.y_range / GRID_DIVISIONS as f64;

    for y in axis_samples(frame.y_range, step_y) {
        let mut previous = None;
        for x in axis_samples(frame.x_range, step_x) {
            let current = classifier.predict(Point::new(x, y));
            let before = match previous {
                Some(side) => side,
                None => classifier.predict(Point::new(x - step_x, y - step_y)),
            };
            if current != before {
                candidates.push(frame.to_absolute(Point::new(x, y)));
            }
            previous = Some(current);
        }
    }

    tracing::debug!(candidates = candidates.len(), "grid sweep finished");
    candidates
}
