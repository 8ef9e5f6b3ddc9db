use super::classifier::{KernelSvm, SvmSettings};
use super::normalizer::{normalize, NormalizedFrame};
use super::orderer::order_path;
use super::tracer::trace_boundary;
use super::types::{CandidateSet, Marker, Path, Point, Side};
use crate::common::{DomainError, DomainResult};

/// Intermediate results of one observation, kept for debug consumers that
/// want to render the decision surface next to the candidates.
#[derive(Debug, Clone, Default)]
pub struct CenterlineTrace {
    pub frame: Option<NormalizedFrame>,
    pub classifier: Option<KernelSvm>,
    pub candidates: CandidateSet,
}

/// Per-observation centerline extraction. Holds only solver settings; every
/// call fits its own classifier.
#[derive(Debug, Clone, Default)]
pub struct TrackFinder {
    settings: SvmSettings,
}

impl TrackFinder {
    pub fn new(settings: SvmSettings) -> Self {
        Self { settings }
    }

    /// Normalize, fit and sweep. Fewer than two markers yield an empty trace
    /// without fitting anything.
    pub fn trace(&self, markers: &[Marker]) -> DomainResult<CenterlineTrace> {
        if markers.len() < 2 {
            tracing::debug!(markers = markers.len(), "too few markers, nothing to trace");
            return Ok(CenterlineTrace::default());
        }

        let first = markers[0].side;
        if markers.iter().all(|m| m.side == first) {
            return Err(DomainError::DegenerateLabelSet {
                side: first.as_wire(),
                count: markers.len(),
            });
        }

        let positions: Vec<Point> = markers.iter().map(|m| m.position).collect();
        let sides: Vec<Side> = markers.iter().map(|m| m.side).collect();
        let Some((frame, local)) = normalize(&positions) else {
            return Ok(CenterlineTrace::default());
        };

        let classifier = KernelSvm::fit(&local, &sides, &self.settings)?;
        let candidates = trace_boundary(&classifier, &frame);

        Ok(CenterlineTrace {
            frame: Some(frame),
            classifier: Some(classifier),
            candidates,
        })
    }

    /// Order a trace's candidates from the given vehicle position.
    pub fn order(&self, trace: CenterlineTrace, vehicle: Point) -> Path {
        order_path(trace.candidates, vehicle)
    }

    pub fn find_centerline(&self, markers: &[Marker], vehicle: Point) -> DomainResult<Path> {
        let trace = self.trace(markers)?;
        Ok(self.order(trace, vehicle))
    }
}
