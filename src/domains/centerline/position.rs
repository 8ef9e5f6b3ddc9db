use super::types::Point;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct PositionCell {
    position: Point,
    updates: u64,
}

/// Latest known vehicle position, shared between the location feed and the
/// centerline computation. Reads never wait for a fresher value.
#[derive(Debug, Clone, Default)]
pub struct VehiclePositionStore {
    inner: Arc<Mutex<PositionCell>>,
}

impl VehiclePositionStore {
    /// Starts at the origin until the first update arrives.
    pub fn new() -> Self {
        Self::default()
    }

    fn cell(&self) -> MutexGuard<'_, PositionCell> {
        // The cell is always written as a whole pair, so a poisoned guard is still consistent.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn update(&self, position: Point) {
        let mut cell = self.cell();
        cell.position = position;
        cell.updates += 1;
    }

    pub fn latest(&self) -> Point {
        self.cell().position
    }

    /// Number of updates received so far; zero means the origin default is still in place.
    pub fn update_count(&self) -> u64 {
        self.cell().updates
    }
}
