//! BoardStore - Shared Point Sequence
//!
//! ## Responsibilities
//!
//! - Hold the ordered in-memory collection of board points
//! - Append-only growth, whole-board clear (no per-point delete or update)
//! - Snapshot reads for the WebAPI

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// A drawable mark on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub color: String,
}

/// BoardStore instance
///
/// Insertion order is preserved; `points()` returns a snapshot taken under
/// the read lock, so concurrent adds never produce a torn view.
pub struct BoardStore {
    points: RwLock<Vec<Point>>,
}

impl BoardStore {
    /// Create new empty BoardStore
    pub fn new() -> Self {
        Self {
            points: RwLock::new(Vec::new()),
        }
    }

    /// Append a point to the end of the board
    pub async fn add(&self, point: Point) {
        let mut points = self.points.write().await;
        points.push(point);
        tracing::debug!(total = points.len(), "Point added to board");
    }

    /// Snapshot of all points, insertion order
    pub async fn points(&self) -> Vec<Point> {
        let points = self.points.read().await;
        points.clone()
    }

    /// Remove all points (no-op on an empty board)
    pub async fn clear(&self) {
        let mut points = self.points.write().await;
        let removed = points.len();
        points.clear();
        tracing::debug!(removed, "Board cleared");
    }

    /// Current point count
    pub async fn len(&self) -> usize {
        let points = self.points.read().await;
        points.len()
    }

    /// True when the board holds no points
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}
