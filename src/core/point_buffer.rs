use std::collections::HashMap;

use crate::core::Point;

/// Hit-test index over the points of the most recent draw pass.
///
/// Pixel space is divided into square cells whose side equals the plotted
/// point footprint (`2 * half_size`). A point is stored under the cell nearest
/// to its center, so lookups are a single key derivation. When two points share
/// a cell the later one wins, matching draw order.
#[derive(Debug, Clone)]
pub struct PointBuffer {
    half_size: u32,
    cells: HashMap<(i64, i64), Point>,
}

impl PointBuffer {
    #[must_use]
    pub fn new(half_size: u32) -> Self {
        Self {
            half_size: half_size.max(1),
            cells: HashMap::new(),
        }
    }

    #[must_use]
    pub fn half_size(&self) -> u32 {
        self.half_size
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn put_point(&mut self, point: Point) {
        if let Some(key) = self.cell_key(point.x, point.y) {
            self.cells.insert(key, point);
        }
    }

    #[must_use]
    pub fn get_point(&self, x: f64, y: f64) -> Option<&Point> {
        self.cell_key(x, y).and_then(|key| self.cells.get(&key))
    }

    pub fn reset(&mut self) {
        self.cells.clear();
    }

    fn cell_key(&self, x: f64, y: f64) -> Option<(i64, i64)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let cell_size = 2.0 * f64::from(self.half_size);
        Some((
            (x / cell_size).round() as i64,
            (y / cell_size).round() as i64,
        ))
    }
}
