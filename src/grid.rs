use egui::{Pos2, pos2};

/// Quantizes freehand click points onto a square grid.
///
/// Terminal centers never go through here so wires always end exactly on a
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct GridSnapper {
    pub size: f32,
}

impl Default for GridSnapper {
    fn default() -> Self {
        Self { size: 10.0 }
    }
}

impl GridSnapper {
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    /// Round `value` to the nearest multiple of the grid size
    pub fn snap(&self, value: f32) -> f32 {
        if self.size <= 0.0 {
            return value;
        }
        (value / self.size).round() * self.size
    }

    pub fn snap_point(&self, p: Pos2) -> Pos2 {
        pos2(self.snap(p.x), self.snap(p.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_nearest_multiple() {
        let g = GridSnapper::new(10.0);
        assert_eq!(g.snap(0.0), 0.0, "origin stays put");
        assert_eq!(g.snap(4.9), 0.0, "rounds down below half");
        assert_eq!(g.snap(5.0), 10.0, "half rounds up");
        assert_eq!(g.snap(123.4), 120.0, "large values");
        assert_eq!(g.snap(127.0), 130.0, "rounds up above half");
    }

    #[test]
    fn snap_point_applies_to_both_axes() {
        let g = GridSnapper::default();
        assert_eq!(g.snap_point(pos2(33.0, 47.0)), pos2(30.0, 50.0), "x and y snapped");
    }

    #[test]
    fn other_grid_sizes() {
        let g = GridSnapper::new(25.0);
        assert_eq!(g.snap(37.0), 25.0, "nearest 25");
        assert_eq!(g.snap(38.0), 50.0, "nearest 50");
    }

    #[test]
    fn degenerate_grid_is_identity() {
        let g = GridSnapper::new(0.0);
        assert_eq!(g.snap(13.7), 13.7, "no grid leaves value untouched");
    }
}
