//! Bresenham line traversal over grid cells.

use crate::core::GridCoord;

/// Iterator over the grid cells of a line segment, endpoints inclusive.
///
/// Integer Bresenham; cells are visited in order from `start` to `end`.
#[derive(Clone, Debug)]
pub struct BresenhamLine {
    current: GridCoord,
    end: GridCoord,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl BresenhamLine {
    /// Create a traversal from `start` to `end`.
    pub fn new(start: GridCoord, end: GridCoord) -> Self {
        let dx = (end.x - start.x).abs();
        let dy = -(end.y - start.y).abs();
        Self {
            current: start,
            end,
            dx,
            dy,
            sx: if start.x < end.x { 1 } else { -1 },
            sy: if start.y < end.y { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = GridCoord;

    fn next(&mut self) -> Option<GridCoord> {
        if self.done {
            return None;
        }
        let result = self.current;

        if self.current == self.end {
            self.done = true;
        } else {
            let e2 = 2 * self.err;
            if e2 >= self.dy {
                self.err += self.dy;
                self.current.x += self.sx;
            }
            if e2 <= self.dx {
                self.err += self.dx;
                self.current.y += self.sy;
            }
        }

        Some(result)
    }
}
