#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::IVec2;

/// The ternary occupancy state of a rectangular region of the map.
///
/// Assigned by [`classify`] from the pixels a region covers, and re-derived
/// whenever a [`crate::Quadtree`] subdivides.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Contains at least one passable pixel and no obstacle pixels.
    Passable,
    /// Contains at least one obstacle pixel and no passable pixels.
    Blocked,
    /// Contains both, neither, or is not yet further subdividable.
    Mixed,
}

impl State {
    /// Whether a cell with this state may be stepped through by a search.
    #[inline]
    #[must_use]
    pub fn is_passable(&self) -> bool {
        matches!(self, State::Passable)
    }
}

/// An axis-aligned rectangular region of the map, carrying an occupancy
/// [`State`]. The atomic element of both the [`crate::Grid`] and
/// [`crate::Quadtree`] decompositions.
///
/// Coordinates are pixel units with the origin at the top-left; `y` grows
/// downward. `w` and `h` are always strictly positive.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    state: State,
}

impl Cell {
    /// Construct a new cell. Panics if `w` or `h` is not strictly positive.
    #[inline]
    #[must_use]
    pub fn new(x: i32, y: i32, w: i32, h: i32, state: State) -> Self {
        assert!(w > 0 && h > 0, "Cell width and height must be positive");
        Self { x, y, w, h, state }
    }

    #[inline]
    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    #[must_use]
    pub fn w(&self) -> i32 {
        self.w
    }

    #[inline]
    #[must_use]
    pub fn h(&self) -> i32 {
        self.h
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// The center point of this cell, using integer division.
    #[inline]
    #[must_use]
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Whether `(px, py)` falls within this cell: `x <= px < x+w && y <= py < y+h`.
    #[inline]
    #[must_use]
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    /// Whether `point` falls within this cell.
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: IVec2) -> bool {
        self.contains(point.x, point.y)
    }

    /// The top-left corner, as a point.
    #[inline]
    #[must_use]
    pub fn point(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// The exclusive bottom-right corner (`x + w`, `y + h`).
    #[inline]
    #[must_use]
    pub fn end_point(&self) -> IVec2 {
        IVec2::new(self.x + self.w, self.y + self.h)
    }

    #[inline]
    pub(crate) fn with_state(self, state: State) -> Self {
        Self { state, ..self }
    }
}

/// A row-major RGB pixel buffer, supplied by an external image decoder.
///
/// The core crate never performs file I/O; this type is simply the shape of
/// pixel data the [`crate::Grid`] and [`crate::Quadtree`] builders consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl PixelBuffer {
    /// Construct a buffer from a row-major `width * height` vector of RGB pixels.
    ///
    /// Panics if `pixels.len() != width * height`.
    #[must_use]
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Self {
        assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize),
            "pixel buffer length does not match width * height"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Construct a buffer filled uniformly with `color`.
    #[must_use]
    pub fn filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        Self::new(width, height, vec![color; (width as usize) * (height as usize)])
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: [u8; 3]) {
        let w = self.width as usize;
        self.pixels[(y as usize) * w + (x as usize)] = color;
    }

    /// Classify the `w x h` sub-rectangle starting at `(x, y)` against the two
    /// reference colors.
    ///
    /// A pixel matching neither `passable` nor `blocked` counts as neither; a
    /// rectangle containing only such pixels classifies as [`State::Mixed`]
    /// (conservative), per the classifier's single responsibility for
    /// inspecting raw pixels.
    #[must_use]
    pub fn classify(&self, x: i32, y: i32, w: i32, h: i32, passable: [u8; 3], blocked: [u8; 3]) -> State {
        let mut any_passable = false;
        let mut any_blocked = false;
        for row in y..(y + h) {
            for col in x..(x + w) {
                let p = self.get(col as u32, row as u32);
                if p == passable {
                    any_passable = true;
                } else if p == blocked {
                    any_blocked = true;
                }
                if any_passable && any_blocked {
                    return State::Mixed;
                }
            }
        }
        match (any_passable, any_blocked) {
            (true, false) => State::Passable,
            (false, true) => State::Blocked,
            _ => State::Mixed,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const PASSABLE: [u8; 3] = [255, 255, 255];
    const BLOCKED: [u8; 3] = [0, 0, 0];
    const OTHER: [u8; 3] = [128, 128, 128];

    #[test]
    fn test_cell_center_and_contains() {
        let c = Cell::new(10, 20, 4, 6, State::Passable);
        assert_eq!(c.center(), IVec2::new(12, 23));
        assert!(c.contains(10, 20));
        assert!(c.contains(13, 25));
        assert!(!c.contains(14, 20));
        assert!(!c.contains(10, 26));
        assert!(!c.contains(9, 20));
    }

    #[test]
    #[should_panic]
    fn test_cell_requires_positive_extent() {
        Cell::new(0, 0, 0, 4, State::Passable);
    }

    #[test]
    fn test_classify_all_passable() {
        let buf = PixelBuffer::filled(4, 4, PASSABLE);
        assert_eq!(buf.classify(0, 0, 4, 4, PASSABLE, BLOCKED), State::Passable);
    }

    #[test]
    fn test_classify_all_blocked() {
        let buf = PixelBuffer::filled(4, 4, BLOCKED);
        assert_eq!(buf.classify(0, 0, 4, 4, PASSABLE, BLOCKED), State::Blocked);
    }

    #[test]
    fn test_classify_mixed_on_both_colors() {
        let mut buf = PixelBuffer::filled(4, 4, PASSABLE);
        buf.set(0, 0, BLOCKED);
        assert_eq!(buf.classify(0, 0, 4, 4, PASSABLE, BLOCKED), State::Mixed);
    }

    #[test]
    fn test_classify_neither_color_is_mixed() {
        let buf = PixelBuffer::filled(4, 4, OTHER);
        assert_eq!(buf.classify(0, 0, 4, 4, PASSABLE, BLOCKED), State::Mixed);
    }

    #[test]
    fn test_classify_sub_rect() {
        let mut buf = PixelBuffer::filled(8, 8, PASSABLE);
        for y in 4..8 {
            for x in 4..8 {
                buf.set(x, y, BLOCKED);
            }
        }
        assert_eq!(buf.classify(0, 0, 4, 4, PASSABLE, BLOCKED), State::Passable);
        assert_eq!(buf.classify(4, 4, 4, 4, PASSABLE, BLOCKED), State::Blocked);
        assert_eq!(buf.classify(0, 0, 8, 8, PASSABLE, BLOCKED), State::Mixed);
    }
}
