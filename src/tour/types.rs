//! Core types for the tour solver.

use crate::geom::Point;

/// Capability to report where a travel target is.
///
/// The solver is agnostic to what an item represents — a placement, a
/// feeder pick, a calibration target — it only ever asks for the location.
/// Implement this once per item type.
pub trait Locate {
    fn location(&self) -> Point;
}

impl Locate for Point {
    fn location(&self) -> Point {
        *self
    }
}

impl<T: Locate> Locate for &T {
    fn location(&self) -> Point {
        (**self).location()
    }
}

/// One element of the working tour: the item's canonical-millimeter
/// location plus its index in the caller's input list. The permutation is
/// represented purely by reordering these nodes; the stored index is used
/// only at the end to map the result back to caller items.
///
/// Plain-old-data so the hot loop copies and compares without indirection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourNode {
    pub point: Point,
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_locates_itself() {
        let p = Point::new(1.0, 2.0, 3.0);
        assert_eq!(p.location(), p);
        assert_eq!((&p).location(), p);
    }
}
