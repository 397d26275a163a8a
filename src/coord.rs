//! This module contains a struct, [`Coord`], that models a point in 3D space. Every
//! color type in [`colors`](crate::colors) projects onto one, so that the Euclidean metrics can be
//! written once in terms of points instead of once per color space.

use crate::distance::squared_distance_array;

/// A point in 3D space. `Coord` has three axes, denoted `x`, `y`, and `z`, and the distinction
/// between them is completely conventional. Any color that converts to a `Coord` matches its
/// components with these axes in the order of the letters in its name: for example, `CIELABColor`
/// maps to a coordinate such that `l` is on the x-axis, `a` is on the y-axis, and `b` is on the
/// z-axis.
///
/// # Example
/// ```
/// # use flossverter::coord::Coord;
/// let point1 = Coord{x: 0., y: 0., z: -1.};
/// let point2 = Coord{x: 2., y: 3., z: 5.};
/// assert!((point1.squared_distance(&point2) - 49.).abs() <= 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Coord {
    /// The axes as an array, in order.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// The squared Euclidean distance between two points: the sum of squares of differences in
    /// each axis. This is the CIE76 delta E, squared, when both points are CIELAB colors. In any
    /// other space it is a poor analogue of perceptual difference; use one of the
    /// [`metrics`](crate::metrics) for that.
    pub fn squared_distance(&self, other: &Coord) -> f64 {
        squared_distance_array(&self.to_array(), &other.to_array(), None)
    }
}

impl From<[f64; 3]> for Coord {
    fn from(c: [f64; 3]) -> Coord {
        Coord {
            x: c[0],
            y: c[1],
            z: c[2],
        }
    }
}

impl From<Coord> for [f64; 3] {
    fn from(c: Coord) -> [f64; 3] {
        c.to_array()
    }
}
