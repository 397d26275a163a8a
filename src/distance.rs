//! This file provides the weighted squared-distance primitive that every Euclidean-style metric is
//! built on: treat two colors as points, take the difference on each axis, square it, optionally
//! weight it, and sum. Note that the result is *squared*: no square root is ever taken, so that
//! scores stay comparable across metrics that are naturally expressed as sums of squares (CIE94,
//! CIEDE2000, CMC). Note also that this is not perceptually accurate in any space but CIELAB, and
//! only approximately there.

use thiserror::Error;

/// An error in calling [`squared_distance`] with vectors that don't line up. This is always a bug
/// in the caller, never bad user input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
pub enum DistanceError {
    /// The two points, or a point and its weights, have a different number of coordinates.
    #[error("dimension mismatch: {first} coordinates against {second}")]
    DimensionMismatch {
        /// Length of the first point.
        first: usize,
        /// Length of the second point or of the weights.
        second: usize,
    },
}

fn sum_of_squares<T: Copy + Into<f64>>(first: &[T], second: &[T], weights: Option<&[T]>) -> f64 {
    let diffs = first
        .iter()
        .zip(second)
        .map(|(&f, &s)| (f.into() - s.into()).powi(2));
    match weights {
        Some(weights) => diffs.zip(weights).map(|(d, &w)| w.into() * d).sum(),
        None => diffs.sum(),
    }
}

/// Returns the sum of squared differences of two points of any length, each multiplied by the
/// matching weight if weights are given (otherwise every weight is 1). Works with any coordinate
/// type that converts losslessly into `f64`, so integer RGB primaries and floating-point CIELAB
/// coordinates go through the same code.
///
/// # Errors
/// Returns [`DistanceError::DimensionMismatch`] if `first` and `second` have different lengths, or
/// if `weights` is given and has a different length than `first`.
///
/// # Example
/// ```
/// # use flossverter::distance::squared_distance;
/// let dist = squared_distance(&[1., 2.], &[-3., -2.], None).unwrap();
/// assert!((dist - 32.).abs() <= 1e-10);
/// let weighted = squared_distance(&[10u8, 0, 0], &[0u8, 0, 1], Some(&[2u8, 4, 3][..])).unwrap();
/// assert!((weighted - 203.).abs() <= 1e-10);
/// ```
pub fn squared_distance<T: Copy + Into<f64>>(
    first: &[T],
    second: &[T],
    weights: Option<&[T]>,
) -> Result<f64, DistanceError> {
    if first.len() != second.len() {
        return Err(DistanceError::DimensionMismatch {
            first: first.len(),
            second: second.len(),
        });
    }
    if let Some(w) = weights {
        if w.len() != first.len() {
            return Err(DistanceError::DimensionMismatch {
                first: first.len(),
                second: w.len(),
            });
        }
    }
    Ok(sum_of_squares(first, second, weights))
}

/// Like [`squared_distance`], but for fixed-size arrays, where the lengths are known to agree and so
/// the call can't fail. This is what the metrics use.
pub fn squared_distance_array<T: Copy + Into<f64>, const N: usize>(
    first: &[T; N],
    second: &[T; N],
    weights: Option<&[T; N]>,
) -> f64 {
    sum_of_squares(first, second, weights.map(|w| &w[..]))
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_unweighted_distances() {
        let cases: Vec<(Vec<f64>, Vec<f64>, f64)> = vec![
            (vec![2.3, 1.5, 6.], vec![0., 1.1, -5.], 11.245),
            (vec![1., 2.], vec![-3., -2.], 5.657),
            (vec![1.], vec![-9.], 10.),
            (vec![1., 1., 1.], vec![1., 1., 1.], 0.),
            (vec![], vec![], 0.),
        ];
        for (first, second, expected) in cases {
            let dist = squared_distance(&first, &second, None).unwrap();
            assert!((dist.sqrt() - expected).abs() <= 1e-3);
        }
    }

    #[test]
    fn test_integer_coordinates() {
        // differences are taken after widening, so u8 can't underflow
        let dist = squared_distance(&[0u8, 255, 10], &[255u8, 0, 10], None).unwrap();
        assert_eq!(dist, 2. * 255. * 255.);
    }

    #[test]
    fn test_weights() {
        let dist = squared_distance(&[1i32, 1, 1], &[0, 0, 0], Some(&[3, 4, 2][..])).unwrap();
        assert_eq!(dist, 9.);
        let arr = squared_distance_array(&[1i32, 1, 1], &[0, 0, 0], Some(&[3, 4, 2]));
        assert_eq!(arr, dist);
    }

    #[test]
    fn test_identity_and_symmetry() {
        let p = [12.5, -3.25, 80.];
        let q = [-40., 7., 0.125];
        assert_eq!(squared_distance_array(&p, &p, None), 0.);
        assert_eq!(
            squared_distance_array(&p, &q, None),
            squared_distance_array(&q, &p, None)
        );
    }

    #[test]
    fn test_dimension_mismatch() {
        assert_eq!(
            squared_distance(&[1., 2., 3.], &[1., 2.], None),
            Err(DistanceError::DimensionMismatch { first: 3, second: 2 })
        );
        assert_eq!(
            squared_distance(&[1., 2.], &[1., 2.], Some(&[1., 1., 1.][..])),
            Err(DistanceError::DimensionMismatch { first: 2, second: 3 })
        );
    }
}
