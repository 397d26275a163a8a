//! This file provides the constants used for color space conversion: the sRGB to XYZ matrix, the
//! reference white the XYZ coordinates are normalized against, and the two CIE constants that split
//! the Lab nonlinearity into its cube-root and linear pieces. The matrix is kept as a function
//! returning a fresh `Matrix` so that it can be multiplied by value without any global state.

use rulinalg::matrix::Matrix;

/// The D65 white point under the 2° standard observer, normalized so that Y is 1 rather than 100.
pub const D65_WHITE_POINT: [f64; 3] = [0.95047, 1.0, 1.08883];

/// Below this value the Lab nonlinearity switches from a cube root to a line. Equal to 216 / 24389.
pub const CIE_EPSILON: f64 = 0.008856;

/// The slope of the linear segment of the Lab nonlinearity. Equal to 24389 / 27.
pub const CIE_KAPPA: f64 = 903.3;

/// Threshold on a normalized sRGB channel above which the power-law part of the sRGB transfer
/// function applies.
pub const SRGB_LINEAR_THRESHOLD: f64 = 0.04045;

/// The offset of the power-law part of the sRGB transfer function.
pub const SRGB_ALPHA: f64 = 0.055;

/// The exponent of the power-law part of the sRGB transfer function.
pub const SRGB_GAMMA: f64 = 2.4;

/// The slope of the linear part of the sRGB transfer function.
pub const SRGB_LINEAR_SLOPE: f64 = 12.92;

/// Linear sRGB to CIE 1931 XYZ, D65. Row-major, so multiplying it by a column vector of linear R, G,
/// and B gives X, Y, and Z in that order.
#[allow(non_snake_case)]
#[rustfmt::skip]
pub fn SRGB_TO_XYZ_MAT() -> Matrix<f64> {
    Matrix::new(
        3,
        3,
        vec![
            0.4124564, 0.3575761, 0.1804375,
            0.2126729, 0.7151522, 0.0721750,
            0.0193339, 0.1191920, 0.9503041,
        ],
    )
}
