//! 3x3 color matrices for linear RGB transforms.

/// A 3x3 matrix describing a linear RGB -> RGB transform.
///
/// Row-major: row `i` produces output channel `i`. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorMatrix(pub [[f64; 3]; 3]);

/// Published deuteranopia (green-deficient) simulation matrix for 8-bit RGB.
pub const DEUTERANOPIA_SIM: ColorMatrix = ColorMatrix([
    [0.43, 0.72, -0.15],
    [0.34, 0.57, -0.09],
    [-0.02, 0.03, 0.80],
]);

impl ColorMatrix {
    /// The identity transform.
    pub const fn identity() -> Self {
        Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Multiply this matrix by an RGB triplet.
    ///
    /// No clamping: callers decide whether the result must be folded back into the channel's
    /// valid range.
    pub fn apply(&self, [r, g, b]: [f64; 3]) -> [f64; 3] {
        let m = &self.0;
        [
            m[0][0] * r + m[0][1] * g + m[0][2] * b,
            m[1][0] * r + m[1][1] * g + m[1][2] * b,
            m[2][0] * r + m[2][1] * g + m[2][2] * b,
        ]
    }

    /// Compose two transforms; `a.mul(&b)` applies `b` first, then `a`.
    pub fn mul(&self, other: &ColorMatrix) -> ColorMatrix {
        let mut out = [[0.0f64; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.0[i][k] * other.0[k][j];
                }
            }
        }
        ColorMatrix(out)
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::identity()
    }
}
