//! The LMS cone space: the intermediate space for simulating dichromatic vision.
//!
//! All coefficients are the published daltonization reference set; they are not derived from a
//! physical model and must not be "improved".

use crate::color::matrix::ColorMatrix;

/// RGB -> LMS cone response.
pub const RGB_TO_LMS: ColorMatrix = ColorMatrix([
    [17.8824, 43.5161, 4.11935],
    [3.45565, 27.1554, 3.86714],
    [0.0299566, 0.184309, 1.46709],
]);

/// LMS -> RGB, the fixed inverse of [`RGB_TO_LMS`].
pub const LMS_TO_RGB: ColorMatrix = ColorMatrix([
    [0.0809444479, -0.130504409, 0.116721066],
    [-0.0102485335, 0.0540193266, -0.113614708],
    [-0.000365296938, -0.00412161469, 0.693511405],
]);

/// A dichromatic color vision deficiency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deficiency {
    /// Red-weak vision (L cone deficit).
    Protanope,
    /// Green-weak vision (M cone deficit); the most common dichromacy.
    Deuteranope,
    /// Blue-weak vision (S cone deficit).
    Tritanope,
}

impl Deficiency {
    /// All variants, in wire-key order.
    pub const ALL: [Deficiency; 3] = [
        Deficiency::Protanope,
        Deficiency::Deuteranope,
        Deficiency::Tritanope,
    ];

    /// The fixed LMS-space simulation matrix for this deficiency.
    pub const fn simulation_matrix(self) -> ColorMatrix {
        match self {
            Deficiency::Protanope => ColorMatrix([
                [0.0, 2.02344, -2.52581],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ]),
            Deficiency::Deuteranope => ColorMatrix([
                [1.0, 0.0, 0.0],
                [0.494207, 0.0, 1.24827],
                [0.0, 0.0, 1.0],
            ]),
            Deficiency::Tritanope => ColorMatrix([
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [-0.395913, 0.801109, 0.0],
            ]),
        }
    }

    /// The wire key for this variant (`daltonize:<key>`).
    pub const fn key(self) -> &'static str {
        match self {
            Deficiency::Protanope => "protanope",
            Deficiency::Deuteranope => "deuteranope",
            Deficiency::Tritanope => "tritanope",
        }
    }
}
