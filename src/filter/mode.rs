//! Mode keys: the selection-facing names for the built-in filters.

use crate::color::lms::Deficiency;
use crate::color::matrix::DEUTERANOPIA_SIM;
use crate::filter::library::{DEFAULT_SPECTRUM_EXPONENT, Filter};

/// Canonical mode keys accepted by [`parse_mode`], in display order.
pub const MODE_KEYS: [&str; 4] = ["identity", "toDeuteranopia", "spectrumShift", "daltonize"];

/// A user-selectable filter mode.
///
/// Modes map 1:1 to constructed [`Filter`]s. The active mode changes only on explicit selection
/// and is read by the pump once per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterMode {
    /// Show the feed unchanged.
    Identity,
    /// Simulate deuteranopic vision with the published linear matrix.
    ToDeuteranopia,
    /// Widen hue separation in the red-yellow band.
    SpectrumShift,
    /// Correct for the given deficiency via LMS error redistribution.
    Daltonize(Deficiency),
}

impl FilterMode {
    /// Construct the filter this mode names.
    pub fn build(self) -> Filter {
        match self {
            FilterMode::Identity => Filter::Identity,
            FilterMode::ToDeuteranopia => Filter::LinearMatrix(DEUTERANOPIA_SIM),
            FilterMode::SpectrumShift => Filter::SpectrumShift {
                exponent: DEFAULT_SPECTRUM_EXPONENT,
            },
            FilterMode::Daltonize(deficiency) => Filter::Daltonize(deficiency),
        }
    }

    /// The canonical selection key for this mode.
    pub const fn key(self) -> &'static str {
        match self {
            FilterMode::Identity => "identity",
            FilterMode::ToDeuteranopia => "toDeuteranopia",
            FilterMode::SpectrumShift => "spectrumShift",
            FilterMode::Daltonize(_) => "daltonize",
        }
    }
}

/// Parse a selection key into a mode.
///
/// Keys match case-insensitively after trimming. `daltonize` accepts an optional `:variant`
/// suffix (`daltonize:protanope`) and defaults to the deuteranope variant. Returns `None` for
/// unknown keys; the retain-previous policy for that case lives in
/// [`FilterRegistry::select_key`](crate::FilterRegistry::select_key).
pub fn parse_mode(key: &str) -> Option<FilterMode> {
    let key = key.trim().to_ascii_lowercase();
    let (head, variant) = match key.split_once(':') {
        Some((head, variant)) => (head.trim_end(), Some(variant.trim())),
        None => (key.as_str(), None),
    };

    if head == "daltonize" {
        let deficiency = match variant {
            None | Some("") => Deficiency::Deuteranope,
            Some("protanope") | Some("protan") => Deficiency::Protanope,
            Some("deuteranope") | Some("deutan") => Deficiency::Deuteranope,
            Some("tritanope") | Some("tritan") => Deficiency::Tritanope,
            Some(_) => return None,
        };
        return Some(FilterMode::Daltonize(deficiency));
    }

    // Only daltonize takes a variant suffix.
    if variant.is_some() {
        return None;
    }

    match head {
        "identity" | "original" => Some(FilterMode::Identity),
        "todeuteranopia" | "to_deuteranopia" | "to-deuteranopia" | "deuteranopia" => {
            Some(FilterMode::ToDeuteranopia)
        }
        "spectrumshift" | "spectrum_shift" | "spectrum-shift" => Some(FilterMode::SpectrumShift),
        _ => None,
    }
}
