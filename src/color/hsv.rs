//! RGB <-> HSV conversion over the 8-bit channel domain.
//!
//! Hue is normalized to `[0, 1)` and saturation to `[0, 1]`; value keeps the 0-255 scale of the
//! input, so a round-trip needs no rescaling. The conversion is total: achromatic pixels take
//! hue 0 and black takes saturation 0 instead of dividing by zero.

/// Convert an RGB triple (0-255 range) to `(hue, saturation, value)`.
///
/// When two channels tie for the maximum, the red sector wins over green, and green over blue.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    if delta == 0.0 {
        return (0.0, s, v);
    }

    let h = if max == r {
        ((g - b) / delta + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    (h, s, v)
}

/// Convert `(hue, saturation, value)` back to an RGB triple in the 0-255 range.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
