//! Conversions between the RGB, HSL and HSV color models.
//!
//! Every function expects components that are already in range for their model
//! (see [ColorModel::normalize](crate::ColorModel::normalize)) and returns components
//! that are clamped and rounded to the precision of the target model:
//!
//! | Model | Components                                            |
//! |-------|-------------------------------------------------------|
//! | RGB   | red, green, blue in `0..=255`, integers               |
//! | HSL   | hue in `0..=360` (integer), saturation and lightness in `0..=100` (one decimal) |
//! | HSV   | hue in `0..=360` (integer), saturation and value in `0..=100` (one decimal)     |

/// Clamp `value` to `min..=max` and round it to `precision` decimal places
///
/// NaN becomes `min`.
#[must_use]
pub(crate) fn normalize(value: f64, min: f64, max: f64, precision: i32) -> f64 {
    if value.is_nan() {
        return min;
    }

    let factor = 10_f64.powi(precision);
    let rounded = (value.clamp(min, max) * factor).round() / factor;

    // Turns -0.0 into 0.0
    rounded + 0.
}

fn to_rgb_range(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    (
        normalize(r * 255., 0., 255., 0),
        normalize(g * 255., 0., 255., 0),
        normalize(b * 255., 0., 255., 0),
    )
}

fn to_degrees_and_percent(h: f64, a: f64, b: f64) -> (f64, f64, f64) {
    (
        normalize(h * 360., 0., 360., 0),
        normalize(a * 100., 0., 100., 1),
        normalize(b * 100., 0., 100., 1),
    )
}

/// <https://www.w3.org/TR/css-color-3/#hsl-color>
#[must_use]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (r, g, b) = (r / 255., g / 255., b / 255.);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.;

    if max == min {
        // Achromatic
        return to_degrees_and_percent(0., 0., l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2. - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6. } else { 0. }
    } else if max == g {
        (b - r) / d + 2.
    } else {
        (r - g) / d + 4.
    };

    to_degrees_and_percent(h / 6., s, l)
}

/// <https://www.w3.org/TR/css-color-3/#hsl-color>
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let (h, s, l) = (h / 360., s / 100., l / 100.);

    if s == 0. {
        return to_rgb_range(l, l, l);
    }

    let q = if l < 0.5 { l * (1. + s) } else { l + s - l * s };
    let p = 2. * l - q;

    to_rgb_range(
        hue_to_rgb(p, q, h + 1. / 3.),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1. / 3.),
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0. {
        t += 1.;
    }
    if t > 1. {
        t -= 1.;
    }

    if t < 1. / 6. {
        p + (q - p) * 6. * t
    } else if t < 1. / 2. {
        q
    } else if t < 2. / 3. {
        p + (q - p) * (2. / 3. - t) * 6.
    } else {
        p
    }
}

#[must_use]
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (r, g, b) = (r / 255., g / 255., b / 255.);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let v = max;
    let s = if max == 0. { 0. } else { d / max };

    // The HSV hue keeps its own derivation, even where it agrees with the HSL one
    let h = if max == min {
        0.
    } else if max == r {
        ((g - b) / d + if g < b { 6. } else { 0. }) / 6.
    } else if max == g {
        ((b - r) / d + 2.) / 6.
    } else {
        ((r - g) / d + 4.) / 6.
    };

    to_degrees_and_percent(h, s, v)
}

#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let (h, s, v) = (h / 360., s / 100., v / 100.);

    let sector = (h * 6.).floor();
    let f = h * 6. - sector;
    let p = v * (1. - s);
    let q = v * (1. - f * s);
    let t = v * (1. - (1. - f) * s);

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    to_rgb_range(r, g, b)
}

#[must_use]
pub fn hsl_to_hsv(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let (h, s, l) = (h / 360., s / 100., l / 100.);

    let t = s * if l < 0.5 { l } else { 1. - l };
    let v = (l + t).clamp(0., 1.);
    let s = if v == 0. {
        0.
    } else {
        (2. * t / v).clamp(0., 1.)
    };

    to_degrees_and_percent(h, s, v)
}

#[must_use]
pub fn hsv_to_hsl(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let (h, s, v) = (h / 360., s / 100., v / 100.);

    let l = (v * (1. - s / 2.)).clamp(0., 1.);
    let s = if l == 0. || l == 1. {
        0.
    } else {
        ((v - l) / l.min(1. - l)).clamp(0., 1.)
    };

    to_degrees_and_percent(h, s, l)
}
