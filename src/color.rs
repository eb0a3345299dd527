// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Color mapping.  Every function here is total: any input, finite or
//! NaN, produces a color, and anything undefined gets `Hsb::NEUTRAL`.

use num::clamp;
use std::f64::consts::PI;

use crate::complex::Complex;
use crate::escape::EscapeTime;
use crate::render::Sample;
use crate::roots::Convergence;

const TAU: f64 = 2.0 * PI;

/// A color in hue/saturation/brightness space, every channel in [0, 1].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsb {
    /// Position on the color wheel; 0 and 1 are both red.
    pub hue: f64,
    /// 0 is grey, 1 is fully saturated.
    pub saturation: f64,
    /// 0 is black, 1 is full brightness.
    pub brightness: f64,
}

impl Hsb {
    /// The color of every undefined or non-terminating sample.
    pub const NEUTRAL: Hsb = Hsb {
        hue: 0.0,
        saturation: 0.0,
        brightness: 0.0,
    };

    /// Builds a color; saturation and brightness are clamped to [0, 1]
    /// and the hue is wrapped into [0, 1).
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Hsb {
        Hsb {
            hue: frac(hue),
            saturation: clamp(saturation, 0.0, 1.0),
            brightness: clamp(brightness, 0.0, 1.0),
        }
    }

    /// Converts to 8-bit red, green and blue.
    pub fn to_rgb(&self) -> [u8; 3] {
        let (h, s, v) = (frac(self.hue), self.saturation, self.brightness);
        if !(h.is_finite() && s.is_finite() && v.is_finite()) {
            return [0, 0, 0];
        }
        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);
        let (r, g, b) = match sector as u8 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        [channel(r), channel(g), channel(b)]
    }
}

#[inline]
fn channel(x: f64) -> u8 {
    (clamp(x, 0.0, 1.0) * 255.0).round() as u8
}

/// The fractional part, always in [0, 1).
#[inline]
fn frac(x: f64) -> f64 {
    let f = x - x.floor();
    // x.floor() can round x − floor(x) up to exactly 1 for tiny negatives.
    if f >= 1.0 {
        0.0
    } else {
        f
    }
}

/// Phase to hue, log-modulus contour bands to brightness:
/// hue = frac(arg z / 2π), brightness = 0.4 + 0.6·frac(ln|z|).
pub fn domain(z: Complex) -> Hsb {
    let modulus = z.logabs();
    if !z.is_finite() || !modulus.is_finite() {
        return Hsb::NEUTRAL;
    }
    Hsb::new(z.arg() / TAU, 1.0, 0.4 + 0.6 * frac(modulus))
}

/// `domain`, with a second, finer ripple of log₂|z| modulating the
/// brightness before it is clamped.
pub fn domain_enhanced(z: Complex) -> Hsb {
    let base = domain(z);
    if base == Hsb::NEUTRAL {
        return base;
    }
    let ripple = frac(z.logabs() / std::f64::consts::LN_2);
    Hsb::new(base.hue, 1.0, base.brightness * (0.75 + 0.5 * ripple))
}

/// hue = frac(iterations / 100), brightness = 1 − 0.6·iterations / max.
/// Orbits that never escaped are `Hsb::NEUTRAL`.
pub fn escape_time(result: &EscapeTime) -> Hsb {
    match *result {
        EscapeTime::Escaped {
            iterations,
            max_iterations,
        } if max_iterations > 0 => Hsb::new(
            f64::from(iterations % 100) / 100.0,
            1.0,
            1.0 - 0.6 * f64::from(iterations) / f64::from(max_iterations),
        ),
        _ => Hsb::NEUTRAL,
    }
}

fn root_hue(result: &Convergence) -> Option<(f64, f64)> {
    match *result {
        Convergence::Converged {
            root: Some(index),
            root_count,
            closeness,
            ..
        } if root_count > 0 => Some((index as f64 / root_count as f64, closeness)),
        Convergence::Converged {
            point, closeness, ..
        } => Some((point.arg() / TAU, closeness)),
        _ => None,
    }
}

/// Hue by the root reached, brightness equal to the closeness.
pub fn convergence_dark(result: &Convergence) -> Hsb {
    match root_hue(result) {
        Some((hue, closeness)) => Hsb::new(hue, 1.0, closeness),
        None => Hsb::NEUTRAL,
    }
}

/// Hue by the root reached, brightness 0.2 + 0.8·closeness.
pub fn convergence_light(result: &Convergence) -> Hsb {
    match root_hue(result) {
        Some((hue, closeness)) => Hsb::new(hue, 1.0, 0.2 + 0.8 * closeness),
        None => Hsb::NEUTRAL,
    }
}

/// One of four hues by the signs of Re z and Im z.  Anything on an axis
/// is `Hsb::NEUTRAL`, whatever the other component is.
pub fn quadrant(z: Complex) -> Hsb {
    if z.re == 0.0 || z.im == 0.0 || z.is_nan() {
        return Hsb::NEUTRAL;
    }
    let hue = match (z.re > 0.0, z.im > 0.0) {
        (true, true) => 0.0,
        (false, true) => 0.25,
        (false, false) => 0.5,
        (true, false) => 0.75,
    };
    Hsb::new(hue, 1.0, 1.0)
}

/// The default mapping for each kind of sample.
pub fn sample(_input: Complex, output: &Sample) -> Hsb {
    match *output {
        Sample::Value(z) => domain(z),
        Sample::Escape(ref e) => escape_time(e),
        Sample::Convergence(ref c) => convergence_light(c),
    }
}
