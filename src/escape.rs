// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time iteration.
//!
//! Starting from z₀ the engine applies z ← f(z, c) until |z| reaches
//! the escape radius or the iteration cap runs out.  That is the whole
//! algorithm: a bounded loop with two exits.  The count at which the
//! orbit escaped is all the color mapping ever sees.
//!
//! An orbit that turns NaN can never satisfy |z| ≥ R, so it runs to the
//! cap and reports `EscapeTime::Bounded`, the same as a point inside
//! the set.

use crate::complex::Complex;
use crate::error::Error;
use crate::render::Params;

/// The result of iterating one point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EscapeTime {
    /// The orbit crossed the escape radius.
    Escaped {
        /// Steps taken before the orbit was outside; 0 if z₀ already was.
        iterations: u32,
        /// The cap the engine ran with.
        max_iterations: u32,
    },
    /// The orbit stayed inside for the whole run.
    Bounded,
}

impl EscapeTime {
    /// The escape step, if the orbit escaped.
    pub fn iterations(&self) -> Option<u32> {
        match *self {
            EscapeTime::Escaped { iterations, .. } => Some(iterations),
            EscapeTime::Bounded => None,
        }
    }

    /// True if the orbit escaped.
    pub fn escaped(&self) -> bool {
        self.iterations().is_some()
    }
}

/// A transformation applied to z before every step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Rectify {
    /// Leave z alone.
    Identity,
    /// Take the absolute value of each component, as the Burning Ship does.
    Absolute,
}

impl Rectify {
    fn apply(self, z: Complex) -> Complex {
        match self {
            Rectify::Identity => z,
            Rectify::Absolute => Complex::new(z.re.abs(), z.im.abs()),
        }
    }
}

/// The quadratic map, z² + c.
pub fn mandelbrot(z: Complex, c: Complex) -> Complex {
    z * z + c
}

/// The antiholomorphic map, z̄² + c.
pub fn tricorn(z: Complex, c: Complex) -> Complex {
    let z = z.conj();
    z * z + c
}

/// Iterates a map from a starting point until it escapes or the cap is hit.
#[derive(Copy, Clone, Debug)]
pub struct EscapeTimeEngine {
    max_iterations: u32,
    escape_radius: f64,
    rectify: Rectify,
}

impl EscapeTimeEngine {
    /// An engine that gives up after `max_iterations` steps and treats
    /// |z| ≥ `escape_radius` as escaped.
    pub fn new(max_iterations: u32, escape_radius: f64) -> Result<Self, Error> {
        if max_iterations == 0 {
            return Err(Error::NonPositiveIterations);
        }
        if !(escape_radius.is_finite() && escape_radius > 0.0) {
            return Err(Error::BadEscapeRadius(escape_radius));
        }
        Ok(EscapeTimeEngine {
            max_iterations,
            escape_radius,
            rectify: Rectify::Identity,
        })
    }

    /// Rectifies z before each application of the map.
    pub fn rectified(self, rectify: Rectify) -> Self {
        EscapeTimeEngine { rectify, ..self }
    }

    /// The iteration cap.
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Iterates `f` from `z0` with parameter `c`, escaping on |z| ≥ R.
    pub fn run<F>(&self, f: F, z0: Complex, c: Complex) -> EscapeTime
    where
        F: Fn(Complex, Complex) -> Complex,
    {
        let radius_sqr = self.escape_radius * self.escape_radius;
        self.run_until(f, z0, c, |z| z.norm_sqr() >= radius_sqr)
    }

    /// Iterates `f` from `z0` with parameter `c` until `escaped` holds.
    /// The predicate is tested on z₀ and after every step.
    pub fn run_until<F, P>(&self, f: F, z0: Complex, c: Complex, escaped: P) -> EscapeTime
    where
        F: Fn(Complex, Complex) -> Complex,
        P: Fn(Complex) -> bool,
    {
        if escaped(z0) {
            return self.escaped_at(0);
        }
        let mut z = z0;
        for k in 1..=self.max_iterations {
            z = f(self.rectify.apply(z), c);
            if escaped(z) {
                return self.escaped_at(k);
            }
        }
        EscapeTime::Bounded
    }

    fn escaped_at(&self, iterations: u32) -> EscapeTime {
        EscapeTime::Escaped {
            iterations,
            max_iterations: self.max_iterations,
        }
    }
}

// Params are validated when the plot is built, so this does not check again.
impl<'a> From<&'a Params> for EscapeTimeEngine {
    fn from(params: &'a Params) -> EscapeTimeEngine {
        EscapeTimeEngine {
            max_iterations: params.max_iterations,
            escape_radius: params.escape_radius,
            rectify: Rectify::Identity,
        }
    }
}
