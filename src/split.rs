// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Split-complex numbers, `x + yj` with j² = +1.
//!
//! Unlike the complex numbers these have zero divisors: every point on
//! the light cone |x| = |y| multiplies against its conjugate to zero,
//! and so has no inverse.  Division by such a value is NaN, and the
//! split-complex plots rely on that NaN to draw the cone.
//!
//! The analytic functions go through the null basis.  Writing
//! u = x + y and v = x − y, any real function f extends as
//! f(x + yj) = ((f(u) + f(v))/2, (f(u) − f(v))/2).

use num::traits::{Inv, One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// `x + y·j`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SplitComplex {
    /// The real part.
    pub x: f64,
    /// The coefficient of j.
    pub y: f64,
}

impl SplitComplex {
    /// The undefined value.
    pub const NAN: SplitComplex = SplitComplex {
        x: f64::NAN,
        y: f64::NAN,
    };

    /// Builds `x + y·j`.
    #[inline]
    pub fn new(x: f64, y: f64) -> SplitComplex {
        SplitComplex { x, y }
    }

    /// `x − y·j`.
    pub fn conj(self) -> SplitComplex {
        SplitComplex::new(self.x, -self.y)
    }

    /// The Minkowski form z·z̄ = x² − y².  Zero on the light cone.
    pub fn modulus_squared(self) -> f64 {
        self.x * self.x - self.y * self.y
    }

    /// √|x² − y²|.
    pub fn abs(self) -> f64 {
        self.modulus_squared().abs().sqrt()
    }

    /// True when either part is NaN.
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// True on the light cone, where the value is a zero divisor.
    pub fn is_light_like(self) -> bool {
        self.modulus_squared() == 0.0
    }

    /// Multiplies both parts by a real.
    #[inline]
    pub fn scale(self, t: f64) -> SplitComplex {
        SplitComplex::new(self.x * t, self.y * t)
    }

    fn lift<F: Fn(f64) -> f64>(self, f: F) -> SplitComplex {
        let (fu, fv) = (f(self.x + self.y), f(self.x - self.y));
        SplitComplex::new(0.5 * (fu + fv), 0.5 * (fu - fv))
    }

    /// z̄ / (x² − y²).  NaN on the light cone.
    pub fn inverse(self) -> SplitComplex {
        let m = self.modulus_squared();
        if m == 0.0 {
            return SplitComplex::NAN;
        }
        SplitComplex::new(self.x / m, -self.y / m)
    }

    /// e^x·(cosh y + j·sinh y).
    pub fn exp(self) -> SplitComplex {
        self.lift(f64::exp)
    }

    /// Defined inside the right-hand wedge x > |y|; NaN elsewhere.
    pub fn log(self) -> SplitComplex {
        self.lift(|t| if t > 0.0 { t.ln() } else { f64::NAN })
    }

    /// sin x·cos y + j·cos x·sin y.
    pub fn sin(self) -> SplitComplex {
        self.lift(f64::sin)
    }

    /// cos x·cos y − j·sin x·sin y.
    pub fn cos(self) -> SplitComplex {
        self.lift(f64::cos)
    }

    /// tan through the null basis.
    pub fn tan(self) -> SplitComplex {
        self.lift(f64::tan)
    }

    /// asin through the null basis; NaN unless |x ± y| ≤ 1.
    pub fn asin(self) -> SplitComplex {
        self.lift(f64::asin)
    }

    /// acos through the null basis; NaN unless |x ± y| ≤ 1.
    pub fn acos(self) -> SplitComplex {
        self.lift(f64::acos)
    }

    /// atan through the null basis.
    pub fn atan(self) -> SplitComplex {
        self.lift(f64::atan)
    }

    /// sinh through the null basis.
    pub fn sinh(self) -> SplitComplex {
        self.lift(f64::sinh)
    }

    /// cosh through the null basis.
    pub fn cosh(self) -> SplitComplex {
        self.lift(f64::cosh)
    }

    /// tanh through the null basis.
    pub fn tanh(self) -> SplitComplex {
        self.lift(f64::tanh)
    }
}

impl From<f64> for SplitComplex {
    fn from(x: f64) -> SplitComplex {
        SplitComplex::new(x, 0.0)
    }
}

impl fmt::Display for SplitComplex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}+{}j", self.x, self.y)
    }
}

impl Add for SplitComplex {
    type Output = SplitComplex;
    fn add(self, rhs: SplitComplex) -> SplitComplex {
        SplitComplex::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for SplitComplex {
    type Output = SplitComplex;
    fn sub(self, rhs: SplitComplex) -> SplitComplex {
        SplitComplex::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for SplitComplex {
    type Output = SplitComplex;
    fn mul(self, rhs: SplitComplex) -> SplitComplex {
        SplitComplex::new(
            self.x * rhs.x + self.y * rhs.y,
            self.x * rhs.y + self.y * rhs.x,
        )
    }
}

impl Div for SplitComplex {
    type Output = SplitComplex;
    fn div(self, rhs: SplitComplex) -> SplitComplex {
        let m = rhs.modulus_squared();
        if m == 0.0 {
            return SplitComplex::NAN;
        }
        (self * rhs.conj()).scale(1.0 / m)
    }
}

impl Neg for SplitComplex {
    type Output = SplitComplex;
    fn neg(self) -> SplitComplex {
        SplitComplex::new(-self.x, -self.y)
    }
}

real_scalar_ops!(SplitComplex);

impl Zero for SplitComplex {
    fn zero() -> SplitComplex {
        SplitComplex::new(0.0, 0.0)
    }
    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl One for SplitComplex {
    fn one() -> SplitComplex {
        SplitComplex::new(1.0, 0.0)
    }
}

impl Inv for SplitComplex {
    type Output = SplitComplex;
    fn inv(self) -> SplitComplex {
        self.inverse()
    }
}
