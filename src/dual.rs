// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Dual numbers, `a + bε` with ε² = 0.
//!
//! Evaluating a function on `DualNumber::variable(x)` yields f(x) in
//! the real part and f′(x) in the dual part, in a single pass: every
//! function below applies f(a + bε) = f(a) + f′(a)·b·ε.  This is
//! forward-mode automatic differentiation for one real variable.

use num::traits::{Inv, One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// `real + dual·ε`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DualNumber {
    /// The value, a.
    pub real: f64,
    /// The infinitesimal coefficient, b.  Seeded with 1 this carries
    /// the derivative.
    pub dual: f64,
}

// Quotients whose denominator vanishes are undefined rather than infinite.
#[inline]
fn quotient(n: f64, d: f64) -> f64 {
    if d == 0.0 {
        f64::NAN
    } else {
        n / d
    }
}

impl DualNumber {
    /// The undefined value.
    pub const NAN: DualNumber = DualNumber {
        real: f64::NAN,
        dual: f64::NAN,
    };

    /// Builds `real + dual·ε`.
    #[inline]
    pub fn new(real: f64, dual: f64) -> DualNumber {
        DualNumber { real, dual }
    }

    /// A quantity that does not vary: `x + 0ε`.
    pub fn constant(x: f64) -> DualNumber {
        DualNumber::new(x, 0.0)
    }

    /// The variable being differentiated against: `x + 1ε`.
    pub fn variable(x: f64) -> DualNumber {
        DualNumber::new(x, 1.0)
    }

    /// True when either part is NaN.
    pub fn is_nan(self) -> bool {
        self.real.is_nan() || self.dual.is_nan()
    }

    // f(a + bε) = f(a) + f′(a)·b·ε
    #[inline]
    fn chain(self, value: f64, slope: f64) -> DualNumber {
        DualNumber::new(value, slope * self.dual)
    }

    /// (1/a, −b/a²).  NaN when a = 0.
    pub fn inverse(self) -> DualNumber {
        if self.real == 0.0 {
            return DualNumber::NAN;
        }
        self.chain(1.0 / self.real, -1.0 / (self.real * self.real))
    }

    /// (e^a, e^a·b).
    pub fn exp(self) -> DualNumber {
        let e = self.real.exp();
        self.chain(e, e)
    }

    /// (ln a, b/a).  NaN for a ≤ 0.
    pub fn log(self) -> DualNumber {
        if self.real <= 0.0 {
            return DualNumber::NAN;
        }
        self.chain(self.real.ln(), 1.0 / self.real)
    }

    /// (√a, b/(2√a)).
    pub fn sqrt(self) -> DualNumber {
        let root = self.real.sqrt();
        self.chain(root, quotient(0.5, root))
    }

    /// (a^n, n·a^(n−1)·b).
    pub fn powi(self, n: i32) -> DualNumber {
        self.chain(self.real.powi(n), f64::from(n) * self.real.powi(n - 1))
    }

    /// (a^x, x·a^(x−1)·b).
    pub fn powf(self, x: f64) -> DualNumber {
        self.chain(self.real.powf(x), x * self.real.powf(x - 1.0))
    }

    /// (sin a, cos a·b).
    pub fn sin(self) -> DualNumber {
        self.chain(self.real.sin(), self.real.cos())
    }

    /// (cos a, −sin a·b).
    pub fn cos(self) -> DualNumber {
        self.chain(self.real.cos(), -self.real.sin())
    }

    /// (tan a, b/cos²a).
    pub fn tan(self) -> DualNumber {
        let c = self.real.cos();
        self.chain(self.real.tan(), quotient(1.0, c * c))
    }

    /// (asin a, b/√(1 − a²)).
    pub fn asin(self) -> DualNumber {
        let slope = quotient(1.0, (1.0 - self.real * self.real).sqrt());
        self.chain(self.real.asin(), slope)
    }

    /// (acos a, −b/√(1 − a²)).
    pub fn acos(self) -> DualNumber {
        let slope = quotient(-1.0, (1.0 - self.real * self.real).sqrt());
        self.chain(self.real.acos(), slope)
    }

    /// (atan a, b/(1 + a²)).
    pub fn atan(self) -> DualNumber {
        self.chain(self.real.atan(), 1.0 / (1.0 + self.real * self.real))
    }

    /// (sinh a, cosh a·b).
    pub fn sinh(self) -> DualNumber {
        self.chain(self.real.sinh(), self.real.cosh())
    }

    /// (cosh a, sinh a·b).
    pub fn cosh(self) -> DualNumber {
        self.chain(self.real.cosh(), self.real.sinh())
    }

    /// (tanh a, (1 − tanh²a)·b).
    pub fn tanh(self) -> DualNumber {
        let t = self.real.tanh();
        self.chain(t, 1.0 - t * t)
    }
}

impl From<f64> for DualNumber {
    fn from(x: f64) -> DualNumber {
        DualNumber::constant(x)
    }
}

impl fmt::Display for DualNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}+{}ε", self.real, self.dual)
    }
}

impl Add for DualNumber {
    type Output = DualNumber;
    fn add(self, rhs: DualNumber) -> DualNumber {
        DualNumber::new(self.real + rhs.real, self.dual + rhs.dual)
    }
}

impl Sub for DualNumber {
    type Output = DualNumber;
    fn sub(self, rhs: DualNumber) -> DualNumber {
        DualNumber::new(self.real - rhs.real, self.dual - rhs.dual)
    }
}

impl Mul for DualNumber {
    type Output = DualNumber;
    fn mul(self, rhs: DualNumber) -> DualNumber {
        DualNumber::new(
            self.real * rhs.real,
            self.real * rhs.dual + self.dual * rhs.real,
        )
    }
}

impl Div for DualNumber {
    type Output = DualNumber;
    fn div(self, rhs: DualNumber) -> DualNumber {
        if rhs.real == 0.0 {
            return DualNumber::NAN;
        }
        DualNumber::new(
            self.real / rhs.real,
            (self.dual * rhs.real - self.real * rhs.dual) / (rhs.real * rhs.real),
        )
    }
}

impl Neg for DualNumber {
    type Output = DualNumber;
    fn neg(self) -> DualNumber {
        DualNumber::new(-self.real, -self.dual)
    }
}

impl DualNumber {
    /// Multiplies both parts by a real.
    #[inline]
    pub fn scale(self, t: f64) -> DualNumber {
        DualNumber::new(self.real * t, self.dual * t)
    }
}

real_scalar_ops!(DualNumber);

impl Zero for DualNumber {
    fn zero() -> DualNumber {
        DualNumber::constant(0.0)
    }
    fn is_zero(&self) -> bool {
        self.real == 0.0 && self.dual == 0.0
    }
}

impl One for DualNumber {
    fn one() -> DualNumber {
        DualNumber::constant(1.0)
    }
}

impl Inv for DualNumber {
    type Output = DualNumber;
    fn inv(self) -> DualNumber {
        self.inverse()
    }
}
