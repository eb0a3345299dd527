// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Complex numbers, as a thin layer over `num::Complex<f64>`.
//!
//! Arithmetic and the elementary functions come from `num`.  This type
//! only changes the places where `num` would hand back an infinity or
//! an overflowed NaN for a value the plots treat as undefined.
//!
//! NaN is the only failure signal here.  Dividing by zero, or taking
//! the logarithm of zero, produces `Complex::NAN`, and NaN flows
//! through every later operation untouched.  This mirrors native
//! floating point and the plotting code depends on it: a NaN sample
//! is painted with a fixed neutral color rather than aborting the
//! render.

use num::traits::{Inv, One, Zero};
use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Deref, Div, Mul, Neg, Sub};

// Past this |2·Im z| the hyperbolic terms in tan/tanh overflow, and the
// ratio has already converged to its limit.
const TAN_SATURATION: f64 = 700.0;

/// A point on the complex plane, `re + im·i`.  The components are
/// reachable through `Deref` as `z.re` and `z.im`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Complex(pub num::Complex<f64>);

impl Complex {
    /// Zero.
    pub const ZERO: Complex = Complex(num::Complex { re: 0.0, im: 0.0 });
    /// One.
    pub const ONE: Complex = Complex(num::Complex { re: 1.0, im: 0.0 });
    /// The imaginary unit.
    pub const I: Complex = Complex(num::Complex { re: 0.0, im: 1.0 });
    /// The undefined value.
    pub const NAN: Complex = Complex(num::Complex {
        re: f64::NAN,
        im: f64::NAN,
    });

    /// Builds `re + im·i`.
    #[inline]
    pub fn new(re: f64, im: f64) -> Complex {
        Complex(num::Complex::new(re, im))
    }

    /// Builds `r·e^(iθ)`.
    pub fn from_polar(r: f64, theta: f64) -> Complex {
        Complex(num::Complex::from_polar(&r, &theta))
    }

    /// The modulus, |z|.
    #[inline]
    pub fn abs(self) -> f64 {
        self.0.norm()
    }

    /// The principal argument, in (−π, π].
    pub fn arg(self) -> f64 {
        let theta = self.0.arg();
        // atan2 reports −π for a negative real with a negative zero
        // imaginary part; the principal value is π.
        if theta == -PI {
            PI
        } else {
            theta
        }
    }

    /// ln|z|.  Infinite at zero.
    pub fn logabs(self) -> f64 {
        self.0.norm().ln()
    }

    /// |z|², the squared modulus.
    #[inline]
    pub fn norm_sqr(self) -> f64 {
        self.0.norm_sqr()
    }

    /// The complex conjugate.
    #[inline]
    pub fn conj(self) -> Complex {
        Complex(self.0.conj())
    }

    /// Multiplies both components by a real.
    #[inline]
    pub fn scale(self, t: f64) -> Complex {
        Complex(self.0.scale(t))
    }

    /// True when either component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// True when both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// 1/z.  The inverse of zero is NaN.
    pub fn inverse(self) -> Complex {
        Complex::ONE / self
    }

    /// e^z.
    pub fn exp(self) -> Complex {
        Complex(self.0.exp())
    }

    /// The principal logarithm, ln|z| + i·arg z.  ln 0 is NaN.
    pub fn log(self) -> Complex {
        if self.is_zero() {
            return Complex::NAN;
        }
        Complex::new(self.0.ln().re, self.arg())
    }

    /// The principal square root, with a non-negative real part.
    pub fn sqrt(self) -> Complex {
        Complex(self.0.sqrt())
    }

    /// z^w on the principal branch.  0^w is 0 when Re w > 0 and NaN
    /// otherwise.
    pub fn powc(self, w: Complex) -> Complex {
        if self.is_zero() {
            return if w.re > 0.0 {
                Complex::ZERO
            } else {
                Complex::NAN
            };
        }
        Complex(self.0.powc(w.0))
    }

    /// z^x for a real exponent.
    pub fn powf(self, x: f64) -> Complex {
        self.powc(Complex::from(x))
    }

    /// z^n.  A negative power of zero is NaN.
    pub fn powi(self, n: i32) -> Complex {
        if n < 0 {
            return Complex(self.inverse().0.powu(n.unsigned_abs()));
        }
        Complex(self.0.powi(n))
    }

    /// The sine.
    pub fn sin(self) -> Complex {
        Complex(self.0.sin())
    }

    /// The cosine.
    pub fn cos(self) -> Complex {
        Complex(self.0.cos())
    }

    /// tan z = (sin 2a + i·sinh 2b) / (cos 2a + cosh 2b).  A vanishing
    /// denominator is NaN, and a large |Im z| saturates at ±i.
    pub fn tan(self) -> Complex {
        let (a, b) = (2.0 * self.re, 2.0 * self.im);
        if b.abs() > TAN_SATURATION {
            return Complex::new(0.0, b.signum());
        }
        if a.cos() + b.cosh() == 0.0 {
            return Complex::NAN;
        }
        Complex(self.0.tan())
    }

    /// The hyperbolic sine.
    pub fn sinh(self) -> Complex {
        Complex(self.0.sinh())
    }

    /// The hyperbolic cosine.
    pub fn cosh(self) -> Complex {
        Complex(self.0.cosh())
    }

    /// tanh z = (sinh 2a + i·sin 2b) / (cosh 2a + cos 2b), saturating
    /// at ±1 for a large |Re z|.
    pub fn tanh(self) -> Complex {
        let (a, b) = (2.0 * self.re, 2.0 * self.im);
        if a.abs() > TAN_SATURATION {
            return Complex::new(a.signum(), 0.0);
        }
        if a.cosh() + b.cos() == 0.0 {
            return Complex::NAN;
        }
        Complex(self.0.tanh())
    }

    /// The principal arcsine.
    pub fn asin(self) -> Complex {
        Complex(self.0.asin())
    }

    /// The principal arccosine.
    pub fn acos(self) -> Complex {
        Complex(self.0.acos())
    }

    /// The principal arctangent.  NaN at the branch points ±i.
    pub fn atan(self) -> Complex {
        if self.re == 0.0 && self.im.abs() == 1.0 {
            return Complex::NAN;
        }
        Complex(self.0.atan())
    }

    /// The principal inverse hyperbolic sine.
    pub fn asinh(self) -> Complex {
        Complex(self.0.asinh())
    }

    /// The principal inverse hyperbolic cosine.
    pub fn acosh(self) -> Complex {
        Complex(self.0.acosh())
    }

    /// The principal inverse hyperbolic tangent.  NaN at ±1.
    pub fn atanh(self) -> Complex {
        if self.im == 0.0 && self.re.abs() == 1.0 {
            return Complex::NAN;
        }
        Complex(self.0.atanh())
    }
}

impl Deref for Complex {
    type Target = num::Complex<f64>;
    fn deref(&self) -> &num::Complex<f64> {
        &self.0
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Complex {
        Complex::new(re, 0.0)
    }
}

impl From<num::Complex<f64>> for Complex {
    fn from(z: num::Complex<f64>) -> Complex {
        Complex(z)
    }
}

impl From<Complex> for num::Complex<f64> {
    fn from(z: Complex) -> num::Complex<f64> {
        z.0
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Add for Complex {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Complex {
        Complex(self.0 + rhs.0)
    }
}

impl Sub for Complex {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Complex {
        Complex(self.0 - rhs.0)
    }
}

impl Mul for Complex {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Complex {
        Complex(self.0 * rhs.0)
    }
}

impl Div for Complex {
    type Output = Complex;
    fn div(self, rhs: Complex) -> Complex {
        if rhs.norm_sqr() == 0.0 {
            return Complex::NAN;
        }
        Complex(self.0 / rhs.0)
    }
}

impl Neg for Complex {
    type Output = Complex;
    fn neg(self) -> Complex {
        Complex(-self.0)
    }
}

real_scalar_ops!(Complex);

impl Zero for Complex {
    fn zero() -> Complex {
        Complex::ZERO
    }
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Complex {
    fn one() -> Complex {
        Complex::ONE
    }
}

impl Inv for Complex {
    type Output = Complex;
    fn inv(self) -> Complex {
        self.inverse()
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: Complex, b: Complex, tol: f64) -> bool {
        (a - b).abs() <= tol * (1.0 + b.abs())
    }

    const SAMPLES: [(f64, f64); 8] = [
        (0.5, 0.25),
        (-1.5, 2.0),
        (3.0, -0.75),
        (-0.1, -0.1),
        (2.0, 0.0),
        (0.0, -4.0),
        (-7.25, 0.5),
        (1e-3, 1e3),
    ];

    #[test]
    fn exp_undoes_log() {
        for &(re, im) in SAMPLES.iter() {
            let z = Complex::new(re, im);
            assert!(close(z.log().exp(), z, 1e-12), "exp(log({})) drifted", z);
        }
    }

    #[test]
    fn pythagorean_identity_holds_off_the_real_axis() {
        for &(re, im) in SAMPLES.iter().take(7) {
            let z = Complex::new(re, im);
            let (s, c) = (z.sin(), z.cos());
            assert!(close(s * s + c * c, Complex::ONE, 1e-9), "failed at {}", z);
        }
    }

    #[test]
    fn division_by_zero_is_nan() {
        assert!((Complex::new(1.0, 2.0) / Complex::ZERO).is_nan());
        assert!(Complex::ZERO.inverse().is_nan());
        assert!((Complex::new(3.0, 0.0) / 0.0).is_nan());
    }

    #[test]
    fn log_of_zero_is_nan() {
        assert!(Complex::ZERO.log().is_nan());
    }

    #[test]
    fn nan_propagates() {
        let z = Complex::NAN;
        assert!(z.exp().is_nan());
        assert!(z.sin().is_nan());
        assert!((z * Complex::ONE + 1.0).is_nan());
        assert!(z.atan().is_nan());
    }

    #[test]
    fn arg_is_principal() {
        assert_eq!(Complex::new(-1.0, 0.0).arg(), PI);
        assert_eq!(Complex::new(-1.0, -0.0).arg(), PI);
        assert!((Complex::new(0.0, -1.0).arg() + FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn logabs_matches_modulus() {
        let z = Complex::new(3.0, 4.0);
        assert!((z.logabs() - 5.0f64.ln()).abs() < 1e-15);
        let huge = Complex::new(1e300, 1e300);
        assert!(huge.logabs().is_finite());
    }

    #[test]
    fn sqrt_takes_the_principal_root() {
        assert_eq!(Complex::new(-1.0, 0.0).sqrt(), Complex::I);
        assert_eq!(Complex::new(4.0, 0.0).sqrt(), Complex::new(2.0, 0.0));
        let z = Complex::new(-3.0, -4.0);
        let r = z.sqrt();
        assert!(close(r * r, z, 1e-14));
        assert!(r.re >= 0.0);
    }

    #[test]
    fn tan_poles_are_nan_and_large_imaginary_saturates() {
        assert_eq!(Complex::new(0.3, 1e4).tan(), Complex::new(0.0, 1.0));
        let z = Complex::new(0.4, -0.2);
        assert!(close(z.tan(), z.sin() / z.cos(), 1e-13));
        assert!(close(z.tanh(), z.sinh() / z.cosh(), 1e-13));
    }

    #[test]
    fn inverse_trig_undoes_trig() {
        let z = Complex::new(0.3, -0.4);
        assert!(close(z.sin().asin(), z, 1e-12));
        assert!(close(z.cos().acos(), z, 1e-12));
        assert!(close(z.tan().atan(), z, 1e-12));
        assert!(close(z.sinh().asinh(), z, 1e-12));
        assert!(close(z.tanh().atanh(), z, 1e-12));
        assert!(Complex::I.atan().is_nan());
    }

    #[test]
    fn branch_points_are_nan_and_tanh_saturates() {
        assert!((-Complex::I).atan().is_nan());
        assert!(Complex::ONE.atanh().is_nan());
        assert!(Complex::new(-1.0, 0.0).atanh().is_nan());
        assert_eq!(Complex::new(-1e4, 0.3).tanh(), Complex::new(-1.0, 0.0));
        assert!(Complex::new(2.0, -0.5).atan().is_finite());
    }

    #[test]
    fn agrees_with_num_away_from_the_overrides() {
        let z = Complex::new(0.7, -1.3);
        let n = z.0;
        assert_eq!(z.exp().0, n.exp());
        assert_eq!(z.sqrt().0, n.sqrt());
        assert_eq!(z.asinh().0, n.asinh());
        assert_eq!((z * z).0, n * n);
        assert_eq!(z.log().0, n.ln());
    }

    #[test]
    fn integer_powers_match_products() {
        let z = Complex::new(1.1, -0.6);
        assert!(close(z.powi(3), z * z * z, 1e-14));
        assert!(close(z.powi(-2), (z * z).inverse(), 1e-14));
        assert!(close(z.powf(0.5), z.sqrt(), 1e-14));
        assert_eq!(z.powi(0), Complex::ONE);
        assert!(Complex::ZERO.powi(-1).is_nan());
    }

    #[test]
    fn converts_to_and_from_num() {
        let z = Complex::new(1.0, -2.0);
        let n: num::Complex<f64> = z.into();
        assert_eq!(Complex::from(n * n), z * z);
    }

    #[test]
    fn formats_like_a_complex_literal() {
        assert_eq!(format!("{}", Complex::new(1.0, -2.5)), "1-2.5i");
        assert_eq!(format!("{}", Complex::new(0.5, 2.0)), "0.5+2i");
    }
}
