// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Functions as values.  A plot is told "apply exp" by handing it an
//! `Operation`, a one-method capability implemented once per function.
//! The elementary operations are generic over every number type that
//! implements `Elementary`; the special functions only exist for
//! `Complex`.

use crate::complex::Complex;
use crate::dual::DualNumber;
use crate::special;
use crate::split::SplitComplex;

/// The elementary functions every number type in this crate supports.
pub trait Elementary: Copy {
    /// The multiplicative inverse.
    fn inverse(self) -> Self;
    /// The exponential.
    fn exp(self) -> Self;
    /// The principal logarithm.
    fn log(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Tangent.
    fn tan(self) -> Self;
    /// Inverse sine.
    fn asin(self) -> Self;
    /// Inverse cosine.
    fn acos(self) -> Self;
    /// Inverse tangent.
    fn atan(self) -> Self;
    /// Hyperbolic sine.
    fn sinh(self) -> Self;
    /// Hyperbolic cosine.
    fn cosh(self) -> Self;
    /// Hyperbolic tangent.
    fn tanh(self) -> Self;
}

macro_rules! elementary {
    ($t:ident) => {
        impl Elementary for $t {
            fn inverse(self) -> $t {
                $t::inverse(self)
            }
            fn exp(self) -> $t {
                $t::exp(self)
            }
            fn log(self) -> $t {
                $t::log(self)
            }
            fn sin(self) -> $t {
                $t::sin(self)
            }
            fn cos(self) -> $t {
                $t::cos(self)
            }
            fn tan(self) -> $t {
                $t::tan(self)
            }
            fn asin(self) -> $t {
                $t::asin(self)
            }
            fn acos(self) -> $t {
                $t::acos(self)
            }
            fn atan(self) -> $t {
                $t::atan(self)
            }
            fn sinh(self) -> $t {
                $t::sinh(self)
            }
            fn cosh(self) -> $t {
                $t::cosh(self)
            }
            fn tanh(self) -> $t {
                $t::tanh(self)
            }
        }
    };
}

elementary!(Complex);
elementary!(DualNumber);
elementary!(SplitComplex);

/// A function from `T` to `T`, passed around as a value.
pub trait Operation<T> {
    /// Applies the function.
    fn apply(&self, x: T) -> T;
}

macro_rules! elementary_operations {
    ($($(#[$doc:meta])* $name:ident => $method:ident;)*) => {$(
        $(#[$doc])*
        #[derive(Copy, Clone, Debug, Default)]
        pub struct $name;

        impl<T: Elementary> Operation<T> for $name {
            fn apply(&self, x: T) -> T {
                x.$method()
            }
        }
    )*};
}

macro_rules! complex_operations {
    ($($(#[$doc:meta])* $name:ident => $f:path;)*) => {$(
        $(#[$doc])*
        #[derive(Copy, Clone, Debug, Default)]
        pub struct $name;

        impl Operation<Complex> for $name {
            fn apply(&self, z: Complex) -> Complex {
                $f(z)
            }
        }
    )*};
}

elementary_operations! {
    /// 1/x.
    Inverse => inverse;
    /// e^x.
    Exp => exp;
    /// ln x.
    Log => log;
    /// sin x.
    Sin => sin;
    /// cos x.
    Cos => cos;
    /// tan x.
    Tan => tan;
    /// asin x.
    Asin => asin;
    /// acos x.
    Acos => acos;
    /// atan x.
    Atan => atan;
    /// sinh x.
    Sinh => sinh;
    /// cosh x.
    Cosh => cosh;
    /// tanh x.
    Tanh => tanh;
}

complex_operations! {
    /// The principal square root.
    Sqrt => Complex::sqrt;
    /// Γ(z).
    Gamma => special::gamma;
    /// ln Γ(z).
    LnGamma => special::ln_gamma;
    /// ζ(s), without reflection.
    Zeta => special::riemann_zeta;
    /// ζ(s), reflected through the functional equation for Re(s) < 0.
    ZetaReflected => special::riemann_zeta_reflected;
    /// η(s).
    Eta => special::dirichlet_eta;
    /// erf(z).
    Erf => special::erf;
    /// erfc(z).
    Erfc => special::erfc;
}

/// An operation on complex numbers that can be shared between threads.
pub type ComplexOperation = dyn Operation<Complex> + Send + Sync;

/// Every name `by_name` understands.
pub const OPERATION_NAMES: &[&str] = &[
    "inverse",
    "exp",
    "log",
    "sqrt",
    "sin",
    "cos",
    "tan",
    "asin",
    "acos",
    "atan",
    "sinh",
    "cosh",
    "tanh",
    "gamma",
    "lngamma",
    "zeta",
    "zeta-reflected",
    "eta",
    "erf",
    "erfc",
];

/// Looks up a complex operation by its lower-case name.
pub fn by_name(name: &str) -> Option<&'static ComplexOperation> {
    let op: &'static ComplexOperation = match name {
        "inverse" => &Inverse,
        "exp" => &Exp,
        "log" => &Log,
        "sqrt" => &Sqrt,
        "sin" => &Sin,
        "cos" => &Cos,
        "tan" => &Tan,
        "asin" => &Asin,
        "acos" => &Acos,
        "atan" => &Atan,
        "sinh" => &Sinh,
        "cosh" => &Cosh,
        "tanh" => &Tanh,
        "gamma" => &Gamma,
        "lngamma" => &LnGamma,
        "zeta" => &Zeta,
        "zeta-reflected" => &ZetaReflected,
        "eta" => &Eta,
        "erf" => &Erf,
        "erfc" => &Erfc,
        _ => return None,
    };
    Some(op)
}
