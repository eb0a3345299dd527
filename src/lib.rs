#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Complex function plotter
//!
//! Plots of complex functions come in three flavors.  A domain
//! coloring paints every point of the plane by the value a function
//! takes there: the phase becomes the hue and the logarithm of the
//! modulus becomes bands of brightness.  An escape-time plot iterates
//! a map such as z² + c from every point and paints it by how quickly
//! the orbit left a disc; the Mandelbrot set is the black heart that
//! never leaves.  A basin plot runs Newton's or Halley's method from
//! every point and paints it by which root the iteration fell into.
//!
//! Underneath are three two-component number systems (the complex
//! numbers, the dual numbers and the split-complex numbers), the
//! elementary functions over each, and Gamma, Zeta, Eta and Erf over
//! the complex plane.  Arithmetic never fails: singularities come out
//! as NaN and are painted a neutral black.  Only configuration is
//! checked, and it is checked before anything is drawn.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

// Mixed arithmetic between a two-component number and a plain f64.
// Every type it is used on has `scale` and `From<f64>`.
macro_rules! real_scalar_ops {
    ($t:ident) => {
        impl ::std::ops::Add<f64> for $t {
            type Output = $t;
            fn add(self, rhs: f64) -> $t {
                self + $t::from(rhs)
            }
        }

        impl ::std::ops::Sub<f64> for $t {
            type Output = $t;
            fn sub(self, rhs: f64) -> $t {
                self - $t::from(rhs)
            }
        }

        impl ::std::ops::Mul<f64> for $t {
            type Output = $t;
            fn mul(self, rhs: f64) -> $t {
                self.scale(rhs)
            }
        }

        impl ::std::ops::Div<f64> for $t {
            type Output = $t;
            fn div(self, rhs: f64) -> $t {
                self / $t::from(rhs)
            }
        }

        impl ::std::ops::Add<$t> for f64 {
            type Output = $t;
            fn add(self, rhs: $t) -> $t {
                $t::from(self) + rhs
            }
        }

        impl ::std::ops::Sub<$t> for f64 {
            type Output = $t;
            fn sub(self, rhs: $t) -> $t {
                $t::from(self) - rhs
            }
        }

        impl ::std::ops::Mul<$t> for f64 {
            type Output = $t;
            fn mul(self, rhs: $t) -> $t {
                rhs.scale(self)
            }
        }

        impl ::std::ops::Div<$t> for f64 {
            type Output = $t;
            fn div(self, rhs: $t) -> $t {
                $t::from(self) / rhs
            }
        }
    };
}

pub mod color;
pub mod complex;
pub mod dual;
pub mod error;
pub mod escape;
pub mod ops;
pub mod planes;
pub mod presets;
pub mod render;
pub mod roots;
pub mod special;
pub mod split;

pub use crate::color::Hsb;
pub use crate::complex::Complex;
pub use crate::dual::DualNumber;
pub use crate::error::Error;
pub use crate::escape::{EscapeTime, EscapeTimeEngine, Rectify};
pub use crate::ops::{Elementary, Operation};
pub use crate::planes::{Domain, Pixel, PlaneMapper};
pub use crate::presets::preset;
pub use crate::render::{Frame, Params, PlotConfig, PlotConfigBuilder, Renderer, Sample};
pub use crate::roots::{Convergence, Holomorphic, Method, Polynomial, RootFinder};
pub use crate::split::SplitComplex;
