// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Root-convergence iteration: Newton's and Halley's methods.
//!
//! Each iteration checks, in order:
//!
//! 1. |f(zₙ)| < ε, or the step |zₙ₊₁ − zₙ| < ε: converged.
//! 2. The derivative (Halley: the denominator 2f′² − f·f″) is smaller
//!    than the floor, or the step is not finite: stalled.
//! 3. The iteration cap is reached: exhausted.
//!
//! A converged run is classified against a list of known roots by
//! distance, so the basins of attraction can be colored.

use std::cmp::Ordering;

use crate::complex::Complex;
use crate::error::Error;
use crate::render::Params;

/// Derivatives smaller than this are treated as zero.
pub const DERIVATIVE_FLOOR: f64 = 1e-14;

/// A complex function with its first, and optionally second, derivative.
pub trait Holomorphic {
    /// f(z)
    fn value(&self, z: Complex) -> Complex;

    /// f′(z)
    fn slope(&self, z: Complex) -> Complex;

    /// f″(z).  Only Halley's method asks for it.  The default is NaN,
    /// which makes every Halley step stall.
    fn curvature(&self, _z: Complex) -> Complex {
        Complex::NAN
    }
}

fn no_curvature(_: Complex) -> Complex {
    Complex::NAN
}

/// A `Holomorphic` built from closures.
pub struct Analytic<F, D, D2 = fn(Complex) -> Complex> {
    value: F,
    slope: D,
    curvature: D2,
}

impl<F, D> Analytic<F, D>
where
    F: Fn(Complex) -> Complex,
    D: Fn(Complex) -> Complex,
{
    /// f and f′, enough for Newton's method.  Halley's method on this
    /// reports `Convergence::Stalled` unless the start is already a root;
    /// use `with_curvature` for it.
    pub fn new(value: F, slope: D) -> Self {
        Analytic {
            value,
            slope,
            curvature: no_curvature,
        }
    }
}

impl<F, D, D2> Analytic<F, D, D2>
where
    F: Fn(Complex) -> Complex,
    D: Fn(Complex) -> Complex,
    D2: Fn(Complex) -> Complex,
{
    /// f, f′ and f″, enough for Halley's method.
    pub fn with_curvature(value: F, slope: D, curvature: D2) -> Self {
        Analytic {
            value,
            slope,
            curvature,
        }
    }
}

impl<F, D, D2> Holomorphic for Analytic<F, D, D2>
where
    F: Fn(Complex) -> Complex,
    D: Fn(Complex) -> Complex,
    D2: Fn(Complex) -> Complex,
{
    fn value(&self, z: Complex) -> Complex {
        (self.value)(z)
    }
    fn slope(&self, z: Complex) -> Complex {
        (self.slope)(z)
    }
    fn curvature(&self, z: Complex) -> Complex {
        (self.curvature)(z)
    }
}

/// A polynomial with complex coefficients, lowest degree first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<Complex>,
}

impl Polynomial {
    /// c₀ + c₁z + c₂z² + …
    pub fn new(coefficients: Vec<Complex>) -> Polynomial {
        Polynomial { coefficients }
    }

    /// The monic polynomial ∏ (z − rₖ).
    pub fn from_roots(roots: &[Complex]) -> Polynomial {
        let mut coefficients = vec![Complex::ONE];
        for &root in roots {
            let mut next = vec![Complex::ZERO; coefficients.len() + 1];
            for (i, &c) in coefficients.iter().enumerate() {
                next[i + 1] = next[i + 1] + c;
                next[i] = next[i] - c * root;
            }
            coefficients = next;
        }
        Polynomial { coefficients }
    }

    /// The coefficients, lowest degree first.
    pub fn coefficients(&self) -> &[Complex] {
        &self.coefficients
    }

    // Horner's scheme for p, p′ and p″/2 at once.
    fn horner(&self, z: Complex) -> (Complex, Complex, Complex) {
        let (mut p, mut dp, mut ddp) = (Complex::ZERO, Complex::ZERO, Complex::ZERO);
        for &c in self.coefficients.iter().rev() {
            ddp = ddp * z + dp;
            dp = dp * z + p;
            p = p * z + c;
        }
        (p, dp, ddp)
    }
}

impl Holomorphic for Polynomial {
    fn value(&self, z: Complex) -> Complex {
        self.horner(z).0
    }
    fn slope(&self, z: Complex) -> Complex {
        self.horner(z).1
    }
    fn curvature(&self, z: Complex) -> Complex {
        self.horner(z).2.scale(2.0)
    }
}

/// The iteration used to chase a root.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Method {
    /// zₙ₊₁ = zₙ − f/f′
    Newton,
    /// zₙ₊₁ = zₙ − 2ff′ / (2f′² − ff″)
    Halley,
}

/// The result of chasing a root from one starting point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Convergence {
    /// The iteration settled within tolerance.
    Converged {
        /// Iterations taken.
        iterations: u32,
        /// The cap the finder ran with.
        max_iterations: u32,
        /// Where the iteration settled.
        point: Complex,
        /// Index of the nearest known root, if any were given.
        root: Option<usize>,
        /// How many known roots there were.
        root_count: usize,
        /// 1 − iterations/max_iterations: 1 for an immediate hit,
        /// falling towards 0 as the cap is approached.
        closeness: f64,
    },
    /// The derivative vanished or the step left the finite plane.
    Stalled,
    /// The cap was reached without settling.
    Exhausted,
}

impl Convergence {
    /// True for a converged run.
    pub fn converged(&self) -> bool {
        match *self {
            Convergence::Converged { .. } => true,
            _ => false,
        }
    }

    /// The index of the root reached, if one was identified.
    pub fn root(&self) -> Option<usize> {
        match *self {
            Convergence::Converged { root, .. } => root,
            _ => None,
        }
    }
}

/// Runs Newton's or Halley's method against a fixed set of known roots.
#[derive(Clone, Debug)]
pub struct RootFinder<'a> {
    method: Method,
    tolerance: f64,
    max_iterations: u32,
    derivative_floor: f64,
    roots: &'a [Complex],
}

impl RootFinder<'static> {
    /// A finder with no known roots.
    pub fn new(method: Method, tolerance: f64, max_iterations: u32) -> Result<Self, Error> {
        if max_iterations == 0 {
            return Err(Error::NonPositiveIterations);
        }
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(Error::BadTolerance(tolerance));
        }
        Ok(RootFinder {
            method,
            tolerance,
            max_iterations,
            derivative_floor: DERIVATIVE_FLOOR,
            roots: &[],
        })
    }

    /// A finder configured from already-validated plot parameters.
    pub fn from_params(method: Method, params: &Params) -> Self {
        RootFinder {
            method,
            tolerance: params.tolerance,
            max_iterations: params.max_iterations,
            derivative_floor: DERIVATIVE_FLOOR,
            roots: &[],
        }
    }
}

impl<'a> RootFinder<'a> {
    /// Classifies converged points against `roots`.
    pub fn with_roots<'b>(self, roots: &'b [Complex]) -> RootFinder<'b> {
        RootFinder {
            method: self.method,
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
            derivative_floor: self.derivative_floor,
            roots,
        }
    }

    /// Overrides `DERIVATIVE_FLOOR`.
    pub fn with_derivative_floor(self, derivative_floor: f64) -> Self {
        RootFinder {
            derivative_floor,
            ..self
        }
    }

    /// Iterates from `z0` until one of the stop checks fires.
    ///
    /// Halley's method needs `f.curvature`.  A `Holomorphic` that keeps
    /// the NaN default stalls on the first step that has to move.
    pub fn solve<H: Holomorphic + ?Sized>(&self, f: &H, z0: Complex) -> Convergence {
        let mut z = z0;
        for n in 0..self.max_iterations {
            let fz = f.value(z);
            if fz.abs() < self.tolerance {
                return self.converged(n, z);
            }
            let next = match self.step(f, z, fz) {
                Some(next) => next,
                None => return Convergence::Stalled,
            };
            if (next - z).abs() < self.tolerance {
                return self.converged(n + 1, next);
            }
            z = next;
        }
        Convergence::Exhausted
    }

    fn step<H: Holomorphic + ?Sized>(&self, f: &H, z: Complex, fz: Complex) -> Option<Complex> {
        let slope = f.slope(z);
        let (numerator, denominator) = match self.method {
            Method::Newton => (fz, slope),
            Method::Halley => (
                (fz * slope).scale(2.0),
                (slope * slope).scale(2.0) - fz * f.curvature(z),
            ),
        };
        if !(denominator.abs() >= self.derivative_floor) {
            return None;
        }
        let next = z - numerator / denominator;
        if next.is_finite() {
            Some(next)
        } else {
            None
        }
    }

    fn converged(&self, iterations: u32, point: Complex) -> Convergence {
        Convergence::Converged {
            iterations,
            max_iterations: self.max_iterations,
            point,
            root: self.nearest_root(point),
            root_count: self.roots.len(),
            closeness: 1.0 - f64::from(iterations) / f64::from(self.max_iterations),
        }
    }

    fn nearest_root(&self, point: Complex) -> Option<usize> {
        self.roots
            .iter()
            .map(|&root| (point - root).norm_sqr())
            .enumerate()
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quadratic() -> Polynomial {
        Polynomial::from_roots(&[Complex::ONE, Complex::new(-1.0, 0.0)])
    }

    fn cube_roots_of_unity() -> Vec<Complex> {
        (0..3)
            .map(|k| Complex::from_polar(1.0, 2.0 * std::f64::consts::PI * f64::from(k) / 3.0))
            .collect()
    }

    #[test]
    fn from_roots_expands_the_product() {
        assert_eq!(
            quadratic().coefficients(),
            &[Complex::new(-1.0, 0.0), Complex::ZERO, Complex::ONE][..]
        );
        let p = quadratic();
        let z = Complex::new(0.3, 2.0);
        assert_eq!(p.value(z), z * z - 1.0);
        assert_eq!(p.slope(z), z.scale(2.0));
        assert_eq!(p.curvature(z), Complex::new(2.0, 0.0));
    }

    #[test]
    fn newton_finds_one_from_two() {
        let roots = [Complex::ONE, Complex::new(-1.0, 0.0)];
        let finder = RootFinder::new(Method::Newton, 1e-10, 50)
            .unwrap()
            .with_roots(&roots);
        let result = finder.solve(&quadratic(), Complex::new(2.0, 0.0));
        match result {
            Convergence::Converged {
                iterations,
                root,
                point,
                ..
            } => {
                assert_eq!(iterations, 5);
                assert_eq!(root, Some(0));
                assert!((point - Complex::ONE).abs() < 1e-12);
            }
            other => panic!("expected convergence, got {:?}", other),
        }
        assert_eq!(finder.solve(&quadratic(), Complex::new(2.0, 0.0)), result);
    }

    #[test]
    fn closures_work_as_well_as_polynomials() {
        let f = Analytic::new(|z: Complex| z * z - 1.0, |z: Complex| z.scale(2.0));
        let finder = RootFinder::new(Method::Newton, 1e-10, 50).unwrap();
        let result = finder.solve(&f, Complex::new(-3.0, 0.5));
        assert!(result.converged());
        assert_eq!(result.root(), None);
    }

    #[test]
    fn halley_without_curvature_stalls() {
        let f = Analytic::new(|z: Complex| z * z - 1.0, |z: Complex| z.scale(2.0));
        let finder = RootFinder::new(Method::Halley, 1e-10, 50).unwrap();
        assert_eq!(finder.solve(&f, Complex::new(2.0, 0.0)), Convergence::Stalled);
        assert!(finder.solve(&f, Complex::ONE).converged());
        let g = Analytic::with_curvature(
            |z: Complex| z * z - 1.0,
            |z: Complex| z.scale(2.0),
            |_: Complex| Complex::from(2.0),
        );
        assert!(finder.solve(&g, Complex::new(2.0, 0.0)).converged());
    }

    #[test]
    fn halley_converges_faster_than_newton() {
        let roots = cube_roots_of_unity();
        let cubic = Polynomial::new(vec![
            Complex::new(-1.0, 0.0),
            Complex::ZERO,
            Complex::ZERO,
            Complex::ONE,
        ]);
        let newton = RootFinder::new(Method::Newton, 1e-10, 50)
            .unwrap()
            .with_roots(&roots);
        let halley = RootFinder::new(Method::Halley, 1e-10, 50)
            .unwrap()
            .with_roots(&roots);
        let start = Complex::new(2.0, 0.0);
        let (n, h) = (newton.solve(&cubic, start), halley.solve(&cubic, start));
        assert_eq!(n.root(), Some(0));
        assert_eq!(h.root(), Some(0));
        match (n, h) {
            (
                Convergence::Converged { iterations: ni, .. },
                Convergence::Converged { iterations: hi, .. },
            ) => {
                assert_eq!(ni, 6);
                assert_eq!(hi, 4);
            }
            other => panic!("expected convergence, got {:?}", other),
        }
    }

    #[test]
    fn basins_classify_by_nearest_root() {
        let roots = cube_roots_of_unity();
        let cubic = Polynomial::from_roots(&roots);
        let finder = RootFinder::new(Method::Newton, 1e-10, 100)
            .unwrap()
            .with_roots(&roots);
        assert_eq!(finder.solve(&cubic, Complex::new(-1.0, 1.5)).root(), Some(1));
        assert_eq!(finder.solve(&cubic, Complex::new(-1.0, -1.5)).root(), Some(2));
    }

    #[test]
    fn a_flat_start_stalls() {
        let finder = RootFinder::new(Method::Newton, 1e-10, 50).unwrap();
        assert_eq!(finder.solve(&quadratic(), Complex::ZERO), Convergence::Stalled);
    }

    #[test]
    fn a_tight_cap_exhausts() {
        let finder = RootFinder::new(Method::Newton, 1e-10, 2).unwrap();
        assert_eq!(
            finder.solve(&quadratic(), Complex::new(2.0, 0.0)),
            Convergence::Exhausted
        );
    }

    #[test]
    fn closeness_falls_with_iterations() {
        let finder = RootFinder::new(Method::Newton, 1e-10, 50).unwrap();
        let near = finder.solve(&quadratic(), Complex::new(1.0, 0.0));
        let far = finder.solve(&quadratic(), Complex::new(40.0, 3.0));
        match (near, far) {
            (
                Convergence::Converged { closeness: a, iterations: 0, .. },
                Convergence::Converged { closeness: b, .. },
            ) => {
                assert_eq!(a, 1.0);
                assert!(b < a && b > 0.0);
            }
            other => panic!("expected convergence, got {:?}", other),
        }
    }

    #[test]
    fn configuration_is_checked() {
        assert!(RootFinder::new(Method::Newton, 1e-10, 0).is_err());
        assert_eq!(
            RootFinder::new(Method::Halley, -1.0, 10).unwrap_err(),
            Error::BadTolerance(-1.0)
        );
    }
}
