// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Special functions on the complex plane.
//!
//! Every function here is pure and truncates its approximation at a
//! fixed point, so each call costs a bounded amount of work.  A NaN
//! argument returns NaN, as do the poles.
//!
//! A note on ζ: `riemann_zeta` uses Euler–Maclaurin summation with N
//! direct terms and a fixed table of Bernoulli corrections.  The
//! corrections are an asymptotic series, which is only trustworthy
//! while |s| stays small next to 2πN.  With the default N = 10 the
//! error stays under 10⁻⁶ for roughly Re(s) > −8 and |Im(s)| ≤ 20; the
//! reach narrows further out, to Re(s) > −3 near |Im(s)| = 30 and
//! Re(s) > 2 near |Im(s)| = 40.
//!
//! Raising N buys imaginary reach but costs the left half-plane: the
//! direct terms n⁻ˢ grow like n^|Re s| and their cancellation against
//! the correction terms fails.  N = 40 holds only to about Re(s) > −5
//! on the real axis, and N = 60 puts ζ(−10) in the thousands.  Nothing
//! reflects silently: for the left half-plane ask for
//! `riemann_zeta_reflected` by name.

use crate::complex::Complex;
use std::f64::consts::PI;

/// Lanczos parameter g.
const LANCZOS_G: f64 = 7.0;

/// Lanczos series coefficients for g = 7, n = 9.
const LANCZOS_COEFFS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// √(2π)
const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

/// ln √(2π)
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_8;

/// √π
const SQRT_PI: f64 = 1.772_453_850_905_516;

/// 2/√π
const FRAC_2_SQRT_PI: f64 = 1.128_379_167_095_512_6;

/// B₂, B₄, … B₂₀.
const BERNOULLI: [f64; 10] = [
    1.0 / 6.0,
    -1.0 / 30.0,
    1.0 / 42.0,
    -1.0 / 30.0,
    5.0 / 66.0,
    -691.0 / 2730.0,
    7.0 / 6.0,
    -3617.0 / 510.0,
    43867.0 / 798.0,
    -174_611.0 / 330.0,
];

/// Direct terms in the Euler–Maclaurin sum used by `riemann_zeta`.
pub const ZETA_TERMS: usize = 10;

/// Terms in Borwein's accelerated series for η.
pub const ETA_TERMS: usize = 30;

/// Below this modulus erf is summed as a power series; above it erfc
/// is evaluated as a continued fraction.
pub const ERF_SERIES_RADIUS: f64 = 3.0;

/// The series is also used, at any modulus, while |Re z| is below this.
/// Its cancellation costs a factor of e^(2·Re(z)²) in relative error,
/// and the continued fraction converges badly near the imaginary axis.
pub const ERF_SERIES_STRIP: f64 = 1.5;

// Enough for |z|² up to the point where erf itself overflows.
const ERF_SERIES_TERMS: usize = 4000;

const ERFC_FRACTION_DEPTH: usize = 60;

fn is_pole(z: Complex) -> bool {
    z.im == 0.0 && z.re <= 0.0 && z.re == z.re.floor()
}

// base^s for a positive real base.
#[inline]
fn real_pow(base: f64, s: Complex) -> Complex {
    (base.ln() * s).exp()
}

// A(z) = c₀ + Σ cₖ/(z + k)
fn lanczos_sum(z: Complex) -> Complex {
    let mut sum = Complex::from(LANCZOS_COEFFS[0]);
    for (i, &c) in LANCZOS_COEFFS[1..].iter().enumerate() {
        sum = sum + c / (z + (i + 1) as f64);
    }
    sum
}

/// Γ(z) by the Lanczos approximation.  Left of Re(z) = 1/2 the
/// reflection Γ(z)·Γ(1 − z) = π / sin(πz) keeps the series in the
/// half-plane where it is accurate.
///
/// Γ stays finite on the real axis up to about 171.6.  Where the
/// reflected denominator overflows the result is zero, which is what
/// Γ has underflowed to there.
pub fn gamma(z: Complex) -> Complex {
    if z.is_nan() || is_pole(z) {
        return Complex::NAN;
    }
    if z.re < 0.5 {
        let denominator = (PI * z).sin() * gamma(1.0 - z);
        if !denominator.is_finite() {
            return Complex::ZERO;
        }
        return PI / denominator;
    }
    let z = z - 1.0;
    let t = z + (LANCZOS_G + 0.5);
    // t^(z+½) alone overflows long before Γ does, so e^(−t) is applied
    // between its two halves.
    let half = t.powc((z + 0.5).scale(0.5));
    SQRT_2PI * half * ((-t).exp() * half) * lanczos_sum(z)
}

/// ln Γ(z), assembled from logarithms so Γ itself is never formed and
/// cannot overflow.  The imaginary part is a continuous branch in the
/// right half-plane, not necessarily the principal value of ln(Γ(z)).
pub fn ln_gamma(z: Complex) -> Complex {
    if z.is_nan() || is_pole(z) {
        return Complex::NAN;
    }
    if z.re < 0.5 {
        return PI.ln() - (PI * z).sin().log() - ln_gamma(1.0 - z);
    }
    let z = z - 1.0;
    let t = z + (LANCZOS_G + 0.5);
    LN_SQRT_2PI + (z + 0.5) * t.log() - t + lanczos_sum(z).log()
}

/// ζ(s) with the default truncation, `ZETA_TERMS`.
pub fn riemann_zeta(s: Complex) -> Complex {
    riemann_zeta_with_terms(s, ZETA_TERMS)
}

/// ζ(s) by Euler–Maclaurin summation:
///
/// Σₙ₌₁ᴺ⁻¹ n⁻ˢ + N¹⁻ˢ/(s − 1) + N⁻ˢ/2 + Σₖ B₂ₖ/(2k)!·s(s+1)…(s+2k−2)·N⁻ˢ⁻²ᵏ⁺¹
///
/// `terms` is N.  The pole at s = 1 is NaN.
pub fn riemann_zeta_with_terms(s: Complex, terms: usize) -> Complex {
    if s.is_nan() {
        return Complex::NAN;
    }
    let terms = terms.max(1);
    let n = terms as f64;
    let mut sum = Complex::ZERO;
    for k in 1..terms {
        sum = sum + real_pow(k as f64, -s);
    }
    let n_pow = real_pow(n, -s);
    sum = sum + n * n_pow / (s - 1.0) + 0.5 * n_pow;

    let mut rising = s;
    let mut factorial = 2.0;
    let mut power = n_pow / n;
    for (k, b) in BERNOULLI.iter().enumerate() {
        sum = sum + rising * power.scale(b / factorial);
        let next = (2 * k + 1) as f64;
        rising = rising * (s + next) * (s + (next + 1.0));
        factorial *= (next + 2.0) * (next + 3.0);
        power = power / (n * n);
    }
    sum
}

/// ζ(s) over the whole plane.  For Re(s) < 0 the functional equation
/// ζ(s) = 2ˢ·πˢ⁻¹·sin(πs/2)·Γ(1 − s)·ζ(1 − s) moves the evaluation to
/// the right half-plane first.
pub fn riemann_zeta_reflected(s: Complex) -> Complex {
    if s.re >= 0.0 || s.is_nan() {
        return riemann_zeta(s);
    }
    let one_minus = 1.0 - s;
    real_pow(2.0, s)
        * real_pow(PI, s - 1.0)
        * (s.scale(PI / 2.0)).sin()
        * gamma(one_minus)
        * riemann_zeta(one_minus)
}

// Borwein's dₖ = n·Σᵢ₌₀ᵏ (n+i−1)!·4ⁱ / ((n−i)!·(2i)!)
fn borwein_coefficients() -> [f64; ETA_TERMS + 1] {
    let n = ETA_TERMS as f64;
    let mut d = [0.0; ETA_TERMS + 1];
    let mut term = 1.0;
    let mut acc = 0.0;
    for (i, slot) in d.iter_mut().enumerate() {
        acc += term;
        *slot = acc;
        let i = i as f64;
        term *= 4.0 * (n + i) * (n - i) / ((2.0 * i + 1.0) * (2.0 * i + 2.0));
    }
    d
}

/// η(s) = Σ (−1)ⁿ⁻¹ n⁻ˢ, summed with Borwein's acceleration.  Unlike
/// (1 − 2¹⁻ˢ)·ζ(s) this is finite at s = 1, where it gives ln 2.
pub fn dirichlet_eta(s: Complex) -> Complex {
    if s.is_nan() {
        return Complex::NAN;
    }
    let d = borwein_coefficients();
    let dn = d[ETA_TERMS];
    let mut sum = Complex::ZERO;
    for (k, &dk) in d[..ETA_TERMS].iter().enumerate() {
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        sum = sum + real_pow((k + 1) as f64, -s).scale(sign * (dk - dn));
    }
    sum.scale(-1.0 / dn)
}

// 2/√π · Σ (−1)ⁿ z²ⁿ⁺¹ / (n!(2n+1))
fn erf_series(z: Complex) -> Complex {
    let z2 = z * z;
    let mut term = z;
    let mut sum = z;
    for n in 1..ERF_SERIES_TERMS {
        term = -(term * z2) / n as f64;
        let next = term / (2 * n + 1) as f64;
        sum = sum + next;
        if next.abs() <= f64::EPSILON * sum.abs() {
            break;
        }
    }
    FRAC_2_SQRT_PI * sum
}

// Laplace's continued fraction, for Re(z) ≥ 0:
// erfc z = e^(−z²)/√π · 1/(z + (1/2)/(z + 1/(z + (3/2)/(z + …))))
fn erfc_fraction(z: Complex) -> Complex {
    let mut f = z;
    for k in (1..=ERFC_FRACTION_DEPTH).rev() {
        f = z + (0.5 * k as f64) / f;
    }
    (-(z * z)).exp() / (SQRT_PI * f)
}

fn uses_series(z: Complex) -> bool {
    z.abs() < ERF_SERIES_RADIUS || z.re.abs() < ERF_SERIES_STRIP
}

/// The error function.
pub fn erf(z: Complex) -> Complex {
    if z.is_nan() {
        return Complex::NAN;
    }
    if uses_series(z) {
        erf_series(z)
    } else {
        1.0 - erfc(z)
    }
}

/// The complementary error function, 1 − erf(z).
pub fn erfc(z: Complex) -> Complex {
    if z.is_nan() {
        return Complex::NAN;
    }
    if uses_series(z) {
        1.0 - erf_series(z)
    } else if z.re < 0.0 {
        2.0 - erfc_fraction(-z)
    } else {
        erfc_fraction(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Complex, b: Complex, tol: f64) -> bool {
        (a - b).abs() <= tol * (1.0 + b.abs())
    }

    fn real(x: f64) -> Complex {
        Complex::from(x)
    }

    #[test]
    fn gamma_matches_factorials_and_half_integers() {
        assert!(close(gamma(real(5.0)), real(24.0), 1e-12));
        assert!(close(gamma(real(1.0)), real(1.0), 1e-12));
        assert!(close(gamma(real(0.5)), real(SQRT_PI), 1e-12));
        assert!(close(gamma(real(-0.5)), real(-2.0 * SQRT_PI), 1e-12));
    }

    #[test]
    fn gamma_satisfies_the_recurrence_off_the_axis() {
        for &(re, im) in [(0.3, 1.2), (-2.7, 0.4), (4.1, -3.3)].iter() {
            let z = Complex::new(re, im);
            assert!(close(gamma(z + 1.0), z * gamma(z), 1e-10), "at {}", z);
        }
        assert!(close(
            gamma(Complex::new(1.0, 1.0)),
            Complex::new(0.498_015_668_118_356, -0.154_949_828_301_810_7),
            1e-12
        ));
    }

    #[test]
    fn gamma_poles_are_nan() {
        assert!(gamma(real(0.0)).is_nan());
        assert!(gamma(real(-3.0)).is_nan());
        assert!(ln_gamma(real(-1.0)).is_nan());
        assert!(gamma(Complex::NAN).is_nan());
    }

    #[test]
    fn ln_gamma_agrees_with_gamma_and_stays_finite() {
        let z = Complex::new(2.5, 1.0);
        assert!(close(ln_gamma(z).exp(), gamma(z), 1e-12));
        let w = Complex::new(-1.5, 0.7);
        assert!(close(ln_gamma(w).exp(), gamma(w), 1e-10));
        assert!((ln_gamma(real(100.0)).re - 359.134_205_369_575_4).abs() < 1e-9);
        assert!(ln_gamma(real(1e6)).is_finite());
        assert!(!gamma(real(1e6)).is_finite());
        for &x in [145.0, 150.0, 170.0].iter() {
            let g = gamma(real(x));
            assert!(g.is_finite(), "Γ({}) overflowed", x);
            assert!(close(g, ln_gamma(real(x)).exp(), 1e-11), "at {}", x);
        }
        let factorial_169 = real(4.269_068_009_004_705e304);
        assert!((gamma(real(170.0)) - factorial_169).abs() < 1e-12 * factorial_169.abs());
    }

    #[test]
    fn gamma_far_left_underflows_to_zero() {
        let g = gamma(real(-200.5));
        assert!(g.is_finite());
        assert!(g.abs() < 1e-300);
        assert!(gamma(Complex::new(-0.5, 300.0)).abs() < 1e-150);
    }

    #[test]
    fn zeta_hits_known_values() {
        assert!(close(riemann_zeta(real(2.0)), real(PI * PI / 6.0), 1e-13));
        assert!(close(riemann_zeta(real(4.0)), real(PI.powi(4) / 90.0), 1e-13));
        assert!(close(riemann_zeta(real(0.0)), real(-0.5), 1e-13));
        assert!(close(riemann_zeta(real(-1.0)), real(-1.0 / 12.0), 1e-12));
        assert!(close(riemann_zeta(real(-5.0)), real(-1.0 / 252.0), 1e-8));
    }

    #[test]
    fn zeta_pole_is_nan() {
        assert!(riemann_zeta(real(1.0)).is_nan());
    }

    #[test]
    fn zeta_vanishes_at_the_first_nontrivial_zero() {
        let s = Complex::new(0.5, 14.134_725_141_734_693);
        assert!(riemann_zeta(s).abs() < 1e-6);
    }

    #[test]
    fn more_terms_do_not_move_a_converged_value() {
        let s = Complex::new(3.0, 5.0);
        assert!(close(
            riemann_zeta_with_terms(s, 10),
            riemann_zeta_with_terms(s, 40),
            1e-12
        ));
    }

    #[test]
    fn large_truncations_lose_the_left_half_plane() {
        // ζ(−10) is a trivial zero.
        assert!(riemann_zeta_with_terms(real(-10.0), 60).abs() > 1.0);
        assert!(riemann_zeta_reflected(real(-10.0)).abs() < 1e-12);
        let s = Complex::new(-7.5, 3.0);
        assert!(close(riemann_zeta(s), riemann_zeta_reflected(s), 1e-6));
    }

    #[test]
    fn reflection_agrees_with_the_direct_series_where_both_hold() {
        for &(re, im) in [(-1.0, 0.0), (-3.5, 2.0), (-0.25, -6.0)].iter() {
            let s = Complex::new(re, im);
            assert!(close(riemann_zeta_reflected(s), riemann_zeta(s), 1e-9), "at {}", s);
        }
        assert!(close(riemann_zeta_reflected(real(-7.0)), real(1.0 / 240.0), 1e-12));
    }

    #[test]
    fn eta_hits_known_values() {
        assert!(close(dirichlet_eta(real(1.0)), real(2.0f64.ln()), 1e-14));
        assert!(close(dirichlet_eta(real(2.0)), real(PI * PI / 12.0), 1e-14));
        assert!(close(dirichlet_eta(real(0.0)), real(0.5), 1e-14));
        assert!(close(dirichlet_eta(real(-1.0)), real(0.25), 1e-12));
    }

    #[test]
    fn eta_matches_its_zeta_relation() {
        let s = Complex::new(0.75, 3.0);
        let relation = (1.0 - real_pow(2.0, 1.0 - s)) * riemann_zeta(s);
        assert!(close(dirichlet_eta(s), relation, 1e-10));
    }

    #[test]
    fn erf_matches_reference_values_on_both_sides_of_the_switch() {
        assert!(close(erf(real(0.5)), real(0.520_499_877_813_046_5), 1e-14));
        assert!(close(erf(real(3.5)), real(0.999_999_256_901_627_7), 1e-14));
        assert!(close(erfc(real(3.0)), real(2.209_049_699_858_544e-5), 1e-12));
        assert_eq!(erf(Complex::ZERO), Complex::ZERO);
    }

    #[test]
    fn erf_is_continuous_across_the_switch() {
        let inside = Complex::new(2.999_999, 0.1);
        let outside = Complex::new(3.000_001, 0.1);
        assert!((erf(inside) - erf(outside)).abs() < 1e-6);
        let z = Complex::new(2.0, 2.5);
        assert!(close(erf_series(z), 1.0 - erfc_fraction(z), 1e-12));
    }

    #[test]
    fn erf_is_accurate_along_the_imaginary_axis() {
        assert!(close(erf(Complex::new(0.0, 3.0)), Complex::new(0.0, 1_629.994_622_601_566), 1e-13));
        let four = Complex::new(0.0, 1_296_959.730_717_639);
        assert!(close(erf(Complex::new(0.0, 4.0)), four, 1e-13));
        assert!(close(erf(Complex::new(0.0, -4.0)), -four, 1e-13));
        assert!(close(
            erf(Complex::new(0.0, 6.0)),
            Complex::new(0.0, 4.112_751_455_828_239e14),
            1e-13
        ));
        let w = erf(Complex::new(0.0, 5.0));
        assert_eq!(w.re, 0.0);
        assert_eq!(erf(Complex::new(0.0, -5.0)), -w);
    }

    #[test]
    fn series_and_continued_fraction_agree_where_both_converge() {
        for &(re, im) in [(1.5, 3.0), (2.0, 2.5), (1.8, -5.0), (1.6, 7.0), (2.2, 3.5)].iter() {
            let z = Complex::new(re, im);
            assert!(close(erf_series(z), 1.0 - erfc_fraction(z), 1e-11), "at {}", z);
        }
    }

    #[test]
    fn erf_is_odd_and_erfc_complements_it() {
        for &(re, im) in [(0.4, 0.2), (-3.2, 1.0), (5.0, -0.5)].iter() {
            let z = Complex::new(re, im);
            assert!(close(erf(-z), -erf(z), 1e-12), "at {}", z);
            assert!(close(erf(z) + erfc(z), Complex::ONE, 1e-12), "at {}", z);
        }
        assert!(erf(Complex::NAN).is_nan());
    }
}
