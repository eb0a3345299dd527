// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Named plots.  Each name resolves to a builder with its compute
//! function, color function and a domain that frames it; callers can
//! still override any of them before building.

use crate::color::{self, Hsb};
use crate::complex::Complex;
use crate::dual::DualNumber;
use crate::error::Error;
use crate::escape::{mandelbrot, tricorn, EscapeTimeEngine, Rectify};
use crate::ops::{self, Operation, OPERATION_NAMES};
use crate::planes::Domain;
use crate::render::{PlotConfig, PlotConfigBuilder, Sample};
use crate::roots::{Method, Polynomial, RootFinder};
use crate::split::SplitComplex;

/// The parameter of the default Julia set.
pub const JULIA_C: Complex = Complex(num::Complex {
    re: -0.8,
    im: 0.156,
});

/// Plots beyond the plain domain colorings of `ops::OPERATION_NAMES`.
pub const PLOT_NAMES: &[&str] = &[
    "quadrant-sin",
    "mandelbrot",
    "burning-ship",
    "tricorn",
    "julia",
    "newton-cubic",
    "halley-cubic",
    "dual-sin",
    "split-inverse",
];

/// Every name `preset` understands.
pub fn names() -> impl Iterator<Item = &'static str> {
    OPERATION_NAMES.iter().chain(PLOT_NAMES.iter()).cloned()
}

fn cube_roots_of_unity() -> Vec<Complex> {
    let third = 2.0 * std::f64::consts::PI / 3.0;
    (0..3)
        .map(|k| Complex::from_polar(1.0, third * f64::from(k)))
        .collect()
}

fn escape_plot(rectify: Rectify) -> PlotConfigBuilder {
    PlotConfig::builder(move |c, params| {
        let engine = EscapeTimeEngine::from(params).rectified(rectify);
        Sample::Escape(engine.run(mandelbrot, Complex::ZERO, c))
    })
}

fn cubic_basins(method: Method) -> PlotConfigBuilder {
    let roots = cube_roots_of_unity();
    let cubic = Polynomial::from_roots(&roots);
    PlotConfig::builder(move |z, params| {
        let finder = RootFinder::from_params(method, params).with_roots(&roots);
        Sample::Convergence(finder.solve(&cubic, z))
    })
    .max_iterations(64)
}

/// Resolves a plot by name.
pub fn preset(name: &str) -> Result<PlotConfigBuilder, Error> {
    debug!("resolving plot '{}'", name);
    if let Some(op) = ops::by_name(name) {
        return Ok(PlotConfig::builder(move |z, _| Sample::Value(op.apply(z))));
    }

    let builder = match name {
        "quadrant-sin" => PlotConfig::builder(|z, _| Sample::Value(z.sin()))
            .color(|_, output| match *output {
                Sample::Value(w) => color::quadrant(w),
                _ => Hsb::NEUTRAL,
            })
            .domain(Domain::new(-4.0, 4.0, -3.0, 3.0)),
        "mandelbrot" => escape_plot(Rectify::Identity).domain(Domain::new(-2.5, 1.0, -1.3125, 1.3125)),
        "burning-ship" => escape_plot(Rectify::Absolute).domain(Domain::new(-2.5, 1.5, -2.0, 1.0)),
        "tricorn" => PlotConfig::builder(|c, params| {
            Sample::Escape(EscapeTimeEngine::from(params).run(tricorn, Complex::ZERO, c))
        })
        .domain(Domain::new(-2.0, 2.0, -1.5, 1.5)),
        "julia" => PlotConfig::builder(|z, params| {
            Sample::Escape(EscapeTimeEngine::from(params).run(mandelbrot, z, JULIA_C))
        })
        .domain(Domain::new(-1.6, 1.6, -1.2, 1.2)),
        "newton-cubic" => cubic_basins(Method::Newton).color(|_, output| match *output {
            Sample::Convergence(ref c) => color::convergence_dark(c),
            _ => Hsb::NEUTRAL,
        }),
        "halley-cubic" => cubic_basins(Method::Halley),
        "dual-sin" => PlotConfig::builder(|z, _| {
            let d = DualNumber::new(z.re, z.im).sin();
            Sample::Value(Complex::new(d.real, d.dual))
        }),
        "split-inverse" => PlotConfig::builder(|z, _| {
            let s = SplitComplex::new(z.re, z.im).inverse();
            Sample::Value(Complex::new(s.x, s.y))
        }),
        _ => return Err(Error::UnknownPlot(name.to_string())),
    };
    Ok(builder)
}
