// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Failures that can reach the caller.  Arithmetic never lands here:
//! singularities become NaN and non-termination becomes a sentinel.
//! What remains is bad configuration and the plumbing around a render.

/// Everything that can go wrong while configuring or running a plot.
#[derive(Debug, Fail, PartialEq)]
pub enum Error {
    /// The iteration cap was zero.
    #[fail(display = "maximum iterations must be greater than zero")]
    NonPositiveIterations,

    /// The domain rectangle is inverted, has no area, or is not finite.
    #[fail(display = "bad domain: {}", _0)]
    BadDomain(String),

    /// Width or height was zero.
    #[fail(display = "resolution must be positive, got {}x{}", _0, _1)]
    BadResolution(usize, usize),

    /// Escape radius was zero, negative or not finite.
    #[fail(display = "escape radius must be positive and finite, got {}", _0)]
    BadEscapeRadius(f64),

    /// Convergence tolerance was zero, negative or not finite.
    #[fail(display = "tolerance must be positive and finite, got {}", _0)]
    BadTolerance(f64),

    /// A worker pool with no workers.
    #[fail(display = "thread count must be greater than zero")]
    NoThreads,

    /// The cancellation flag was raised before the grid was finished.
    #[fail(display = "render cancelled")]
    Cancelled,

    /// A worker thread panicked.
    #[fail(display = "a render worker panicked")]
    WorkerPanic,

    /// The image could not be encoded or written.
    #[fail(display = "could not write image: {}", _0)]
    Output(String),

    /// No named plot matched.
    #[fail(display = "unknown plot '{}'", _0)]
    UnknownPlot(String),
}
