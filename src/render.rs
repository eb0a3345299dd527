// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The grid driver.
//!
//! A `PlotConfig` pairs a compute function, which turns a point of the
//! complex plane into a `Sample`, with a color function, which turns
//! that sample into an `Hsb`.  The `Renderer` walks every pixel of the
//! plane and asks for both.  No pixel depends on any other, so the
//! threaded renderer hands whole rows to workers off a shared queue,
//! each worker writing straight into its own row of the frame.

use image::{ImageBuffer, Rgb};
use itertools::iproduct;
use std::convert::TryFrom;
use std::iter::Enumerate;
use std::path::Path;
use std::slice::ChunksMut;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::color::{self, Hsb};
use crate::complex::Complex;
use crate::error::Error;
use crate::escape::EscapeTime;
use crate::planes::{Domain, Pixel, PlaneMapper};
use crate::roots::Convergence;

/// What a compute function produced for one point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Sample {
    /// A function value.  May be NaN at a singularity.
    Value(Complex),
    /// The outcome of an escape-time iteration.
    Escape(EscapeTime),
    /// The outcome of a root search.
    Convergence(Convergence),
}

/// Knobs shared by every compute function.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Params {
    /// Iteration cap for both engines.
    pub max_iterations: u32,
    /// Escape-time radius.
    pub escape_radius: f64,
    /// Root-finder tolerance.
    pub tolerance: f64,
}

impl Default for Params {
    fn default() -> Params {
        Params {
            max_iterations: 256,
            escape_radius: 2.0,
            tolerance: 1e-10,
        }
    }
}

impl Params {
    /// Rejects a zero cap, a radius that isn't positive and finite, and
    /// likewise a tolerance.
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_iterations == 0 {
            return Err(Error::NonPositiveIterations);
        }
        if !(self.escape_radius.is_finite() && self.escape_radius > 0.0) {
            return Err(Error::BadEscapeRadius(self.escape_radius));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(Error::BadTolerance(self.tolerance));
        }
        Ok(())
    }
}

/// Maps a point to a sample.
pub type ComputeFn = Box<dyn Fn(Complex, &Params) -> Sample + Send + Sync>;

/// Maps a point and its sample to a color.
pub type ColorFn = Box<dyn Fn(Complex, &Sample) -> Hsb + Send + Sync>;

/// Collects the pieces of a `PlotConfig`.  Nothing is checked until
/// `build`.
pub struct PlotConfigBuilder {
    compute_fn: ComputeFn,
    color_fn: ColorFn,
    domain: Domain,
    width: usize,
    height: usize,
    params: Params,
}

impl PlotConfigBuilder {
    /// Replaces the color function; the default is `color::sample`.
    pub fn color<C>(mut self, color_fn: C) -> Self
    where
        C: Fn(Complex, &Sample) -> Hsb + Send + Sync + 'static,
    {
        self.color_fn = Box::new(color_fn);
        self
    }

    /// The rectangle of the plane to sample.
    pub fn domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    /// Image size in pixels.
    pub fn size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Iteration cap.
    pub fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.params.max_iterations = max_iterations;
        self
    }

    /// Escape radius.
    pub fn escape_radius(mut self, escape_radius: f64) -> Self {
        self.params.escape_radius = escape_radius;
        self
    }

    /// Root-finder tolerance.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.params.tolerance = tolerance;
        self
    }

    /// The domain as currently set.
    pub fn current_domain(&self) -> Domain {
        self.domain
    }

    /// Validates everything and produces the configuration.
    pub fn build(self) -> Result<PlotConfig, Error> {
        self.params.validate()?;
        let plane = PlaneMapper::new(self.width, self.height, self.domain)?;
        Ok(PlotConfig {
            compute_fn: self.compute_fn,
            color_fn: self.color_fn,
            plane,
            params: self.params,
        })
    }
}

/// A validated plot: what to compute, how to color it, and where.
pub struct PlotConfig {
    compute_fn: ComputeFn,
    color_fn: ColorFn,
    plane: PlaneMapper,
    params: Params,
}

impl PlotConfig {
    /// Starts a configuration around a compute function, over
    /// [−2, 2] × [−2, 2] at 800x600 with default parameters.
    pub fn builder<F>(compute_fn: F) -> PlotConfigBuilder
    where
        F: Fn(Complex, &Params) -> Sample + Send + Sync + 'static,
    {
        PlotConfigBuilder {
            compute_fn: Box::new(compute_fn),
            color_fn: Box::new(color::sample),
            domain: Domain::new(-2.0, 2.0, -2.0, 2.0),
            width: 800,
            height: 600,
            params: Params::default(),
        }
    }

    /// The sample at x + iy.
    pub fn evaluate(&self, x: f64, y: f64) -> Sample {
        (self.compute_fn)(Complex::new(x, y), &self.params)
    }

    /// The color of `output`, sampled at `input`.
    pub fn color_of(&self, input: Complex, output: &Sample) -> Hsb {
        (self.color_fn)(input, output)
    }

    /// The pixel grid and its domain.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// The shared parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    fn shade(&self, pixel: Pixel) -> Hsb {
        let point = self.plane.pixel_to_point(&pixel);
        let output = self.evaluate(point.re, point.im);
        self.color_of(point, &output)
    }
}

/// A finished image, row-major from the top-left.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<Hsb>,
}

impl Frame {
    /// Pixels across.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Pixels down.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Every pixel, row by row.
    pub fn pixels(&self) -> &[Hsb] {
        &self.pixels
    }

    /// The color at a column and row, if it's inside the frame.
    pub fn pixel(&self, column: usize, row: usize) -> Option<Hsb> {
        if column < self.width && row < self.height {
            Some(self.pixels[row * self.width + column])
        } else {
            None
        }
    }

    /// Packed 8-bit RGB, three bytes per pixel.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_rgb().to_vec()).collect()
    }

    /// Writes the frame as an image; the format follows the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let side = |n: usize| {
            u32::try_from(n)
                .map_err(|_| Error::Output(format!("{} pixels is too large for an image", n)))
        };
        let (width, height) = (side(self.width)?, side(self.height)?);
        let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_raw(width, height, self.to_rgb_bytes())
                .ok_or_else(|| Error::Output("frame does not fit its dimensions".to_string()))?;
        buffer
            .save(path.as_ref())
            .map_err(|e| Error::Output(e.to_string()))
    }
}

type RowQueue<'a> = Arc<Mutex<Enumerate<ChunksMut<'a, Hsb>>>>;

/// Runs a `PlotConfig` over its whole plane.
pub struct Renderer {
    config: PlotConfig,
}

impl Renderer {
    /// Wraps a validated configuration.
    pub fn new(config: PlotConfig) -> Renderer {
        Renderer { config }
    }

    /// The configuration being rendered.
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Evaluates every pixel on the calling thread.
    pub fn render(&self) -> Frame {
        let plane = self.config.plane();
        let (width, height) = (plane.width(), plane.height());
        info!("rendering {}x{} on one thread", width, height);
        let pixels = iproduct!(0..height, 0..width)
            .map(|(row, column)| self.config.shade(Pixel(column, row)))
            .collect();
        Frame {
            width,
            height,
            pixels,
        }
    }

    /// Evaluates rows on `threads` workers.  A worker that takes a row
    /// while `cancel` is raised drops it and stops, and the render fails
    /// with `Error::Cancelled`.  A flag raised after the last row was
    /// taken leaves the frame complete.
    pub fn render_threaded(
        &self,
        threads: usize,
        cancel: Option<&AtomicBool>,
    ) -> Result<Frame, Error> {
        if threads == 0 {
            return Err(Error::NoThreads);
        }
        let plane = self.config.plane();
        let (width, height) = (plane.width(), plane.height());
        info!("rendering {}x{} on {} threads", width, height, threads);

        let interrupted = AtomicBool::new(false);
        let mut pixels = vec![Hsb::NEUTRAL; plane.len()];
        crossbeam::scope(|spawner| {
            let rows: RowQueue = Arc::new(Mutex::new(pixels.chunks_mut(width).enumerate()));
            for worker in 0..threads {
                let rows = rows.clone();
                let interrupted = &interrupted;
                spawner.spawn(move |_| {
                    let mut done = 0;
                    loop {
                        let next = match rows.lock() {
                            Ok(mut queue) => queue.next(),
                            Err(_) => None,
                        };
                        match next {
                            Some(_) if cancel.map_or(false, |c| c.load(Ordering::Relaxed)) => {
                                interrupted.store(true, Ordering::Relaxed);
                                break;
                            }
                            Some((row, line)) => {
                                for (column, pixel) in line.iter_mut().enumerate() {
                                    *pixel = self.config.shade(Pixel(column, row));
                                }
                                done += 1;
                            }
                            None => break,
                        }
                    }
                    debug!("worker {} finished after {} rows", worker, done);
                });
            }
        })
        .map_err(|_| Error::WorkerPanic)?;

        if interrupted.load(Ordering::Relaxed) {
            info!("render cancelled");
            return Err(Error::Cancelled);
        }
        Ok(Frame {
            width,
            height,
            pixels,
        })
    }
}
