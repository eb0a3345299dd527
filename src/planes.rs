// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane bounded by a `Domain`.
//! Row 0 of the integral plane is the top edge of the image, so it
//! maps to the largest imaginary part.

use crate::complex::Complex;
use crate::error::Error;

/// The rectangle of the complex plane being sampled.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Domain {
    /// Left edge.
    pub min_re: f64,
    /// Right edge.
    pub max_re: f64,
    /// Bottom edge.
    pub min_im: f64,
    /// Top edge.
    pub max_im: f64,
}

impl Domain {
    /// A domain from its four edges.  Not checked until a plane is
    /// built from it.
    pub fn new(min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> Domain {
        Domain {
            min_re,
            max_re,
            min_im,
            max_im,
        }
    }

    /// A domain from its left-lower and right-upper corners.
    pub fn from_corners(leftlower: Complex, rightupper: Complex) -> Domain {
        Domain::new(leftlower.re, rightupper.re, leftlower.im, rightupper.im)
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.max_re - self.min_re
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.max_im - self.min_im
    }

    /// Rejects non-finite, inverted and zero-area rectangles.
    pub fn validate(&self) -> Result<(), Error> {
        let edges = [self.min_re, self.max_re, self.min_im, self.max_im];
        if edges.iter().any(|e| !e.is_finite()) {
            return Err(Error::BadDomain("every edge must be finite".to_string()));
        }
        if self.max_re <= self.min_re {
            return Err(Error::BadDomain(format!(
                "the left edge {} is not to the left of the right edge {}",
                self.min_re, self.max_re
            )));
        }
        if self.max_im <= self.min_im {
            return Err(Error::BadDomain(format!(
                "the bottom edge {} is not below the top edge {}",
                self.min_im, self.max_im
            )));
        }
        Ok(())
    }
}

/// Describes the x, y of a pixel: column, then row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels of a width × height grid onto points of a domain.
#[derive(Clone, Debug)]
pub struct PlaneMapper {
    width: usize,
    height: usize,
    domain: Domain,
    // Pixels per unit of the complex plane, horizontally and vertically.
    grid_factors: (f64, f64),
}

impl PlaneMapper {
    /// Checks the size and the domain, and derives the scale between them.
    pub fn new(width: usize, height: usize, domain: Domain) -> Result<PlaneMapper, Error> {
        if width == 0 || height == 0 {
            return Err(Error::BadResolution(width, height));
        }
        domain.validate()?;
        let grid_factors = (
            (width as f64) / domain.width(),
            (height as f64) / domain.height(),
        );
        Ok(PlaneMapper {
            width,
            height,
            domain,
            grid_factors,
        })
    }

    /// Pixels across.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Pixels down.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The domain being sampled.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Never true: a mapper cannot be built without area.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Given a pixel on the integral cartesian plane, map its upper-left
    /// corner to the corresponding point on the complex plane.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex {
        Complex::new(
            (pixel.0 as f64) / self.grid_factors.0 + self.domain.min_re,
            self.domain.max_im - (pixel.1 as f64) / self.grid_factors.1,
        )
    }
}
