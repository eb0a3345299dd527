// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[macro_use]
extern crate log;

use clap::{App, Arg, ArgMatches};
use complexplot::{presets, Complex, Domain, Error, Renderer};
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex::new(re, im)),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_positive(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(f) if f.is_finite() && f > 0.0 => Ok(()),
        _ => Err(err.to_string()),
    }
}

fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> Option<T> {
    matches.value_of(name).and_then(|s| T::from_str(s).ok())
}

const PLOT: &str = "plot";
const OUTPUT: &str = "output";
const SIZE: &str = "size";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const RADIUS: &str = "radius";
const TOLERANCE: &str = "tolerance";
const LIST: &str = "list";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("cplot")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Complex function plotter")
        .arg(
            Arg::with_name(PLOT)
                .required_unless(LIST)
                .index(1)
                .help("Name of the plot to render; see --list"),
        )
        .arg(
            Arg::with_name(LIST)
                .long(LIST)
                .help("List the available plots and exit"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .required_unless(LIST)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file; the format follows the extension"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x600")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse left lower corner"))
                .help("Left lower corner of the plotted region, as re,im"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse right upper corner"))
                .help("Right upper corner of the plotted region, as re,im"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in the renderer; defaults to one per core"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1u32,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Iteration cap for escape-time and root plots"),
        )
        .arg(
            Arg::with_name(RADIUS)
                .required(false)
                .long(RADIUS)
                .takes_value(true)
                .validator(|s| validate_positive(&s, "Escape radius must be a positive number"))
                .help("Escape radius for escape-time plots"),
        )
        .arg(
            Arg::with_name(TOLERANCE)
                .required(false)
                .long(TOLERANCE)
                .takes_value(true)
                .validator(|s| validate_positive(&s, "Tolerance must be a positive number"))
                .help("Convergence tolerance for root plots"),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    if matches.is_present(LIST) {
        for name in presets::names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let name = matches.value_of(PLOT).unwrap_or_default();
    let mut builder = presets::preset(name)?;

    if let Some((width, height)) = matches.value_of(SIZE).and_then(|s| parse_pair::<u16>(s, 'x')) {
        builder = builder.size(usize::from(width), usize::from(height));
    }
    let domain = builder.current_domain();
    let leftlower = matches
        .value_of(LEFTLOWER)
        .and_then(parse_complex)
        .unwrap_or_else(|| Complex::new(domain.min_re, domain.min_im));
    let rightupper = matches
        .value_of(RIGHTUPPER)
        .and_then(parse_complex)
        .unwrap_or_else(|| Complex::new(domain.max_re, domain.max_im));
    builder = builder.domain(Domain::from_corners(leftlower, rightupper));
    if let Some(iterations) = value(matches, ITERATIONS) {
        builder = builder.max_iterations(iterations);
    }
    if let Some(radius) = value(matches, RADIUS) {
        builder = builder.escape_radius(radius);
    }
    if let Some(tolerance) = value(matches, TOLERANCE) {
        builder = builder.tolerance(tolerance);
    }

    let threads = value(matches, THREADS).unwrap_or_else(num_cpus::get);
    let renderer = Renderer::new(builder.build()?);
    let frame = renderer.render_threaded(threads, None)?;

    let output = matches.value_of(OUTPUT).unwrap_or_default();
    frame.save(output)?;
    info!("wrote {} to {}", name, output);
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
