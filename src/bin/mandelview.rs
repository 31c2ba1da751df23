extern crate clap;
extern crate mandelview;
extern crate minifb;
extern crate num;

use clap::{App, Arg, ArgMatches};
use mandelview::{Color, Renderer, Viewport};
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use num::Complex;
use std::str::FromStr;
use std::time::Instant;

/// One zoom step multiplies the pixel size by this; `=` and scroll-up
/// magnify, `-` and scroll-down back out by the reciprocal.
const ZOOM_STEP: f64 = 0.9;

/// One pan keystroke moves the view by this many pixels.
const PAN_STEP: f64 = 40.0;

/// Given a string and a separator, returns the two values separated
/// by the separator.
fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

/// A specific implementation of parse_pair using a comma and expecting
/// floating point numbers.
fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_zoom(s: String) -> Result<(), String> {
    match f64::from_str(&s) {
        Ok(z) if z.is_finite() && z > 0.0 => Ok(()),
        _ => Err("zoom must be a positive, finite number".to_string()),
    }
}

const SIZE: &str = "size";
const ZOOM: &str = "zoom";
const CENTER: &str = "center";

fn args<'a>() -> ArgMatches<'a> {
    App::new("mandelview")
        .version("0.1.0")
        .about("Interactive Mandelbrot set explorer")
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("960x540")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse the window size"))
                .help("Size of the render window, WIDTHxHEIGHT"),
        )
        .arg(
            Arg::with_name(ZOOM)
                .required(false)
                .long(ZOOM)
                .short("z")
                .takes_value(true)
                .default_value("0.004")
                .validator(validate_zoom)
                .help("Initial width of one pixel in plane units; smaller is deeper"),
        )
        .arg(
            Arg::with_name(CENTER)
                .required(false)
                .long(CENTER)
                .short("c")
                .takes_value(true)
                .default_value("-0.7,0.0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse the center point"))
                .help("Initial center of the viewport on the complex plane"),
        )
        .get_matches()
}

/// Repack the rendered grid into the 0RGB words minifb presents.
fn pack(framebuffer: &mut [u32], cells: &[Color]) {
    for (word, color) in framebuffer.iter_mut().zip(cells) {
        *word = color.to_u32();
    }
}

fn main() {
    let matches = args();
    let (width, height) = parse_pair(matches.value_of(SIZE).unwrap(), 'x')
        .expect("Error parsing window dimensions");
    let zoom = f64::from_str(matches.value_of(ZOOM).unwrap()).expect("Error parsing zoom");
    let center =
        parse_complex(matches.value_of(CENTER).unwrap()).expect("Error parsing center point");

    let renderer = match Renderer::new(width, height) {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("Cannot set up renderer: {}", e);
            std::process::exit(1);
        }
    };
    let mut view = match Viewport::new(zoom, center) {
        Ok(view) => view,
        Err(e) => {
            eprintln!("Cannot set up viewport: {}", e);
            std::process::exit(1);
        }
    };

    let mut window = match Window::new("Mandelbrot", width, height, WindowOptions::default()) {
        Ok(window) => window,
        Err(e) => {
            eprintln!("Cannot open a window: {}", e);
            std::process::exit(1);
        }
    };
    window.set_target_fps(60);

    println!("Keys: = / - or the scroll wheel to zoom, W/A/S/D to pan, Escape to quit");

    let mut cells = vec![Color::default(); width * height];
    let mut framebuffer = vec![0u32; width * height];
    let mut dirty = true;
    let mut prev_scroll: Option<(f32, f32)> = None;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let mut next = view;
        if window.is_key_pressed(Key::Equal, KeyRepeat::Yes) {
            next = next.zoomed(ZOOM_STEP).unwrap_or(next);
        }
        if window.is_key_pressed(Key::Minus, KeyRepeat::Yes) {
            next = next.zoomed(1.0 / ZOOM_STEP).unwrap_or(next);
        }
        if window.is_key_pressed(Key::W, KeyRepeat::Yes) {
            next = next.panned(0.0, -PAN_STEP);
        }
        if window.is_key_pressed(Key::S, KeyRepeat::Yes) {
            next = next.panned(0.0, PAN_STEP);
        }
        if window.is_key_pressed(Key::A, KeyRepeat::Yes) {
            next = next.panned(-PAN_STEP, 0.0);
        }
        if window.is_key_pressed(Key::D, KeyRepeat::Yes) {
            next = next.panned(PAN_STEP, 0.0);
        }

        // The wheel value persists while the frame shows it; only act
        // on a change so one notch means one step.
        match window.get_scroll_wheel() {
            Some(scroll) => {
                if prev_scroll != Some(scroll) {
                    let factor = if scroll.1 > 0.0 { ZOOM_STEP } else { 1.0 / ZOOM_STEP };
                    next = next.zoomed(factor).unwrap_or(next);
                    prev_scroll = Some(scroll);
                }
            }
            None => {
                prev_scroll = None;
            }
        }

        if next != view {
            view = next;
            dirty = true;
        }

        if dirty {
            let start = Instant::now();
            renderer.render(&view, &mut cells);
            pack(&mut framebuffer, &cells);
            window.set_title(&format!(
                "Mandelbrot  center {:.6},{:.6}  zoom {:.3e}  rendered in {:?}",
                view.center().re,
                view.center().im,
                view.zoom(),
                start.elapsed(),
            ));
            dirty = false;
        }

        window
            .update_with_buffer(&framebuffer, width, height)
            .expect("Cannot present the framebuffer");
    }
}
