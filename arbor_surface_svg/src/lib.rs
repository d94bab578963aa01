// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=arbor_surface_svg --heading-base-level=0

//! SVG export surface for Arbor.
//!
//! [`SvgSurface`] records [`DrawOp`]s and can export them as a standalone
//! SVG document, which makes rendered trees easy to inspect in a browser or
//! diff in tests.
//!
//! Mapping:
//! - A clear covering the whole surface starts a new frame: everything drawn
//!   before it is dropped and a white background is emitted. Partial clears
//!   become white `<rect>`s.
//! - Circles are `<circle fill="none">` with a unit-width stroke.
//! - Lines are `<line>` with a unit-width stroke.
//! - Text is `<text>` centred on its anchor with
//!   `text-anchor="middle"` and `dominant-baseline="middle"`.
//!
//! ```rust
//! use arbor_surface::{Color, SurfaceExt};
//! use arbor_surface_svg::SvgSurface;
//! use kurbo::{Circle, Size};
//!
//! let mut surface = SvgSurface::new(Size::new(100.0, 50.0));
//! surface.clear_all();
//! surface.stroke_circle(Circle::new((50.0, 25.0), 10.0), Color::BLACK);
//! surface.fill_text("7", (50.0, 25.0), 9.0, Color::BLACK);
//!
//! let svg = surface.to_svg();
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("<circle cx=\"50\" cy=\"25\" r=\"10\""));
//! assert!(svg.contains(">7</text>"));
//! ```

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use arbor_surface::{DrawOp, Surface};
use kurbo::{Rect, Size};
use peniko::Color;

const FONT_FAMILY: &str = "Arial";

/// A recording SVG surface.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    size: Size,
    ops: Vec<DrawOp>,
}

impl SvgSurface {
    /// Creates an empty surface of `size`.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    /// Changes the surface size used for the next export.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Clears the recorded ops.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Returns the recorded ops.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Export the currently recorded ops as an SVG document.
    ///
    /// The surface size is used both as the SVG `width`/`height` attributes
    /// and for `viewBox="0 0 width height"`.
    pub fn to_svg(&self) -> String {
        render_svg_document(self.size, &self.ops)
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn draw(&mut self, op: DrawOp) {
        // Nothing before a full clear can show up in the export.
        if let DrawOp::Clear(rect) = &op {
            if covers(*rect, self.size) {
                self.ops.clear();
            }
        }
        self.ops.push(op);
    }
}

/// Returns `true` if `rect` covers the whole surface of `size`.
fn covers(rect: Rect, size: Size) -> bool {
    rect.union(size.to_rect()) == rect
}

fn render_svg_document(size: Size, ops: &[DrawOp]) -> String {
    let mut body = String::new();

    for op in ops {
        match op {
            DrawOp::Clear(rect) => {
                // Ops are pruned on draw, but the size may have grown since.
                if covers(*rect, size) {
                    body.clear();
                }
                write_rect(&mut body, *rect);
            }
            DrawOp::StrokeCircle { circle, color } => {
                let _ = write!(
                    body,
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\"",
                    fmt_f64(circle.center.x),
                    fmt_f64(circle.center.y),
                    fmt_f64(circle.radius),
                );
                write_stroke_attrs(&mut body, *color);
                body.push_str("/>");
            }
            DrawOp::StrokeLine { line, color } => {
                let _ = write!(
                    body,
                    "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
                    fmt_f64(line.p0.x),
                    fmt_f64(line.p0.y),
                    fmt_f64(line.p1.x),
                    fmt_f64(line.p1.y),
                );
                write_stroke_attrs(&mut body, *color);
                body.push_str("/>");
            }
            DrawOp::FillText {
                text,
                anchor,
                font_size,
                color,
            } => {
                let (rgb, a) = color_to_svg(*color);
                let _ = write!(
                    body,
                    "<text x=\"{}\" y=\"{}\" font-size=\"{}\" font-family=\"{FONT_FAMILY}\" \
                     text-anchor=\"middle\" dominant-baseline=\"middle\" fill=\"{rgb}\"",
                    fmt_f64(anchor.x),
                    fmt_f64(anchor.y),
                    fmt_f64(*font_size),
                );
                if a < 1.0 {
                    let _ = write!(body, " fill-opacity=\"{}\"", fmt_f32(a));
                }
                body.push('>');
                escape_into(&mut body, text);
                body.push_str("</text>");
            }
        }
    }

    let width = fmt_f64(size.width);
    let height = fmt_f64(size.height);
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    svg.push_str(&body);
    svg.push_str("</svg>");
    svg
}

fn write_rect(out: &mut String, rect: Rect) {
    let _ = write!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#ffffff\"/>",
        fmt_f64(rect.x0),
        fmt_f64(rect.y0),
        fmt_f64(rect.width()),
        fmt_f64(rect.height()),
    );
}

fn write_stroke_attrs(out: &mut String, color: Color) {
    let (rgb, a) = color_to_svg(color);
    let _ = write!(out, " stroke=\"{rgb}\" stroke-width=\"1\"");
    if a < 1.0 {
        let _ = write!(out, " stroke-opacity=\"{}\"", fmt_f32(a));
    }
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = (rgba.a as f32) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn fmt_f64(v: f64) -> String {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "coordinates are exported at f32 precision"
    )]
    let v = v as f32;
    fmt_f32(v)
}

fn fmt_f32(v: f32) -> String {
    // Keep output readable and stable enough for diffing.
    if v.is_finite() {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "best-effort pretty formatting"
        )]
        let i = v as i32;
        let diff = (i as f32) - v;
        if diff > -1e-6 && diff < 1e-6 {
            return format!("{i}");
        }
    } else {
        return format!("{v}");
    }

    let mut s = format!("{:.3}", v);
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
