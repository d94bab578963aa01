// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=arbor_surface --heading-base-level=0

//! Arbor Surface: the drawing contract between the tree engine and a canvas.
//!
//! The engine does not own or create surfaces. It only needs the current
//! size and four primitives, expressed as plain data so that backends can
//! replay, record, or export them:
//!
//! - [`DrawOp::Clear`]: reset a region to the background.
//! - [`DrawOp::StrokeCircle`]: outline a circle.
//! - [`DrawOp::StrokeLine`]: a straight segment.
//! - [`DrawOp::FillText`]: text centred (horizontally and vertically) on an
//!   anchor point.
//!
//! Backends implement [`Surface`]; callers usually go through the
//! [`SurfaceExt`] helpers, which build the ops.
//!
//! # Example
//!
//! ```rust
//! use arbor_surface::{Color, DrawOp, Surface, SurfaceExt};
//! use kurbo::{Circle, Size};
//!
//! #[derive(Default)]
//! struct Log(Vec<DrawOp>);
//!
//! impl Surface for Log {
//!     fn size(&self) -> Size {
//!         Size::new(100.0, 100.0)
//!     }
//!     fn draw(&mut self, op: DrawOp) {
//!         self.0.push(op);
//!     }
//! }
//!
//! let mut log = Log::default();
//! log.clear_all();
//! log.stroke_circle(Circle::new((50.0, 50.0), 10.0), Color::BLACK);
//! log.fill_text("42", (50.0, 50.0), 9.0, Color::BLACK);
//! assert_eq!(log.0.len(), 3);
//! ```

#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};

use kurbo::{Circle, Line, Point, Rect, Size};
pub use peniko::Color;

/// Draw operations understood by every surface.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Reset the given region to the surface background.
    Clear(Rect),
    /// Outline `circle` with a thin stroke.
    StrokeCircle {
        /// Circle geometry in surface coordinates.
        circle: Circle,
        /// Stroke color.
        color: Color,
    },
    /// Stroke a straight segment.
    StrokeLine {
        /// Segment geometry in surface coordinates.
        line: Line,
        /// Stroke color.
        color: Color,
    },
    /// Fill `text` centred on `anchor`.
    FillText {
        /// Text to render.
        text: String,
        /// Centre of the rendered text.
        anchor: Point,
        /// Font size in surface units.
        font_size: f64,
        /// Fill color.
        color: Color,
    },
}

impl DrawOp {
    /// Returns `true` for [`DrawOp::Clear`].
    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Clear(_))
    }
}

/// A drawing surface.
///
/// Implementations must apply ops in the order they are received. The size
/// may change between calls (for example after a window resize); callers
/// query it at the start of every full redraw.
pub trait Surface {
    /// Current drawable size in surface units.
    fn size(&self) -> Size;

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn draw(&mut self, op: DrawOp) {
        (**self).draw(op);
    }
}

/// Convenience helpers on top of [`Surface`].
pub trait SurfaceExt: Surface {
    /// Clear `rect`.
    fn clear(&mut self, rect: Rect) {
        self.draw(DrawOp::Clear(rect));
    }

    /// Clear the whole surface.
    fn clear_all(&mut self) {
        let rect = self.size().to_rect();
        self.clear(rect);
    }

    /// Outline a circle.
    fn stroke_circle(&mut self, circle: Circle, color: Color) {
        self.draw(DrawOp::StrokeCircle { circle, color });
    }

    /// Stroke a segment.
    fn stroke_line(&mut self, line: Line, color: Color) {
        self.draw(DrawOp::StrokeLine { line, color });
    }

    /// Fill `text` centred on `anchor`.
    fn fill_text(&mut self, text: &str, anchor: impl Into<Point>, font_size: f64, color: Color) {
        self.draw(DrawOp::FillText {
            text: text.to_string(),
            anchor: anchor.into(),
            font_size,
            color,
        });
    }
}

impl<S: Surface + ?Sized> SurfaceExt for S {}
