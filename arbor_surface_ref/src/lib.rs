// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=arbor_surface_ref --heading-base-level=0

//! Arbor Surface Reference Backend.
//!
//! This crate provides a small implementation of [`Surface`] for **op
//! recording**.
//!
//! It is intentionally *not* a renderer:
//! - It does **not** rasterize to pixels.
//! - It is intended primarily for tests and debugging that want to assert on
//!   emitted ops, for example "an empty tree draws nothing" or "the selected
//!   node is stroked red".

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use arbor_surface::{Color, DrawOp, Surface};
use kurbo::{Circle, Line, Point, Size};

/// A text op as seen by [`RefSurface::texts`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextRecord<'a> {
    /// The text.
    pub text: &'a str,
    /// Centre point.
    pub anchor: Point,
    /// Font size.
    pub font_size: f64,
    /// Fill color.
    pub color: Color,
}

/// Recording surface of a fixed (but resizable) size.
///
/// Every op is appended to a log; nothing is interpreted except
/// [`DrawOp::Clear`], which is counted.
#[derive(Clone, Debug)]
pub struct RefSurface {
    size: Size,
    ops: Vec<DrawOp>,
    clears: usize,
}

impl RefSurface {
    /// Creates an empty recording surface of `size`.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
            clears: 0,
        }
    }

    /// Changes the reported size; recorded ops are kept.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// All ops in the order they were applied.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of clear ops seen since creation or the last [`reset`](Self::reset).
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Ops applied after the most recent clear, i.e. the visible frame.
    pub fn frame(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(DrawOp::is_clear)
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }

    /// Stroked circles in the current frame.
    pub fn circles(&self) -> impl Iterator<Item = (Circle, Color)> + '_ {
        self.frame().iter().filter_map(|op| match op {
            DrawOp::StrokeCircle { circle, color } => Some((*circle, *color)),
            _ => None,
        })
    }

    /// Stroked lines in the current frame.
    pub fn lines(&self) -> impl Iterator<Item = (Line, Color)> + '_ {
        self.frame().iter().filter_map(|op| match op {
            DrawOp::StrokeLine { line, color } => Some((*line, *color)),
            _ => None,
        })
    }

    /// Text in the current frame.
    pub fn texts(&self) -> impl Iterator<Item = TextRecord<'_>> + '_ {
        self.frame().iter().filter_map(|op| match op {
            DrawOp::FillText {
                text,
                anchor,
                font_size,
                color,
            } => Some(TextRecord {
                text,
                anchor: *anchor,
                font_size: *font_size,
                color: *color,
            }),
            _ => None,
        })
    }

    /// Forgets all recorded ops and counters.
    pub fn reset(&mut self) {
        self.ops.clear();
        self.clears = 0;
    }
}

impl Surface for RefSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn draw(&mut self, op: DrawOp) {
        if op.is_clear() {
            self.clears += 1;
        }
        self.ops.push(op);
    }
}
