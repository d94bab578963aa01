// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a binary tree to SVG and replays pointer clicks and insertions.
//!
//! Examples:
//!   `cargo run -p arbor_demos -- --sample --out tree.svg`
//!   `cargo run -p arbor_demos -- --seed 3 --depth 4 --density 0.6 --out random.svg`
//!   `cargo run -p arbor_demos -- --sample --click 350,25 --click 200,225 --insert left:7`
//!
//! Set `RUST_LOG=arbor_engine=debug` to see layout and selection events.

use std::fs;
use std::path::PathBuf;

use arbor_demos::{InsertCommand, parse_insert, parse_point, random_tree, sample_tree};
use arbor_engine::TreeLayoutEngine;
use arbor_surface_svg::SvgSurface;
use clap::Parser;
use kurbo::{Point, Size};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "arbor_demo", about = "Lay out, click and grow a binary tree")]
struct Args {
    /// Surface width.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Surface height.
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Use the fixed six-node sample tree instead of a random one.
    #[arg(long)]
    sample: bool,

    /// Seed for the random tree.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Deepest level of the random tree (the root is level 0).
    #[arg(long, default_value_t = 3)]
    depth: usize,

    /// Probability that each child of a random node exists.
    #[arg(long, default_value_t = 0.75)]
    density: f64,

    /// Pointer click at `X,Y`, replayed in order.
    #[arg(long = "click", value_name = "X,Y", value_parser = parse_point)]
    clicks: Vec<Point>,

    /// Insertion at the current selection, `SIDE:VALUE`, applied after clicks.
    #[arg(long = "insert", value_name = "SIDE:VALUE", value_parser = parse_insert)]
    inserts: Vec<InsertCommand>,

    /// Where to write the SVG; stdout when absent.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let tree = if args.sample {
        sample_tree()
    } else {
        random_tree(&mut SmallRng::seed_from_u64(args.seed), args.depth, args.density)
    };

    let mut engine = TreeLayoutEngine::with_tree(tree);
    engine.set_selection_callback(|change| {
        let value = change.value().map_or_else(|| "-".to_string(), u32::to_string);
        eprintln!(
            "selected: {value}  root: {}  depth: {}",
            change.root_label(),
            change.depth_label()
        );
    });

    let mut surface = SvgSurface::new(Size::new(args.width, args.height));
    engine.draw(&mut surface);

    for click in args.clicks {
        if !engine.handle_pointer(click, &mut surface) {
            eprintln!("click at ({}, {}): selection unchanged", click.x, click.y);
        }
    }

    for InsertCommand { side, value } in args.inserts {
        engine.insert_named(value, &side)?;
    }
    engine.draw(&mut surface);

    let svg = surface.to_svg();
    match args.out {
        Some(path) => {
            fs::write(&path, svg)?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{svg}"),
    }
    Ok(())
}
