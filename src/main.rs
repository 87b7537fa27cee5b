//! Headless viewer CLI for hex grid annotation documents.
//!
//! Loads a saved document and answers the queries a graphical viewer would
//! drive highlighting with: which group covers a pixel, which cells a group
//! owns, and which groups exist.

use std::path::Path;
use std::process::ExitCode;

use hgat::{AnnotationDocument, HexGeometry, HitTester, QueryView, image_info};

const USAGE: &str = "usage: hgat <document.json> <command>

commands:
  groups             list all groups with their colors and cell counts
  cells <group>      list the cells owned by a group
  locate <x> <y>     name the group covering a pixel coordinate";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let (doc_path, command) = match args {
        [doc, rest @ ..] if !rest.is_empty() => (doc, rest),
        _ => return Err(USAGE.to_string()),
    };

    let document = AnnotationDocument::load(Path::new(doc_path)).map_err(|e| e.to_string())?;
    let view = QueryView::new(&document);

    match command {
        [cmd] if cmd == "groups" => {
            for group in document.store().groups() {
                println!("{}\t{}\t{} cells", group.name(), group.color(), group.len());
            }
            Ok(())
        }
        [cmd, group] if cmd == "cells" => {
            let mut cells: Vec<_> = view
                .cells_of(group)
                .map_err(|e| e.to_string())?
                .iter()
                .copied()
                .collect();
            cells.sort();
            for cell in cells {
                println!("{cell}");
            }
            Ok(())
        }
        [cmd, x, y] if cmd == "locate" => {
            let px: f64 = x.parse().map_err(|_| format!("invalid x coordinate {x:?}"))?;
            let py: f64 = y.parse().map_err(|_| format!("invalid y coordinate {y:?}"))?;

            let (width, height) =
                image_info::probe_dimensions(document.image_path()).map_err(|e| e.to_string())?;
            let geometry = HexGeometry::new(f64::from(document.hex_size()), width, height)
                .map_err(|e| e.to_string())?;
            let tester = HitTester::new(geometry);

            match tester.locate(px, py) {
                None => println!("outside grid"),
                Some(cell) => match view.group_of(cell) {
                    Some(name) => println!("{cell}\t{name}"),
                    None => println!("{cell}\tunassigned"),
                },
            }
            Ok(())
        }
        _ => Err(USAGE.to_string()),
    }
}
