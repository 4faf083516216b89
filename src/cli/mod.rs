//! The selkit Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::{info, LevelFilter};

use crate::cli::args::{Command, SelkitArgs};
use crate::diagnostics::{print_error, Result, SelkitError};
use crate::json::{from_json, to_json, to_json_pretty};
use crate::selector::{CompoundSelector, Selector};
use crate::shapes::Rectangle;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = SelkitArgs::parse();
    init_logging(args.verbose);

    let result = match args.command {
        Command::Build {
            element,
            id,
            class,
            attr,
            pseudo_class,
            pseudo_element,
        } => handle_build(&Fragments {
            element,
            id,
            class,
            attr,
            pseudo_class,
            pseudo_element,
        }),
        Command::Render { file, json } => handle_render(file.as_deref(), json),
        Command::Rect {
            width,
            height,
            area,
        } => handle_rect(width, height, area),
    };

    if let Err(e) = result {
        print_error(e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Fragment values collected from `build` flags, each list in flag order.
#[derive(Debug, Default)]
pub struct Fragments {
    pub element: Vec<String>,
    pub id: Vec<String>,
    pub class: Vec<String>,
    pub attr: Vec<String>,
    pub pseudo_class: Vec<String>,
    pub pseudo_element: Vec<String>,
}

impl Fragments {
    /// Feeds every value through the builder. A repeated singular flag
    /// fails exactly as a repeated builder call does.
    pub fn build(&self) -> Result<CompoundSelector> {
        let mut selector = CompoundSelector::new();
        for value in &self.element {
            selector = selector.element(value.as_str())?;
        }
        for value in &self.id {
            selector = selector.id(value.as_str())?;
        }
        for value in &self.class {
            selector = selector.class(value.as_str());
        }
        for value in &self.attr {
            selector = selector.attr(value.as_str())?;
        }
        for value in &self.pseudo_class {
            selector = selector.pseudo_class(value.as_str());
        }
        for value in &self.pseudo_element {
            selector = selector.pseudo_element(value.as_str())?;
        }
        Ok(selector)
    }
}

fn handle_build(fragments: &Fragments) -> Result<()> {
    let selector = fragments.build()?;
    output::print_selector(&selector.stringify());
    Ok(())
}

fn handle_render(file: Option<&Path>, json: bool) -> Result<()> {
    let text = read_input(file)?;
    let selector: Selector = from_json(&text)?;
    info!("rendering selector with {} compound(s)", selector.compound_count());
    if json {
        output::print_plain(&to_json_pretty(&selector)?);
    } else {
        output::print_selector(&selector.stringify());
    }
    Ok(())
}

fn handle_rect(width: u32, height: u32, area: bool) -> Result<()> {
    let rectangle = Rectangle::new(width, height);
    if area {
        output::print_plain(&rectangle.get_area().to_string());
    } else {
        output::print_plain(&to_json(&rectangle)?);
    }
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| SelkitError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| SelkitError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(text)
        }
    }
}
