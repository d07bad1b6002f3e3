//! selectkit-term: pick one value from a list in the terminal.
//!
//! Prints the committed selection on stdout when focus leaves the widget
//! (Tab). Logs go to a file because the terminal is in raw mode.

mod app;
mod error;
mod filter;
mod render;
mod surface;
mod terminal;

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;
use selectkit::ComboboxConfig;
use serde_json::Value;
use simplelog::{Config, LevelFilter, WriteLogger};

use app::{Flow, Picker, PickerOptions};
use error::TermError;
use surface::TermSurface;
use terminal::Terminal;

#[derive(Parser, Debug)]
#[command(name = "selectkit-term", version, about = "Interactive terminal combobox")]
struct Args {
    /// Options to pick from
    #[arg(value_name = "OPTION")]
    options: Vec<String>,

    /// Read options from a file: a JSON array, or one option per line
    #[arg(short = 'f', long, value_name = "PATH", conflicts_with = "options")]
    options_file: Option<PathBuf>,

    /// JSON combobox configuration
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Field of record options shown and matched as text
    #[arg(long)]
    search_field: Option<String>,

    /// Initially selected option label
    #[arg(long)]
    selected: Option<String>,

    /// Only accept typed text that equals an option label
    #[arg(long)]
    strict: bool,

    /// Scroll the selection into view when the list opens
    #[arg(long)]
    scroll: bool,

    #[arg(long, default_value = "selectkit-term.log")]
    log_file: PathBuf,

    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(Some(selection)) => {
            println!("{}", selection);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> Result<Option<String>, TermError> {
    let log_file = File::create(&args.log_file).map_err(|source| TermError::File {
        path: args.log_file.clone(),
        source,
    })?;
    WriteLogger::init(args.log_level, Config::default(), log_file)?;

    let mut config = match &args.config {
        Some(path) => ComboboxConfig::from_json(&read(path)?)?,
        None => ComboboxConfig::new("selectkit"),
    };
    if let Some(field) = args.search_field {
        config = config.search_field(field);
    }
    if args.scroll {
        config = config.scroll_to_selection(true);
    }

    let options = match &args.options_file {
        Some(path) => load_options(path)?,
        None => args.options.into_iter().map(Value::String).collect(),
    };
    if options.is_empty() {
        return Err(TermError::NoOptions);
    }

    let mut terminal = Terminal::new()?;
    let (_, height) = terminal.size()?;
    let surface = Rc::new(TermSurface::new((height as usize).saturating_sub(1)));
    let mut picker = Picker::new(
        config,
        options,
        PickerOptions {
            strict: args.strict,
            selected: args.selected,
        },
        surface,
    );

    let flow = picker.run(&mut terminal)?;
    drop(terminal);

    log::info!("selectkit-term finished flow={:?}", flow);
    Ok(match flow {
        Flow::Finish => picker.selection_text(),
        Flow::Abort | Flow::Continue => None,
    })
}

fn read(path: &Path) -> Result<String, TermError> {
    fs::read_to_string(path).map_err(|source| TermError::File {
        path: path.to_path_buf(),
        source,
    })
}

fn load_options(path: &Path) -> Result<Vec<Value>, TermError> {
    let text = read(path)?;
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(&text).map_err(|source| TermError::Options {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Value::String(line.to_string()))
        .collect())
}
