//! Command‑line entry point for the `hilbert` tool.
//!
//! Opens the interactive curve window, runs the same session in a terminal,
//! or prints curve points and key bindings.

use std::{
    fmt,
    io::{self, Write},
    process,
};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use hilbertcurve::{
    Action, ControllerConfig, CurveState, KeyMap, Orientation,
    controller::{DEFAULT_CANVAS_SIZE, MAX_LEVEL},
    error::Error,
    keymap,
};
use tracing_subscriber::EnvFilter;

/// CLI command implementations.
mod cmd;
/// Terminal canvas and key source.
mod term;

/// Default side of the terminal canvas, in character cells.
const DEFAULT_TERM_SIZE: u32 = 64;

/// Deepest level accepted on the command line: `4^12` points take 128 MiB.
const MAX_CLI_LEVEL: i64 = 12;

/// Parse an orientation letter for clap.
fn parse_orientation(s: &str) -> Result<Orientation, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

/// Parse a `KEY=ACTION` binding for clap.
fn parse_binding(s: &str) -> Result<(char, Action), String> {
    keymap::parse_binding(s).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "hilbert")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, global = true, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Starting curve shared by every subcommand.
#[derive(Args, Clone, Copy)]
struct CurveArgs {
    #[arg(short = 'l', long = "level", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=MAX_CLI_LEVEL), help = "Recursion depth")]
    /// Recursion depth.
    level: u32,

    #[arg(short = 'o', long = "orientation", default_value = "A", value_parser = parse_orientation, help = "Orientation (A, B, C or D)")]
    /// Orientation.
    orientation: Orientation,
}

/// Key binding overrides for interactive subcommands.
#[derive(Args, Clone)]
struct BindArgs {
    #[arg(
        short = 'b',
        long = "bind",
        value_name = "KEY=ACTION",
        value_parser = parse_binding,
        help = "Rebind a key (actions: decrease, increase, a, b, c, d, quit); repeatable"
    )]
    /// Extra bindings applied over the defaults.
    bind: Vec<(char, Action)>,
}

impl BindArgs {
    /// The default key map with overrides applied in order.
    fn key_map(&self) -> KeyMap {
        let mut keys = KeyMap::default();
        for &(key, action) in &self.bind {
            keys.bind(key, action);
        }
        keys
    }
}

#[derive(Subcommand)]
/// Subcommands supported by the `hilbert` tool.
enum Commands {
    #[command(about = "Open the interactive curve window")]
    /// Open the interactive curve window.
    Gui {
        /// Starting curve.
        #[command(flatten)]
        curve: CurveArgs,

        #[arg(short = 's', long = "size", default_value_t = DEFAULT_CANVAS_SIZE, help = "Canvas size in pixels")]
        /// Canvas side in pixels.
        size: u32,

        /// Key overrides.
        #[command(flatten)]
        bind: BindArgs,
    },

    #[command(about = "Run an interactive session in the terminal, reading keys from stdin")]
    /// Run the interactive session on a text canvas.
    Term {
        /// Starting curve.
        #[command(flatten)]
        curve: CurveArgs,

        #[arg(short = 's', long = "size", default_value_t = DEFAULT_TERM_SIZE, help = "Canvas size in character cells")]
        /// Canvas side in cells.
        size: u32,

        /// Key overrides.
        #[command(flatten)]
        bind: BindArgs,
    },

    #[command(about = "Print the points of a curve, one `x y` pair per line")]
    /// Print the points of one curve.
    Points {
        /// Curve to print.
        #[command(flatten)]
        curve: CurveArgs,

        #[arg(
            long = "pixels",
            value_name = "SIZE",
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Scale points onto a SIZE×SIZE pixel canvas"
        )]
        /// Optional canvas size to scale points onto.
        pixels: Option<u32>,
    },

    #[command(about = "List the effective key bindings")]
    /// List key bindings.
    Keys {
        /// Key overrides.
        #[command(flatten)]
        bind: BindArgs,
    },
}

/// Build a controller configuration from CLI arguments.
fn controller_config(curve: CurveArgs, size: u32, bind: &BindArgs) -> ControllerConfig {
    ControllerConfig {
        canvas_size: size,
        max_level: MAX_LEVEL,
        initial: CurveState {
            depth: curve.level,
            orientation: curve.orientation,
        },
        keys: bind.key_map(),
    }
}

/// Install the tracing subscriber; `RUST_LOG` overrides the `-v` level.
fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Exit with an error message on failure.
fn report<E: fmt::Display>(result: Result<(), E>) {
    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(1);
    }
}

/// Handle the `gui` subcommand.
fn handle_gui(curve: CurveArgs, size: u32, bind: &BindArgs) -> Result<()> {
    hilbert_gui::gui_with_options(hilbert_gui::GuiOptions {
        controller: controller_config(curve, size, bind),
    })
}

/// Handle the `term` subcommand.
fn handle_term(curve: CurveArgs, size: u32, bind: &BindArgs) -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    cmd::term(controller_config(curve, size, bind), stdin, stdout)?;
    Ok(())
}

/// Handle the `points` subcommand.
fn handle_points(curve: CurveArgs, pixels: Option<u32>) -> Result<()> {
    let mut out = io::BufWriter::new(io::stdout().lock());
    cmd::points(curve.level, curve.orientation, pixels, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Handle the `keys` subcommand.
fn handle_keys(bind: &BindArgs) -> Result<()> {
    cmd::keys(&bind.key_map(), &mut io::stdout().lock())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);

    match cli.command {
        Commands::Gui { curve, size, bind } => report(handle_gui(curve, size, &bind)),
        Commands::Term { curve, size, bind } => report(handle_term(curve, size, &bind)),
        Commands::Points { curve, pixels } => report(handle_points(curve, pixels)),
        Commands::Keys { bind } => report(handle_keys(&bind)),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bindings_override_defaults() {
        let cli = Cli::parse_from(["hilbert", "keys", "-b", "a=quit", "--bind", "j=decrease"]);
        let Commands::Keys { bind } = cli.command else {
            panic!("expected keys subcommand");
        };
        let keys = bind.key_map();
        assert_eq!(keys.action('a'), Some(Action::Quit));
        assert_eq!(keys.action('j'), Some(Action::DecreaseLevel));
        assert_eq!(keys.action('s'), Some(Action::IncreaseLevel));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Cli::try_parse_from(["hilbert", "points", "-o", "e"]).is_err());
        assert!(Cli::try_parse_from(["hilbert", "points", "-l", "0"]).is_err());
        assert!(Cli::try_parse_from(["hilbert", "points", "--pixels", "0"]).is_err());
        assert!(Cli::try_parse_from(["hilbert", "points", "-l", "13"]).is_err());
        assert!(Cli::try_parse_from(["hilbert", "points", "-l", "12"]).is_ok());
    }
}
