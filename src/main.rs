mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
use crate::app::App;
use crate::cli::{Cli, CliAction};
use crate::config::Config;
use anyhow::Context;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

static HELP: &str = "\
Usage: arcsnake [options]

A terminal snake that moves in circular arcs on a toroidal playfield.  Steer
with the left & right arrow keys (or a/d, or h/l); quit with q or Ctrl-C.

Options:
  -c, --config <PATH>   Read configuration from <PATH>
  -h, --help            Print this help and exit
  -V, --version         Print the program version and exit
";

fn main() -> ExitCode {
    let cli = match Cli::from_env() {
        Ok(CliAction::Run(cli)) => cli,
        Ok(CliAction::Help) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Ok(CliAction::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("arcsnake: {e}");
            return ExitCode::from(2);
        }
    };
    exit_code(run(cli))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match cli.config {
        Some(ref path) => Config::load(path, false)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Config::load(&Config::default_path()?, true)?,
    };
    let terminal = ratatui::init();
    let r = App::new(config.field).run(terminal);
    ratatui::restore();
    r.map_err(Into::into)
}

fn exit_code(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("arcsnake: {e:#}");
            ExitCode::from(2)
        }
    }
}
