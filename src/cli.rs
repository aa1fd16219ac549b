use lexopt::prelude::*;
use std::path::PathBuf;

/// Parsed command-line arguments
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Cli {
    /// Path to an alternative configuration file
    pub(crate) config: Option<PathBuf>,
}

/// What the process should do after argument parsing
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum CliAction {
    Run(Cli),
    Help,
    Version,
}

impl Cli {
    pub(crate) fn from_env() -> Result<CliAction, lexopt::Error> {
        Cli::from_parser(lexopt::Parser::from_env())
    }

    fn from_parser(mut parser: lexopt::Parser) -> Result<CliAction, lexopt::Error> {
        let mut cli = Cli::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('h') | Long("help") => return Ok(CliAction::Help),
                Short('V') | Long("version") => return Ok(CliAction::Version),
                Short('c') | Long("config") => {
                    cli.config = Some(PathBuf::from(parser.value()?));
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(CliAction::Run(cli))
    }
}
