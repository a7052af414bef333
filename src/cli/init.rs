use clap::Parser;
use std::path::PathBuf;

use crate::domain::request::DEFAULT_ENTRY_POINT;

/// Arguments for the init command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Scaffold a service:\n    fnship init ./inegi_localizacion\n\n\
                  Use a different handler name:\n    fnship init ./svc --entry-point handle")]
pub struct InitArgs {
    /// Directory to create (must be empty or missing)
    pub dir: PathBuf,

    /// Name of the generated HTTP handler in main.py
    #[arg(long, default_value = DEFAULT_ENTRY_POINT)]
    pub entry_point: String,
}
