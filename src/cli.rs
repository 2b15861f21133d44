use clap::Parser;
use std::path::PathBuf;

use crate::domain::constants::ROOT_ENV;

#[derive(Parser, Debug)]
#[command(
    name = "airules",
    version,
    about = "Print AI rule documents by alias or relative path",
    after_help = "Run `airules` without arguments to see the known aliases, or `airules list` to see every document."
)]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        env = ROOT_ENV,
        value_name = "DIR",
        help = "Rules root directory (defaults to a `rules` directory next to the executable)"
    )]
    pub root: Option<PathBuf>,
    #[arg(long, help = "Exit non-zero when a query matches nothing")]
    pub strict: bool,
    #[arg(short, long, help = "Enable debug logging on stderr")]
    pub verbose: bool,
    #[arg(help = "Alias, relative document path, or `list`")]
    pub query: Option<String>,
}
