use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Keep a player roster from the command line", long_about = None)]
pub struct Cli {
    /// JSON file to seed the roster from (overrides the config file)
    #[arg(short, long)]
    pub roster: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// A single command to run instead of reading from stdin,
    /// e.g. `editemail pl/Amy Bee e/amy@example.com`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub line: Vec<String>,
}
