use clap::Parser;
use roster::commands::{CmdMessage, CmdResult};
use roster::config::RosterConfig;
use roster::error::Result;
use roster::parser::parse_command;
use roster::store::memory::InMemoryStore;
use roster::store::PersonStore;
use std::io::{self, BufRead, IsTerminal, Write};

mod args;
mod print;
use args::Cli;
use print::{print_messages, print_persons};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_dir = RosterConfig::default_dir()?;
    let config = RosterConfig::load(&config_dir)?;

    let seed = cli.roster.or_else(|| config.roster_path(&config_dir));
    let mut store = match seed {
        Some(path) => InMemoryStore::load(path)?,
        None => InMemoryStore::new(),
    };

    if !cli.line.is_empty() {
        let result = execute_line(&mut store, &cli.line.join(" "))?;
        print_result(&result);
        return Ok(());
    }

    run_interactive(&mut store, &config.prompt)
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn execute_line<S: PersonStore>(store: &mut S, line: &str) -> Result<CmdResult> {
    let command = parse_command(line)?;
    Ok(command.execute(store)?)
}

fn run_interactive<S: PersonStore>(store: &mut S, prompt: &str) -> Result<()> {
    let stdin = io::stdin();
    let show_prompt = stdin.is_terminal();
    let mut input = stdin.lock();

    loop {
        if show_prompt {
            print!("{}", prompt);
            io::stdout().flush()?;
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match execute_line(store, &line) {
            Ok(result) => {
                print_result(&result);
                if result.exit {
                    break;
                }
            }
            Err(e) => print_messages(&[CmdMessage::error(e.to_string())]),
        }
    }

    Ok(())
}

fn print_result(result: &CmdResult) {
    print_persons(&result.listed_persons);
    print_messages(&result.messages);
}
