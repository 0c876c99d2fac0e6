//! `friendlylink` - CLI for the volunteer and elderly records manager.
//!
//! Runs an interactive shell by default, or a single command via `exec`.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};

use friendlylink::cli::render::{render_json, render_lists};
use friendlylink::cli::{Cli, Command, ConfigCommand, ExecCommand, ListCommand, OutputFormat};
use friendlylink::{init_logging, Config, Logic};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("failed to load configuration")?;

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => run_shell(&config),
        Command::Exec(exec) => run_exec(&config, &exec),
        Command::List(list) => handle_list(&config, &list),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn run_shell(config: &Config) -> Result<()> {
    let mut logic = Logic::open(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Welcome to FriendlyLink! Type `help` to see the commands.");
    if config.shell.echo_results {
        print!("{}", render_lists(logic.model()));
    }

    loop {
        print!("{}", config.shell.prompt);
        stdout.flush().context("failed to write prompt")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read from standard input")?;
        if read == 0 {
            debug!("End of input");
            println!();
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        match logic.execute(&line) {
            Ok(result) => {
                println!("{}", result.feedback);
                if result.show_lists && config.shell.echo_results {
                    print!("{}", render_lists(logic.model()));
                }
                if result.exit {
                    return Ok(());
                }
            }
            Err(e) if e.is_user_error() => println!("{e}"),
            Err(e) => {
                error!(error = %e, "Command could not be completed");
                println!("{e}");
            }
        }
    }
}

fn run_exec(config: &Config, exec: &ExecCommand) -> Result<()> {
    let mut logic = Logic::open(config);
    let result = logic.execute(&exec.line())?;
    println!("{}", result.feedback);
    if exec.show {
        print!("{}", render_lists(logic.model()));
    }
    Ok(())
}

fn handle_list(config: &Config, list: &ListCommand) -> Result<()> {
    let logic = Logic::open(config);
    match list.format {
        OutputFormat::Plain => print!("{}", render_lists(logic.model())),
        OutputFormat::Json => println!("{}", render_json(logic.model())?),
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Data directory:     {}", config.data_dir().display());
                println!("  Volunteers file:    {}", config.volunteers_path().display());
                println!("  Elderly file:       {}", config.elderly_path().display());
                println!("  Pairs file:         {}", config.pairs_path().display());
                println!("  Seed sample data:   {}", config.storage.seed_sample_data);
                println!();
                println!("[Shell]");
                println!("  Prompt:             {:?}", config.shell.prompt);
                println!("  Echo results:       {}", config.shell.echo_results);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
