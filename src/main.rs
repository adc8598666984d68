//! CivicTrack CLI entry point.

use civictrack::cli::commands;
use civictrack::cli::{Cli, Commands, IssueCommands, UserCommands};
use civictrack::error::Error;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Set up tracing based on verbosity
    init_tracing(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                eprintln!("{}", e.to_structured_json());
            } else if !cli.quiet {
                if let Some(hint) = e.hint() {
                    eprintln!("Error: {e}\n  Hint: {hint}");
                } else {
                    eprintln!("Error: {e}");
                }
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    if quiet {
        return;
    }

    // Honor RUST_LOG if set, otherwise use verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug,rusqlite=info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    let db = cli.db.as_ref();
    let json = cli.json;

    match &cli.command {
        Commands::Init { force } => commands::init::execute(*force, db, json),

        Commands::Register(args) => commands::auth::execute_register(args, db, json),
        Commands::Login { email, password } => {
            commands::auth::execute_login(email, password.as_deref(), db, json)
        }
        Commands::Logout => commands::auth::execute_logout(db, json),
        Commands::Whoami => commands::auth::execute_whoami(db, json),

        Commands::Report(args) => commands::report::execute(args, db, json),

        Commands::Issue { command } => match command {
            IssueCommands::List(args) => commands::issue::execute_list(args, db, json),
            IssueCommands::Show { id } => commands::issue::execute_show(*id, db, json),
            IssueCommands::Mine => commands::issue::execute_mine(db, json),
        },

        Commands::User { command } => match command {
            UserCommands::List => commands::user::execute_list(db, json),
            UserCommands::Export { output } => {
                commands::user::execute_export(output.as_ref(), db, json)
            }
            UserCommands::Clear { force } => commands::user::execute_clear(*force, db, json),
        },

        Commands::Completions { shell } => commands::completions::execute(shell),
        Commands::Version => commands::version::execute(db, json),
    }
}
