//! rcd CLI - records directory history and emits cd directives for the
//! enclosing shell to evaluate.

use clap::{Parser, Subcommand};
use console::style;

mod commands;

#[derive(Parser)]
#[command(name = "rcd")]
#[command(about = "Change directory through fuzzy, repository, and history pickers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the shell integration snippet (put `eval "$(rcd init)"` in your rc)
    Init,
    /// Record the current directory and print a cd directive
    Cd {
        /// Pick a directory under TARGET with a fuzzy finder
        #[arg(short, long)]
        fuzzy: bool,
        /// Pick a ghq-managed repository checkout
        #[arg(short, long)]
        repo: bool,
        /// Pick from the directory history, most recent first
        #[arg(short = 'H', long)]
        history: bool,
        /// Directory to change to (defaults to home; with --fuzzy, to ".")
        target: Option<String>,
    },
    /// Print the directory history, most recent first
    History,
}

fn main() {
    // Initialize tracing subscriber
    // Respects RUST_LOG environment variable (e.g., RUST_LOG=debug).
    // Diagnostics must go to stderr: stdout is evaluated by the shell.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Cd {
            fuzzy,
            repo,
            history,
            target,
        } => commands::cd::run(fuzzy, repo, history, target.as_deref()),
        Commands::History => commands::history::run(),
    };

    if let Err(err) = result {
        eprintln!("{} {:#}", style("error:").red().bold(), err);
        std::process::exit(1);
    }
}
