use clap::{Parser, Subcommand};
use nova::config::Persona;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "nova")]
#[command(version)]
#[command(about = "Offline scripted voice assistant")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single command
    Ask {
        /// What you would have said
        text: String,

        /// Assistant to answer (nova or jarvis)
        #[arg(short, long)]
        persona: Option<Persona>,

        /// Block until timers set by this command have fired
        #[arg(short, long)]
        wait: bool,
    },

    /// Interactive session, one command per line
    Repl {
        /// Assistant to answer (nova or jarvis)
        #[arg(short, long)]
        persona: Option<Persona>,
    },

    /// Show which category a command falls into
    Classify {
        /// Command text
        text: String,
    },

    /// Manage saved notes
    #[command(subcommand)]
    Notes(NotesCommands),

    /// View or set configuration
    Config {
        /// Config key
        key: Option<String>,

        /// Config value
        value: Option<String>,
    },
}

#[derive(Subcommand)]
enum NotesCommands {
    /// List saved notes
    List,

    /// Delete every note
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Export notes to stdout
    Export {
        /// Output format
        #[arg(short, long, default_value = "json", value_parser = ["json", "md"])]
        format: String,
    },
}

fn main() {
    // Logs go to stderr so responses on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("NOVA_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ask {
            text,
            persona,
            wait,
        } => cli::ask::run_ask(&text, persona, wait),
        Commands::Repl { persona } => cli::ask::run_repl(persona),
        Commands::Classify { text } => cli::ask::run_classify(&text),
        Commands::Notes(cmd) => match cmd {
            NotesCommands::List => cli::notes::run_list(),
            NotesCommands::Clear { force } => cli::notes::run_clear(force),
            NotesCommands::Export { format } => cli::notes::run_export(&format),
        },
        Commands::Config { key, value } => cli::config::run_config(key.as_deref(), value.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
