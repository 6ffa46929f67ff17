//! stackstart CLI - pick a stack, get its setup commands

use anyhow::Result;
use clap::{Parser, Subcommand};
use stackstart_core::tui::WizardArgs;
use stackstart_core::{guide, render, Category, Role};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the log filter
const LOG_ENV: &str = "STACKSTART_LOG";

#[derive(Parser, Debug)]
#[command(name = "stackstart")]
#[command(about = "Pick a technology stack and get copyable setup commands")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the stack selection wizard
    Start(StartArgs),
    /// List the available options
    List(ListArgs),
    /// Print illustrative API examples for an auth method
    Examples(ExamplesArgs),
}

#[derive(Parser, Debug, Default)]
pub struct StartArgs {
    /// Language id (e.g. typescript, python)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Backend id (e.g. nodejs-express, firebase)
    #[arg(short, long)]
    pub backend: Option<String>,

    /// Database id (e.g. postgres, mongodb)
    #[arg(short, long)]
    pub database: Option<String>,

    /// Auth method id (e.g. jwt, magic-link)
    #[arg(short, long)]
    pub auth: Option<String>,

    /// Start from the recommended default stack
    #[arg(long)]
    pub defaults: bool,

    /// YAML preset to load (defaults to $STACKSTART_PRESET)
    #[arg(short, long)]
    pub preset: Option<PathBuf>,

    /// Role for API examples (admin, user, viewer)
    #[arg(short, long)]
    pub role: Option<String>,

    /// Show API examples after the setup commands
    #[arg(short, long)]
    pub examples: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Print the selection and commands as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<StartArgs> for WizardArgs {
    fn from(args: StartArgs) -> Self {
        WizardArgs {
            language: args.language,
            backend: args.backend,
            database: args.database,
            auth: args.auth,
            defaults: args.defaults,
            preset: args.preset,
            role: args.role,
            examples: args.examples,
            yes: args.yes,
            json: args.json,
        }
    }
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Category to list (language, backend, database, auth); all if omitted
    pub category: Option<Category>,
}

#[derive(Parser, Debug)]
pub struct ExamplesArgs {
    /// Auth method id
    #[arg(short, long, default_value = "jwt")]
    pub auth: String,

    /// Role (admin, user, viewer)
    #[arg(short, long, default_value = "user")]
    pub role: Role,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn list(args: ListArgs) {
    let categories = match args.category {
        Some(category) => vec![category],
        None => Category::ORDERED.to_vec(),
    };
    for category in categories {
        println!("{}", render::catalog_text(category));
    }
}

fn examples(args: ExamplesArgs) -> Result<()> {
    let auth = args.auth.parse()?;
    let examples = guide::api_examples(auth, args.role)?;
    println!("{}", render::examples_text(args.role, &examples));
    Ok(())
}

fn main() -> Result<()> {
    init_logging();

    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    match args.command {
        Some(Command::Start(start_args)) => {
            let result = stackstart_core::run(start_args.into(), CLI_VERSION);

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        Some(Command::List(list_args)) => {
            list(list_args);
            Ok(())
        }
        Some(Command::Examples(examples_args)) => examples(examples_args),
        None => {
            // No subcommand provided, default to the interactive wizard
            let result = stackstart_core::run(WizardArgs::default(), CLI_VERSION);

            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}
