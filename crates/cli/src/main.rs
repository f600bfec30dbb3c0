use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use filter_model::filter::FieldPath;
use input::read_input;
use filter_planner::{
    HqlFilterCompiler,
    query::document::{compile_predicate_document, compile_tree_document},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod input;
mod output;

#[derive(Parser)]
#[command(
    name = "filterc",
    version = "0.1.0",
    about = "Compiles filter expressions into HQL WHERE clauses"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Logs go to stderr so stdout carries only the compiled clause
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            input,
            config,
            max_depth,
            json,
        } => {
            let settings = config::load_settings(config.as_deref(), max_depth)?;
            info!("Compiling filter tree from {input} (max depth: {:?})", settings.max_depth);

            let source = read_input(&input)?;
            let clause = compile_tree_document(&HqlFilterCompiler::new(settings), &source)?;
            println!("{}", output::render_clause(&clause, json)?);
        }
        Commands::CompileAll {
            input,
            config,
            json,
        } => {
            let settings = config::load_settings(config.as_deref(), None)?;
            info!("Compiling predicate list from {input}");

            let source = read_input(&input)?;
            let clause = compile_predicate_document(&HqlFilterCompiler::new(settings), &source)?;
            println!("{}", output::render_clause(&clause, json)?);
        }
        Commands::Params { path } => {
            let path: FieldPath = path.parse()?;
            println!("{}", output::describe_path(&path));
        }
    }

    Ok(())
}
