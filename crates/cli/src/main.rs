use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use model::search::definition::SearchDefinition;
use query_builder::build_query;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser, Debug)]
#[command(
    name = "scoped-search",
    version = "0.1.0",
    about = "Compiles search queries into parameterized SQL conditions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> ExitCode {
    // RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.report());
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Compile {
            definition,
            query,
            output,
        } => {
            let definition = load_definition(&definition).await?;
            let find_params = build_query(&definition, query.as_deref())?;

            info!(
                table = definition.table(),
                params = find_params.params.len(),
                match_all = find_params.is_match_all(),
                "Compiled search query"
            );

            match output {
                Some(path) => output::write_json(&find_params, path).await?,
                None => output::print_json(&find_params)?,
            }
        }
        Commands::Ast { query } => {
            let ast = search_syntax::parse(&query)?;
            output::print_json(&ast)?;
        }
        Commands::Fields { definition } => {
            let definition = load_definition(&definition).await?;
            output::print_json(&output::field_summaries(&definition))?;
        }
    }

    Ok(())
}

async fn load_definition(path: &str) -> Result<SearchDefinition, CliError> {
    let source = tokio::fs::read_to_string(path).await?;
    let definition = SearchDefinition::from_json_str(&source)?;
    debug!(
        path,
        table = definition.table(),
        fields = definition.fields().len(),
        "Loaded search definition"
    );
    Ok(definition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compile_args() {
        let cli = Cli::try_parse_from([
            "scoped-search",
            "compile",
            "--definition",
            "users.json",
            "--query",
            "name = alice",
        ])
        .unwrap();

        match cli.command {
            Commands::Compile {
                definition,
                query,
                output,
            } => {
                assert_eq!(definition, "users.json");
                assert_eq!(query.as_deref(), Some("name = alice"));
                assert_eq!(output, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_query_is_optional_for_compile() {
        let cli =
            Cli::try_parse_from(["scoped-search", "compile", "--definition", "users.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Compile { query: None, .. }));
    }

    #[test]
    fn test_ast_requires_query() {
        assert!(Cli::try_parse_from(["scoped-search", "ast"]).is_err());
    }
}
