use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sentiment_api::analyzer::{Lexicon, PatternAnalyzer};
use sentiment_api::config::Config;

const EXIT_SUCCESS: i32 = 0;
const EXIT_RUNTIME: i32 = 1;
const EXIT_INVALID_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Address to bind to (overrides server.host)
    #[arg(long, env = "SENTIMENT_API_HOST")]
    host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(long, env = "PORT")]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP service (default if no subcommand)
    Serve(ServeArgs),
    /// Score a piece of text locally and print the result
    Score {
        /// Text to analyze
        text: String,

        /// Print the JSON document the API would return
        #[arg(long)]
        json: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "sentiment-api")]
#[command(about = "Score text sentiment from 1 (negative) to 10 (positive)", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/sentiment-api/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "sentiment_api={level},tower_http={level}",
            level = default_level
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Load and validate the lexicon, exiting with a config error on failure.
fn build_analyzer(config: &Config) -> PatternAnalyzer {
    let lexicon = match Lexicon::load(config.analyzer.lexicon.as_deref()) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Lexicon error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = lexicon.validate() {
        eprintln!("Lexicon errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    tracing::info!(
        source = %config
            .analyzer
            .lexicon
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string()),
        words = lexicon.words.len(),
        "lexicon loaded"
    );

    PatternAnalyzer::new(lexicon)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // A bare invocation still picks up SENTIMENT_API_HOST / PORT
    let command = match cli.command {
        Some(command) => command,
        None => match Cli::try_parse_from(["sentiment-api", "serve"]) {
            Ok(Cli {
                command: Some(command),
                ..
            }) => command,
            Ok(_) => Commands::Serve(ServeArgs::default()),
            Err(e) => e.exit(),
        },
    };

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let mut config = match sentiment_api::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    match command {
        Commands::Serve(args) => {
            if let Some(host) = args.host {
                config.server.host = host;
            }
            if let Some(port) = args.port {
                config.server.port = port;
            }

            if let Err(errors) = sentiment_api::config::validate_config(&config) {
                eprintln!("Config errors:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_CONFIG);
            }

            let analyzer = build_analyzer(&config);
            let state = sentiment_api::server::AppState::new(
                Arc::new(analyzer),
                config.server.index_path.clone(),
            )
            .with_body_limit(config.server.max_body_bytes);

            if let Err(e) = sentiment_api::server::serve(&config.server, state).await {
                tracing::error!("{:#}", e);
                std::process::exit(EXIT_RUNTIME);
            }
        }
        Commands::Score { text, json } => {
            let analyzer = build_analyzer(&config);

            let text = match sentiment_api::scoring::validate_text(&text) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(EXIT_INVALID_INPUT);
                }
            };

            let result = match sentiment_api::scoring::score(text, &analyzer) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error analyzing sentiment: {}", e);
                    std::process::exit(EXIT_RUNTIME);
                }
            };

            if json {
                match sentiment_api::output::format_json(&result) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("Failed to serialize result: {}", e);
                        std::process::exit(EXIT_RUNTIME);
                    }
                }
            } else {
                let use_colors = sentiment_api::output::should_use_colors();
                println!("{}", sentiment_api::output::format_result(&result, use_colors));
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
