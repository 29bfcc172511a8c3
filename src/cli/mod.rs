// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with `clap`.
// All answering is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `serve`       — load the dataset and serve the question form
//   2. `ask`         — load the dataset and answer one question
//   3. `init-config` — write a default JSON config to edit
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{AskArgs, Commands, InitConfigArgs, ServeArgs};

use crate::application::{ask_use_case::AskUseCase, config::AppConfig};
use crate::domain::traits::QuestionAnswerer;

#[derive(Parser, Debug)]
#[command(
    name = "student-qa",
    version,
    about = "Answer questions about students from a CSV dataset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the handler for the chosen subcommand.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve(args)      => run_serve(args),
            Commands::Ask(args)        => run_ask(args),
            Commands::InitConfig(args) => run_init_config(args),
        }
    }
}

/// Handles the `serve` subcommand.
/// The dataset is loaded before the listener binds, so a bad
/// file stops the process before it accepts any request.
fn run_serve(args: ServeArgs) -> Result<()> {
    use crate::web::{routes::AppState, server};

    let config   = args.to_config()?;
    let use_case = AskUseCase::new(&config)?;

    tracing::info!(
        "Serving {} students from '{}'",
        use_case.student_count(),
        config.dataset_path
    );

    let state = AppState {
        answerer:         Box::new(use_case),
        max_question_len: config.max_question_len,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::run(state, &config.bind))
}

/// Handles the `ask` subcommand.
fn run_ask(args: AskArgs) -> Result<()> {
    let config   = args.dataset.to_config()?;
    let use_case = AskUseCase::new(&config)?;

    println!("{}", use_case.answer(&args.question).trim_end());
    Ok(())
}

/// Handles the `init-config` subcommand.
fn run_init_config(args: InitConfigArgs) -> Result<()> {
    use crate::infra::config_file::ConfigFile;

    let file = ConfigFile::new(&args.path);
    file.save(&AppConfig::default(), args.force)?;

    println!("Wrote default config to '{}'", file.path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_ask() {
        let cli = Cli::try_parse_from([
            "student-qa", "ask", "--question", "math marks 1001", "--dataset", "s.csv",
        ])
        .unwrap();
        match cli.command {
            Commands::Ask(a) => {
                assert_eq!(a.question, "math marks 1001");
                assert_eq!(a.dataset.dataset.as_deref(), Some("s.csv"));
            }
            other => panic!("expected ask, got {other:?}"),
        }
    }

    #[test]
    fn test_parses_serve_flags() {
        let cli = Cli::try_parse_from([
            "student-qa", "serve", "--bind", "0.0.0.0:8080", "--id-digits", "5",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve(s) => {
                let cfg = s.to_config().unwrap();
                assert_eq!(cfg.bind, "0.0.0.0:8080");
                assert_eq!(cfg.id_digits, 5);
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn test_ask_requires_question() {
        assert!(Cli::try_parse_from(["student-qa", "ask"]).is_err());
    }

    #[test]
    fn test_init_config_writes_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("student-qa.json");
        let cli  = Cli::try_parse_from([
            "student-qa", "init-config", "--path", path.to_str().unwrap(),
        ])
        .unwrap();

        cli.run().unwrap();
        assert!(path.exists());
    }
}
