// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands `serve`, `ask`, and `init-config`
// and their flags.
//
// Settings resolve in three steps:
//   1. AppConfig::default()
//   2. the JSON file named by --config, if any
//   3. any flag given explicitly on the command line
//
// Flags are Options for that reason: None means "not given",
// so it never clobbers a value from the file.
//
// Reference: Rust Book §12 (Building a CLI Program)

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::application::config::AppConfig;
use crate::infra::config_file::ConfigFile;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the question form over HTTP
    Serve(ServeArgs),

    /// Answer one question and print the result
    Ask(AskArgs),

    /// Write the default configuration to a JSON file
    InitConfig(InitConfigArgs),
}

/// Flags shared by every command that loads the dataset
#[derive(Args, Debug, Default)]
pub struct DatasetArgs {
    /// JSON config file; flags below override its values
    #[arg(long)]
    pub config: Option<String>,

    /// CSV file with columns id,name,class,email,maths,science,social
    /// [default: data/students.csv]
    #[arg(long)]
    pub dataset: Option<String>,

    /// Number of consecutive digits that make up a student id [default: 4]
    #[arg(long)]
    pub id_digits: Option<usize>,
}

impl DatasetArgs {
    /// Resolve defaults, then the config file, then these flags.
    pub fn to_config(&self) -> Result<AppConfig> {
        let mut cfg = match &self.config {
            Some(path) => ConfigFile::new(path).load()?,
            None       => AppConfig::default(),
        };

        if let Some(dataset) = &self.dataset {
            cfg.dataset_path = dataset.clone();
        }
        if let Some(digits) = self.id_digits {
            cfg.id_digits = digits;
        }
        Ok(cfg)
    }
}

/// All arguments for the `serve` command
#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Address to listen on [default: 127.0.0.1:8000]
    #[arg(long)]
    pub bind: Option<String>,

    /// Longest question the form accepts, in characters [default: 255]
    #[arg(long)]
    pub max_question_len: Option<usize>,
}

impl ServeArgs {
    pub fn to_config(&self) -> Result<AppConfig> {
        let mut cfg = self.dataset.to_config()?;
        if let Some(bind) = &self.bind {
            cfg.bind = bind.clone();
        }
        if let Some(max) = self.max_question_len {
            cfg.max_question_len = max;
        }
        Ok(cfg)
    }
}

/// All arguments for the `ask` command
#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question to answer, e.g. "math marks 1001"
    #[arg(long)]
    pub question: String,

    #[command(flatten)]
    pub dataset: DatasetArgs,
}

/// All arguments for the `init-config` command
#[derive(Args, Debug)]
pub struct InitConfigArgs {
    /// Where to write the config
    #[arg(long, default_value = "student-qa.json")]
    pub path: String,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
