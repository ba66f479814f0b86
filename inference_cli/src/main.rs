//! Deduce - run an expert system session in the terminal.
//!
//! Loads a knowledge base, asks questions on stdin/stdout until a goal fact
//! is derived, and prints the result. Logs go to stderr.

mod config;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use inference_core::{InferenceController, Outcome};
use knowledge_rules::KnowledgeBase;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::CliConfig;
use terminal::TerminalAsker;

#[derive(Parser)]
#[command(name = "deduce")]
#[command(
    about = "Forward-chaining expert system - answer questions until a result is found",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Knowledge base file (.json, or .toml)
    #[arg(short = 'k', long = "kb")]
    knowledge_base: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset (e.g. "info")
    #[arg(long)]
    log_level: Option<String>,

    /// Give up on a question after this many unusable answers
    #[arg(long)]
    max_ask_attempts: Option<u32>,

    /// Print every fact value when the session ends
    #[arg(long)]
    facts: bool,
}

impl Cli {
    /// Command line values override the config file.
    fn into_config(self) -> Result<(CliConfig, bool)> {
        let mut config = match &self.config {
            Some(path) => CliConfig::from_path(path)?,
            None => CliConfig::default(),
        };
        if let Some(path) = self.knowledge_base {
            config.knowledge_base = Some(path);
        }
        if let Some(level) = self.log_level {
            config.log_level = Some(level);
        }
        if let Some(attempts) = self.max_ask_attempts {
            config.engine = config.engine.with_max_ask_attempts(attempts);
        }
        Ok((config, self.facts))
    }
}

fn main() -> Result<()> {
    let (config, print_facts) = Cli::parse().into_config()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let kb_path = config.knowledge_base_path();
    let kb = KnowledgeBase::from_path(&kb_path)
        .with_context(|| format!("failed to load knowledge base {}", kb_path.display()))?;

    let mut controller = InferenceController::new(kb, config.engine.clone())?;
    info!(session = %controller.id(), path = %kb_path.display(), "Session started");

    let stdin = io::stdin();
    let mut asker = TerminalAsker::new(stdin.lock(), io::stdout());

    println!("{}", config.display.title);
    let outcome = controller.run(&mut asker).context("inference session aborted")?;

    let mut out = io::stdout().lock();
    writeln!(out)?;
    match &outcome {
        Outcome::GoalReached { goal } => writeln!(out, "{goal}")?,
        Outcome::NoGoalReachable => writeln!(out, "{}", config.display.failure_message)?,
    }

    if print_facts {
        writeln!(out)?;
        for (name, value) in controller.knowledge_base().facts().iter() {
            writeln!(out, "{name:<30} {value}")?;
        }
    }

    let stats = controller.stats();
    info!(
        questions = stats.questions_asked,
        rules_fired = stats.rules_fired,
        passes = stats.passes,
        "Session finished"
    );
    Ok(())
}
