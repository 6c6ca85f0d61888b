mod script;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use memento_config::AppConfig;
use memento_core::{EditSession, HistoryConfig, TextEditor};

/// Replays edit, undo and redo steps against a text editor and prints
/// the editor content after each one.
#[derive(Parser, Debug)]
#[command(name = "memento", version, about)]
struct Cli {
    /// Steps to replay: `write:<text>`, `set:<text>`, `append:<text>`,
    /// `commit`, `undo`, `redo`, `show`, `clear`, `pause`, `resume`.
    /// Runs the built-in text-editor demo when omitted.
    steps: Vec<String>,

    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Max undo steps kept (0 = unbounded). Overrides the config file.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Merge commits closer together than this many milliseconds.
    /// Overrides the config file.
    #[arg(long)]
    group_timeout_ms: Option<u64>,

    /// Print undo/redo depths after each step.
    #[arg(long)]
    show_depths: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let mut config = AppConfig::load_or_create(&config_path);
    apply_overrides(&mut config, &cli);
    tracing::debug!(?config, path = %config_path.display(), "Loaded config");

    let steps = if cli.steps.is_empty() {
        tracing::info!("No steps given, running the text-editor demo");
        script::demo_script()
    } else {
        script::parse_steps(&cli.steps).context("Invalid step")?
    };

    let editor = TextEditor::with_content(config.initial_text.clone());
    let mut session = EditSession::new(editor, HistoryConfig::from(&config));

    for step in &steps {
        let outcome = script::apply(&mut session, step)
            .with_context(|| format!("Step `{step}` failed"))?;
        println!("{}", script::describe(step, &outcome, &session, config.show_depths));
    }

    Ok(())
}

/// Lets command-line flags win over values from the config file.
fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(depth) = cli.max_depth {
        config.max_history_depth = depth;
    }
    if let Some(timeout) = cli.group_timeout_ms {
        config.group_timeout_ms = timeout;
    }
    if cli.show_depths {
        config.show_depths = true;
    }
    config.sanitize();
}
