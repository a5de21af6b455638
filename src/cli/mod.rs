// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands off to Layer 2.
//
//   render  — print the cheat sheet (raw, text, html or json)
//   outline — table of contents
//   check   — structural lint
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{bail, Result};
use clap::Parser;
use commands::{CheckArgs, Commands, OutlineArgs, RenderArgs};

use crate::application::render_use_case::RenderConfig;
use crate::infra::config_store::ConfigStore;

#[derive(Parser, Debug)]
#[command(
    name = "sql-cheatsheet",
    version,
    about = "Display the SQL cheat sheet, or convert it to text, HTML or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case. No logic lives here.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Render(args)  => run_render(args),
            Commands::Outline(args) => run_outline(args),
            Commands::Check(args)   => run_check(args),
        }
    }
}

fn run_render(args: RenderArgs) -> Result<()> {
    use crate::application::render_use_case::RenderUseCase;

    let config = match &args.config {
        Some(path) => ConfigStore::new(path).load()?,
        None => RenderConfig::from(&args),
    };

    if let Some(path) = &args.save_config {
        ConfigStore::new(path).save(&config)?;
        tracing::info!("Saved render settings to '{}'", path);
    }

    RenderUseCase::new(config).execute()
}

fn run_outline(args: OutlineArgs) -> Result<()> {
    use crate::application::outline_use_case::OutlineUseCase;

    let outline = OutlineUseCase::new(args.input).execute()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&outline)?);
    } else {
        print!("{outline}");
    }
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<()> {
    use crate::application::check_use_case::CheckUseCase;

    let use_case = CheckUseCase::new(args.input, args.strict);
    let findings = use_case.execute()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&findings)?);
    } else {
        for f in &findings {
            println!("{f}");
        }
    }

    let failing = use_case.failing(&findings);
    if !failing.is_empty() {
        bail!(
            "{} structural problem(s) at {:?} or above",
            failing.len(),
            use_case.threshold()
        );
    }

    if !args.json {
        println!("OK");
    }
    Ok(())
}
