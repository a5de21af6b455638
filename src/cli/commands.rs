// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Three subcommands: `render`, `outline` and `check`.
//
// clap's derive macros generate the help text, the errors for
// bad flags and the conversion of `--format` values.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};

use crate::application::render_use_case::{RenderConfig, DEFAULT_INPUT};
use crate::render::Format;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the cheat sheet, unchanged or converted to another format
    Render(RenderArgs),

    /// List the sections with their line numbers and code block counts
    Outline(OutlineArgs),

    /// Report structural problems in the markup (never the SQL)
    Check(CheckArgs),
}

/// Display formats accepted by `--format`
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum FormatArg {
    /// The file exactly as it is on disk
    #[default]
    Raw,
    /// Plain text for a terminal
    Text,
    /// HTML
    Html,
    /// Parsed structure as JSON
    Json,
}

impl From<FormatArg> for Format {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Raw  => Format::Raw,
            FormatArg::Text => Format::Text,
            FormatArg::Html => Format::Html,
            FormatArg::Json => Format::Json,
        }
    }
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the cheat sheet, or `-` for stdin
    #[arg(long, short, default_value = DEFAULT_INPUT)]
    pub input: String,

    #[arg(long, short, value_enum, default_value_t = FormatArg::Raw)]
    pub format: FormatArg,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<String>,

    /// HTML only: wrap the output in a complete page
    #[arg(long)]
    pub standalone: bool,

    /// Load all render settings from a JSON file; other flags are ignored
    #[arg(long)]
    pub config: Option<String>,

    /// Save the effective settings to a JSON file before rendering
    #[arg(long)]
    pub save_config: Option<String>,
}

/// Convert CLI RenderArgs into the application-layer RenderConfig.
/// The application layer never sees clap types.
impl From<&RenderArgs> for RenderConfig {
    fn from(a: &RenderArgs) -> Self {
        RenderConfig {
            input:      a.input.clone(),
            output:     a.output.clone(),
            format:     a.format.into(),
            standalone: a.standalone,
        }
    }
}

#[derive(Args, Debug)]
pub struct OutlineArgs {
    /// Path to the cheat sheet, or `-` for stdin
    #[arg(long, short, default_value = DEFAULT_INPUT)]
    pub input: String,

    /// Print the outline as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the cheat sheet, or `-` for stdin
    #[arg(long, short, default_value = DEFAULT_INPUT)]
    pub input: String,

    /// Fail on warnings as well as errors
    #[arg(long)]
    pub strict: bool,

    /// Print the findings as a JSON array
    #[arg(long)]
    pub json: bool,
}
