use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Resolve responsive font sizes, typography and spacing for a viewport.
#[derive(Parser, Debug)]
#[command(name = "dimensa", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Viewport width in logical pixels (defaults to the configured width).
    #[arg(long, global = true)]
    pub width: Option<f64>,

    /// Viewport height in logical pixels (defaults to the configured height).
    #[arg(long, global = true)]
    pub height: Option<f64>,

    /// Target platform: web, ios or android.
    #[arg(long, global = true)]
    pub platform: Option<String>,

    /// Base font family.
    #[arg(long, global = true)]
    pub family: Option<String>,

    /// Read configuration from this file instead of the user config.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reject negative or non-finite input instead of passing it through.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output format.
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Log at debug level (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Single-line JSON.
    Json,
    /// Indented JSON.
    #[default]
    Pretty,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the screen category, group and orientation.
    Category,

    /// Resolve a font size.
    Size(SizeArgs),

    /// Resolve a full text style.
    Style(StyleArgs),

    /// Resolve every typography preset, or a single one.
    Typography(TypographyArgs),

    /// Scale a spacing value for the current category.
    Spacing(SpacingArgs),

    /// Print the effective configuration as TOML.
    Config(ConfigArgs),
}

#[derive(clap::Args, Debug)]
pub struct SizeArgs {
    /// Base size in logical pixels.
    pub base: f64,

    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,

    /// Extra text scale requested by the user.
    #[arg(long)]
    pub accessibility_scale: Option<f64>,
}

#[derive(clap::Args, Debug)]
pub struct StyleArgs {
    #[command(flatten)]
    pub size: SizeArgs,

    /// Symbolic (semiBold) or numeric (600) weight.
    #[arg(long, default_value = "regular")]
    pub weight: String,

    #[arg(long)]
    pub italic: bool,
}

#[derive(clap::Args, Debug)]
pub struct TypographyArgs {
    /// Preset name (h1..h6, body, subtitle, caption, button, label, overline).
    pub preset: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct SpacingArgs {
    /// One or more base spacing values.
    #[arg(required = true)]
    pub values: Vec<f64>,
}

#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    /// Print the config path (`--config` or the user file) instead of the configuration.
    #[arg(long)]
    pub path: bool,

    /// Write the effective configuration to `--config`, or to the user config file.
    #[arg(long, conflicts_with = "path")]
    pub save: bool,
}
