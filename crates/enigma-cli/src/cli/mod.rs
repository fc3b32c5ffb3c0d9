//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "enigma",
    bin_name = "enigma",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Minimal project scaffold: message processing and a JSON sample",
    after_help = "EXAMPLES:\n\
        \x20 enigma process \"Test message\"\n\
        \x20 enigma validate \"\"\n\
        \x20 enigma json --indent 4\n\
        \x20 enigma doctor --optional\n\
        \x20 enigma completions bash > /usr/share/bash-completion/completions/enigma",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Announce a message, then validate it.
    #[command(
        visible_alias = "p",
        about = "Process a message",
        after_help = "Exits with status 2 when the message is empty."
    )]
    Process(MessageArgs),

    /// Validate a message without announcing it.
    #[command(
        about = "Validate a message",
        after_help = "Exits with status 2 when the message is empty."
    )]
    Validate(MessageArgs),

    /// Print the sample JSON record.
    #[command(
        about = "Print the sample JSON record",
        after_help = "EXAMPLES:\n\
            \x20 enigma json\n\
            \x20 enigma json --indent 0   # compact"
    )]
    Json(JsonArgs),

    /// Check the development toolchain.
    #[command(
        about = "Check the development environment",
        after_help = "EXAMPLES:\n\
            \x20 enigma doctor\n\
            \x20 enigma doctor --optional --output-format json"
    )]
    Doctor(DoctorArgs),

    /// Initialise an Enigma configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 enigma init           # platform config directory\n\
            \x20 enigma init --local   # .enigma.toml in the current directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 enigma completions bash > ~/.local/share/bash-completion/completions/enigma\n\
            \x20 enigma completions zsh  > ~/.zfunc/_enigma\n\
            \x20 enigma completions fish > ~/.config/fish/completions/enigma.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Enigma configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 enigma config get json.indent\n\
            \x20 enigma config list\n\
            \x20 enigma config path"
    )]
    Config(ConfigCommands),
}

// ── process / validate ────────────────────────────────────────────────────────

/// Arguments for `enigma process` and `enigma validate`.
#[derive(Debug, Args)]
pub struct MessageArgs {
    /// The message. May be empty (`""`), which is rejected.
    #[arg(value_name = "MESSAGE", help = "Message text")]
    pub message: String,
}

// ── json ──────────────────────────────────────────────────────────────────────

/// Arguments for `enigma json`.
#[derive(Debug, Args)]
pub struct JsonArgs {
    /// Indent width; overrides `json.indent` from the config.
    #[arg(
        short = 'i',
        long = "indent",
        value_name = "WIDTH",
        help = "Indent width (0 for compact)"
    )]
    pub indent: Option<usize>,
}

// ── doctor ────────────────────────────────────────────────────────────────────

/// Arguments for `enigma doctor`.
#[derive(Debug, Args)]
pub struct DoctorArgs {
    /// Also check optional tools (formatter, coverage).
    #[arg(long = "optional", help = "Include optional tools")]
    pub optional: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `enigma init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.enigma.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `enigma completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `enigma config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `json.indent`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path of the configuration file that would be loaded.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
