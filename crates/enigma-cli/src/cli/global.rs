//! Flags shared by every subcommand, flattened into [`super::Cli`].

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

/// Global arguments for all commands.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// `-v` INFO, `-vv` DEBUG, `-vvv` TRACE. Default is WARN.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase log verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Only errors reach stderr; decorations on stdout are dropped.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colours. A non-empty `NO_COLOR` variable has the same
    /// effect, see [`GlobalArgs::honour_no_color`].
    #[arg(long = "no-color", global = true, help = "Disable colored output")]
    pub no_color: bool,

    /// Read this TOML file instead of `.enigma.toml` / the platform config.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// `auto` defers to `output.format` in the config, then to TTY detection.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Fold the `NO_COLOR` environment variable into `--no-color`.
    ///
    /// Any non-empty value disables colour (<https://no-color.org>), so
    /// `NO_COLOR=1` and `NO_COLOR=0` both count.
    pub fn honour_no_color(&mut self, value: Option<&OsStr>) {
        self.no_color |= value.is_some_and(|v| !v.is_empty());
    }
}

/// How the CLI renders its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain otherwise.
    #[default]
    Auto,
    /// Coloured, with status marks and a spinner.
    Human,
    Plain,
    /// Machine-readable reports; log lines switch to JSON as well.
    Json,
}

impl OutputFormat {
    /// Parse a format name as written in the config file (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_args() -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn any_non_empty_no_color_disables_colour() {
        for value in ["1", "yes", "true", "0", "anything"] {
            let mut args = plain_args();
            args.honour_no_color(Some(OsStr::new(value)));
            assert!(args.no_color, "NO_COLOR={value}");
        }
    }

    #[test]
    fn empty_or_unset_no_color_is_ignored() {
        let mut args = plain_args();
        args.honour_no_color(None);
        assert!(!args.no_color);
        args.honour_no_color(Some(OsStr::new("")));
        assert!(!args.no_color);
    }

    #[test]
    fn flag_survives_unset_variable() {
        let mut args = plain_args();
        args.no_color = true;
        args.honour_no_color(None);
        assert!(args.no_color);
    }

    #[test]
    fn format_names_are_case_insensitive() {
        assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("plain"), Some(OutputFormat::Plain));
        assert_eq!(OutputFormat::from_name("fancy"), None);
    }
}
