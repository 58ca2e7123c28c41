//! CLI command definitions

use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(name = "sww")]
#[command(about = "Run git or gh across several local repositories", long_about = None)]
#[command(override_usage = "sww [OPTIONS] <git|gh> [ARGS]...\n       sww cd [NAME]")]
#[command(version)]
pub struct Cli {
    /// Run in every configured repository without prompting
    #[arg(short, long)]
    pub all: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Command (git, gh or cd) followed by its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        num_args = 0..,
        value_parser = clap::value_parser!(OsString)
    )]
    pub command: Vec<OsString>,
}

impl Cli {
    /// Parse process arguments, accepting the single-dash `-all` spelling
    pub fn parse_args() -> Self {
        Cli::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite `-all` to `--all` in the flags that precede the command.
///
/// Everything from the command onwards belongs to git/gh and is left alone,
/// including arguments that are not valid UTF-8.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut in_flags = true;

    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 {
                return arg;
            }
            if in_flags && arg.to_str() == Some("-all") {
                return OsString::from("--all");
            }
            if !arg.to_string_lossy().starts_with('-') {
                in_flags = false;
            }
            arg
        })
        .collect()
}
