use crate::constants::*;
use anyhow::{anyhow, Result};
use clap::{ArgAction, Parser};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// Full version string including the crate version and git description.
///
/// # Examples
/// * `0.1.0-1ba958a-dirty` - while on a dirty branch
/// * `0.1.0-1ba958a` - with a fresh commit
/// * `0.1.0` - when built outside a git checkout
pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    let git_describe = env!("VERGEN_GIT_DESCRIBE");
    if git_describe.is_empty() || git_describe == "VERGEN_IDEMPOTENT_OUTPUT" {
        env!("CARGO_PKG_VERSION").to_string()
    } else {
        format!("{}-{}", env!("CARGO_PKG_VERSION"), git_describe)
    }
});

#[derive(Parser, Debug)]
#[command(name="svlink",
          version=&**FULL_VERSION,
          about="Adds links to rendered plots in a structural variant report",
          long_about = None,
          after_help = "Example:\n    svlink sample.chromoseq.tsv > sample.chromoseq.images.tsv",
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(flatten)]
    pub args: LinkArgs,

    /// Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true
    )]
    pub verbosity: u8,
}

#[derive(Parser, Debug, Clone)]
pub struct LinkArgs {
    /// Tab-separated SV report (optionally gzip compressed)
    #[arg(value_name = "REPORT", value_parser = check_file_exists)]
    pub report: PathBuf,

    /// Directory containing the samplot/ and plotting/ image folders [default: working directory]
    #[arg(value_name = "IMAGE_ROOT", value_parser = check_dir_exists)]
    pub image_root: Option<PathBuf>,

    /// Write output to a file [default: standard output]
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        value_parser = check_prefix_path
    )]
    pub output: Option<String>,

    #[command(flatten)]
    pub link_args: LinkArgsInner,
}

#[derive(Parser, Debug, Clone)]
pub struct LinkArgsInner {
    /// Embed plots in the View column as base64 data URLs instead of linking to the files
    #[arg(
        help_heading("Advanced"),
        long,
        default_value_t = DEFAULT_EMBED
    )]
    pub embed: bool,

    /// Log a warning for every variant without a rendered plot
    #[arg(
        help_heading("Advanced"),
        long,
        default_value_t = DEFAULT_WARN_MISSING
    )]
    pub warn_missing: bool,
}

impl LinkArgsInner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, updates: impl FnOnce(&mut Self)) -> Self {
        updates(&mut self);
        self
    }
}

impl Default for LinkArgsInner {
    fn default() -> Self {
        Self {
            embed: DEFAULT_EMBED,
            warn_missing: DEFAULT_WARN_MISSING,
        }
    }
}

/// Initializes the verbosity level for logging based on the command-line arguments.
///
/// Sets up the logger with a specific verbosity level that is determined
/// by the number of occurrences of the `-v` or `--verbose` flag in the command-line arguments.
/// Log records go to standard error so standard output only carries the report.
///
/// # Arguments
///
/// * `args` - A reference to the parsed command-line arguments.
pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.module_path().unwrap_or("unknown_module"),
                record.args()
            )
        })
        .filter_level(filter_level)
        .target(env_logger::Target::Stderr)
        .init();
}

/// Checks if the provided file path exists.
///
/// # Arguments
///
/// * `s` - A string slice representing the file path to check.
///
/// # Returns
///
/// Returns a `Result<PathBuf>` which is Ok if the file exists, or an Err with a descriptive message if not.
fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        return Err(anyhow!("File does not exist: {}", path.display()));
    }
    Ok(path.to_path_buf())
}

fn check_dir_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.is_dir() {
        return Err(anyhow!("Directory does not exist: {}", path.display()));
    }
    Ok(path.to_path_buf())
}

fn check_prefix_path(s: &str) -> Result<String> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(anyhow!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(s.to_string())
}
