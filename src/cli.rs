use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "class-version")]
#[command(about = "Show the Java version a class file or jar was compiled for")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    #[arg(value_name = "class_file|jar_file", allow_hyphen_values = true)]
    pub path: PathBuf,
}

impl Cli {
    /// Parses `args` (program name first). `None` means the usage text should be shown.
    pub fn from_args(args: &[OsString]) -> Option<Cli> {
        let [program, path] = args else {
            log::debug!("expected exactly one argument, got {}", args.len().saturating_sub(1));
            return None;
        };

        // The lone argument is always a path, even if it looks like a flag or is `--`.
        match Cli::try_parse_from([program.as_os_str(), OsStr::new("--"), path.as_os_str()]) {
            Ok(cli) => Some(cli),
            Err(e) => {
                log::debug!("argument parsing failed: {e}");
                None
            }
        }
    }
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} <class_file|jar_file>")
}
