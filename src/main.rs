use anyhow::Result;
use class_version::cli::{Cli, usage};
use class_version::source::inspect;
use std::ffi::OsString;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<OsString> = std::env::args_os().collect();
    let Some(cli) = Cli::from_args(&args) else {
        let program = args
            .first()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "class-version".to_string());
        println!("{}", usage(&program));
        return ExitCode::from(1);
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let inspection = inspect(&cli.path)?;
    println!("{}", inspection.version);
    Ok(())
}
