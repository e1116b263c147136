use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::Parser;

use filechooser::{
    app::{LaunchRequest, NavigationOutcome, SelectionMode},
    config::ChooserConfig,
    logging, ui,
};

#[derive(Parser)]
#[command(name = "filechooser")]
#[command(about = "Pick a file or directory in the terminal and print its path", long_about = None)]
struct Cli {
    /// Directory to start in (defaults to $EXTERNAL_STORAGE, then $HOME)
    #[arg(short, long, value_name = "PATH")]
    path: Option<PathBuf>,

    /// 1 selects a file, 2 selects a directory; anything else selects a file
    #[arg(short = 't', long, default_value_t = SelectionMode::FILE_VALUE, allow_negative_numbers = true)]
    selection_type: i32,

    /// Append log records to this file (filtered by RUST_LOG)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = ChooserConfig::from_env().with_log_file(cli.log_file);
    logging::init(config.log_file.as_deref())?;

    let mut request = LaunchRequest::new().with_selection_type(cli.selection_type);
    if let Some(path) = &cli.path {
        request = request.with_path(path);
    }

    let result = ui::run(request, config)?;
    match NavigationOutcome::from_result(&result) {
        Some(NavigationOutcome::Selected(path)) => {
            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
        _ => Ok(ExitCode::FAILURE),
    }
}
