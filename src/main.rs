use clap::Parser;
use colored::Colorize;
use mdstale::config::BuildConfig;
use mdstale::{output, pipeline};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mdstale")]
#[command(version)]
#[command(about = "Rebuild out-of-date Markdown pages into HTML")]
#[command(long_about = "\
Rebuild out-of-date Markdown pages into HTML

Every .md file under ROOT is rendered into the template ROOT/index.html,
replacing its {{body}} placeholder, and written next to the source with an
.html extension:

  site/
  ├── index.html        # Template, contains {{body}}
  ├── about.md          → about.html
  └── notes/a.md        → notes/a.html

A page is rebuilt only when its .html is missing or older than the .md or
the template. Pages that fail are reported and skipped; the build still
exits successfully.")]
struct Cli {
    /// Site directory holding index.html and the Markdown tree
    #[arg(default_value = ".")]
    root: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(BuildConfig::with_root(cli.root)) {
        Ok(summary) => {
            output::print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: BuildConfig) -> Result<pipeline::BuildSummary, Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let (tx, rx) = std::sync::mpsc::channel();
    let root = config.root.clone();
    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_event(&event, &root);
        }
    });

    // The sender is dropped when the build returns, which ends the printer.
    let result = runtime.block_on(pipeline::build(&config, Some(tx)));
    printer
        .join()
        .map_err(|_| "progress printer thread panicked")?;
    Ok(result?)
}
