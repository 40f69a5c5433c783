use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use devguard::{logging, PatchOptions};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to patch
    #[arg(short, long, default_value = devguard::patcher::DEFAULT_TARGET)]
    file: PathBuf,

    /// Report what would change without writing the file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Print a unified diff of the change to stderr
    #[arg(short, long)]
    diff: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let options = PatchOptions {
        target: cli.file,
        dry_run: cli.dry_run,
        show_diff: cli.diff,
    };
    debug!("Running with {:?}", options);

    let report = devguard::run(&options)
        .with_context(|| format!("Failed to patch {}", options.target.display()))?;

    if let Some(diff) = &report.diff {
        eprint!("{}", diff);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_zero_arguments_use_defaults() {
        let cli = Cli::try_parse_from(["devguard"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("public/electron.js"));
        assert!(!cli.dry_run);
        assert!(!cli.diff);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["devguard", "-f", "build/main.js", "-n", "--diff"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("build/main.js"));
        assert!(cli.dry_run);
        assert!(cli.diff);
    }
}
