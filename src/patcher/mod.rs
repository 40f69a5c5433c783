pub mod electron;

use crate::diff::{apply_in_order, change_counts, unified_diff, Substitution};
use crate::error::{DevguardError, Result};
use crate::utils::fs::TargetFile;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

pub use electron::DEFAULT_TARGET;

/// Printed whenever the exact block is missing
pub const NOTICE: &str = "Could not find exact match. Trying looser matching...";

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The primary block was found and replaced
    Replaced,
    /// At least one fallback line was guarded
    ReplacedParts,
    /// Nothing matched, content left as is
    Unchanged,
}

impl Outcome {
    /// Status line reported on stdout
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Replaced => "Successfully replaced content.",
            Outcome::ReplacedParts => "Replaced parts individually.",
            Outcome::Unchanged => "Failed to replace anything.",
        }
    }

    pub fn changed(&self) -> bool {
        !matches!(self, Outcome::Unchanged)
    }
}

/// Summary of a single patch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub outcome: Outcome,
    /// Fallback substitutions that found their line (0 on the primary path)
    pub fallback_matches: usize,
    /// Whether the target was written
    pub written: bool,
    /// Unified diff of the change, when requested
    pub diff: Option<String>,
}

/// Options coming from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOptions {
    pub target: PathBuf,
    pub dry_run: bool,
    pub show_diff: bool,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_TARGET),
            dry_run: false,
            show_diff: false,
        }
    }
}

/// Guards background-service logging behind `isDev`
pub struct Patcher<'a> {
    primary: Substitution<'a>,
    fallbacks: &'a [Substitution<'a>],
    dry_run: bool,
    show_diff: bool,
}

impl Default for Patcher<'static> {
    fn default() -> Self {
        Self::new(electron::PRIMARY, &electron::FALLBACKS)
    }
}

impl<'a> Patcher<'a> {
    pub fn new(primary: Substitution<'a>, fallbacks: &'a [Substitution<'a>]) -> Self {
        Self {
            primary,
            fallbacks,
            dry_run: false,
            show_diff: false,
        }
    }

    pub fn with_options(mut self, options: &PatchOptions) -> Self {
        self.dry_run = options.dry_run;
        self.show_diff = options.show_diff;
        self
    }

    /// Patch `target`, reporting progress on `out`
    ///
    /// The notice is written before the fallback is attempted, the status line
    /// after the decision. At most one write reaches the target.
    pub fn run<T, W>(&self, target: &T, out: &mut W) -> Result<PatchReport>
    where
        T: TargetFile + ?Sized,
        W: Write + ?Sized,
    {
        let content = target.read_to_string()?;
        debug!(
            "Loaded {} bytes from {}",
            content.len(),
            target.path().display()
        );

        let (outcome, updated, fallback_matches) = match self.primary.apply(&content) {
            Some(updated) => {
                info!("Found exact block in {}", target.path().display());
                (Outcome::Replaced, updated, 0)
            }
            None => {
                writeln!(out, "{}", NOTICE).map_err(DevguardError::output_error)?;
                let result = apply_in_order(&content, self.fallbacks);
                let outcome = if result.content != content {
                    Outcome::ReplacedParts
                } else {
                    Outcome::Unchanged
                };
                info!(
                    "{} of {} fallback lines matched",
                    result.matched,
                    self.fallbacks.len()
                );
                (outcome, result.content, result.matched)
            }
        };

        let diff = if self.show_diff && outcome.changed() {
            Some(unified_diff(
                &content,
                &updated,
                &target.path().to_string_lossy(),
            ))
        } else {
            None
        };

        let written = if !outcome.changed() {
            false
        } else if self.dry_run {
            info!("Dry run, not writing {}", target.path().display());
            false
        } else {
            target.write(&updated)?;
            let (inserted, deleted) = change_counts(&content, &updated);
            info!(
                "Wrote {} (+{} -{} lines)",
                target.path().display(),
                inserted,
                deleted
            );
            true
        };

        writeln!(out, "{}", outcome.message()).map_err(DevguardError::output_error)?;

        Ok(PatchReport {
            outcome,
            fallback_matches,
            written,
            diff,
        })
    }
}
