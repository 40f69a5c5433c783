// devguard - guards background-service logging in the generated Electron entry point

pub mod diff;
pub mod error;
pub mod logging;
pub mod patcher;
pub mod utils;

pub use error::{DevguardError, Result};
pub use patcher::{Outcome, PatchOptions, PatchReport, Patcher};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Patch the target named in `options`, printing status lines to stdout
pub fn run(options: &PatchOptions) -> Result<PatchReport> {
    let target = utils::FsTarget::new(&options.target);
    let patcher = Patcher::default().with_options(options);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    patcher.run(&target, &mut out)
}
