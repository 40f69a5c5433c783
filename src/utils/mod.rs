pub mod fs;

pub use fs::{FsTarget, TargetFile};
