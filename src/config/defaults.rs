//! Default configuration values

/// File name of a module descriptor
pub const DESCRIPTOR_FILE_NAME: &str = "module.toml";

/// Default module version when the descriptor omits one
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Directory (relative to the project root) where artifacts are placed
pub const BUILD_DIR: &str = "build";

/// Compiler used when $CC is not set
pub const DEFAULT_COMPILER: &str = "cc";

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
