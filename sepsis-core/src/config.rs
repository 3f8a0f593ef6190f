use std::path::PathBuf;

use crate::constants::{
    COMPOUNDS_FILE, DEFAULT_TOP_N, GENE_SIGNATURE_PATH, TABLES_DIR, TARGETS_FILE,
};

/// Configuration settings for a prioritization run.
///
/// Every input and output path is derived from a single project root, so a
/// run never depends on where the binary lives or on the process working
/// directory unless `root` says so.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use sepsis_core::config::SepsisConfig;
///
/// let config = SepsisConfig::default();
/// assert_eq!(config.top_n, 15);
/// ```
///
/// ## Explicit project root
///
/// ```rust
/// use sepsis_core::config::SepsisConfig;
///
/// let config = SepsisConfig {
///     root: "/srv/sepsis-hdt".into(),
///     quiet: true,
///     ..Default::default()
/// };
/// assert!(config.targets_path().ends_with("outputs/tables/targets_ranked.csv"));
/// ```
#[derive(Debug, Clone)]
pub struct SepsisConfig {
    /// Project root containing `data/` and receiving `outputs/`.
    ///
    /// **Default**: `.` (current directory)
    pub root: PathBuf,

    /// Number of targets listed in the console report.
    ///
    /// **Default**: 15
    pub top_n: usize,

    /// Suppress the console report.
    ///
    /// Output tables are still written.
    ///
    /// **Default**: `false`
    pub quiet: bool,

    /// Number of worker threads used for scoring.
    ///
    /// Set to `None` to use Rayon's global pool.
    ///
    /// **Default**: `None`
    pub num_threads: Option<usize>,
}

impl Default for SepsisConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            top_n: DEFAULT_TOP_N,
            quiet: false,
            num_threads: None,
        }
    }
}

impl SepsisConfig {
    /// Creates a default configuration rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Location of the gene signature CSV.
    #[must_use]
    pub fn signature_path(&self) -> PathBuf {
        self.root.join(GENE_SIGNATURE_PATH)
    }

    /// Directory receiving the output tables.
    #[must_use]
    pub fn tables_dir(&self) -> PathBuf {
        self.root.join(TABLES_DIR)
    }

    /// Location of the ranked target table.
    #[must_use]
    pub fn targets_path(&self) -> PathBuf {
        self.tables_dir().join(TARGETS_FILE)
    }

    /// Location of the compound table.
    #[must_use]
    pub fn compounds_path(&self) -> PathBuf {
        self.tables_dir().join(COMPOUNDS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_config() {
        let config = SepsisConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.top_n, 15);
        assert!(!config.quiet);
        assert_eq!(config.num_threads, None);
    }

    #[test]
    fn test_paths_derive_from_root() {
        let config = SepsisConfig::with_root("/tmp/project");
        assert_eq!(
            config.signature_path(),
            Path::new("/tmp/project/data/gene_signature.csv")
        );
        assert_eq!(
            config.targets_path(),
            Path::new("/tmp/project/outputs/tables/targets_ranked.csv")
        );
        assert_eq!(
            config.compounds_path(),
            Path::new("/tmp/project/outputs/tables/compounds_ranked.csv")
        );
    }
}
