use std::path::PathBuf;

use crate::summary::{CompoundSummary, TargetSummary};
use crate::types::{CompoundRecord, ScoredGene};

/// Everything produced by one pipeline run.
///
/// # Examples
///
/// ```rust,no_run
/// use sepsis_core::{TargetPrioritizer, config::SepsisConfig};
///
/// let results = TargetPrioritizer::new(SepsisConfig::with_root(".")).run()?;
///
/// let top = &results.targets[0];
/// println!("#{} {} ({})", top.rank, top.record.symbol, top.composite_score);
/// println!("{} approved compounds", results.compound_summary.approved);
/// # Ok::<(), sepsis_core::types::SepsisError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PipelineResults {
    /// Targets in rank order.
    pub targets: Vec<ScoredGene>,

    /// Curated compound table in canonical order.
    pub compounds: Vec<CompoundRecord>,

    /// Score distribution and category counts over `targets`.
    pub target_summary: TargetSummary,

    /// Development-stage counts over `compounds`.
    pub compound_summary: CompoundSummary,

    /// Where the ranked target table was written.
    pub targets_path: PathBuf,

    /// Where the compound table was written.
    pub compounds_path: PathBuf,
}
