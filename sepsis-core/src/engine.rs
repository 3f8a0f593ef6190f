use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::compounds::compound_table;
use crate::config::SepsisConfig;
use crate::evidence::{EvidenceSource, PubMedProxy};
use crate::output::{write_compounds_csv, write_targets_csv};
use crate::ranking::rank_targets;
use crate::results::PipelineResults;
use crate::scoring::score_genes;
use crate::signature::{load_gene_signature, validate_signature};
use crate::summary::{CompoundSummary, TargetSummary};
use crate::types::{CompoundRecord, GeneRecord, ScoredGene, SepsisError};

/// Runs the prioritization pipeline against a project root.
///
/// Each run reads `data/gene_signature.csv` and fully rewrites both tables
/// under `outputs/tables/`; nothing carries over between runs.
///
/// # Examples
///
/// ```rust,no_run
/// use sepsis_core::{TargetPrioritizer, config::SepsisConfig};
/// use sepsis_core::evidence::StaticEvidence;
///
/// let config = SepsisConfig {
///     root: "/srv/sepsis-hdt".into(),
///     num_threads: Some(4),
///     ..Default::default()
/// };
///
/// let prioritizer = TargetPrioritizer::new(config)
///     .with_evidence_source(StaticEvidence::from_iter([("IL6", 0.97)]));
/// let results = prioritizer.run()?;
/// println!("Top target: {}", results.targets[0].record.symbol);
/// # Ok::<(), sepsis_core::types::SepsisError>(())
/// ```
#[derive(Clone)]
pub struct TargetPrioritizer {
    /// Run configuration
    pub config: SepsisConfig,
    evidence: Arc<dyn EvidenceSource>,
}

impl std::fmt::Debug for TargetPrioritizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TargetPrioritizer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TargetPrioritizer {
    /// Creates a prioritizer using the PubMed evidence proxy.
    #[must_use]
    pub fn new(config: SepsisConfig) -> Self {
        Self {
            config,
            evidence: Arc::new(PubMedProxy),
        }
    }

    /// Replaces the target-evidence source.
    #[must_use]
    pub fn with_evidence_source(mut self, source: impl EvidenceSource + 'static) -> Self {
        self.evidence = Arc::new(source);
        self
    }

    /// Scores and ranks an in-memory signature without touching the
    /// filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`SepsisError::ThreadPool`] if a dedicated pool was requested
    /// and could not be built.
    pub fn rank(&self, genes: Vec<GeneRecord>) -> Result<Vec<ScoredGene>, SepsisError> {
        let evidence = self.evidence.as_ref();
        let scored = match self.config.num_threads {
            Some(num_threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .map_err(|e| {
                    SepsisError::ThreadPool(format!("Failed to configure thread pool: {e}"))
                })?
                .install(|| score_genes(genes, evidence)),
            None => score_genes(genes, evidence),
        };
        Ok(rank_targets(scored))
    }

    /// Loads, scores and ranks the signature, then writes
    /// `targets_ranked.csv`.
    ///
    /// A signature that breaks its curated invariants (row count, phase
    /// labels) is logged and still scored.
    ///
    /// # Errors
    ///
    /// Returns [`SepsisError`] if the signature cannot be read or parsed, or
    /// the table cannot be written.
    pub fn prioritize_targets(&self) -> Result<Vec<ScoredGene>, SepsisError> {
        let genes = load_gene_signature(self.config.signature_path())?;
        if let Err(e) = validate_signature(&genes) {
            warn!("{e}");
        }

        info!("calculating composite scores");
        let targets = self.rank(genes)?;

        let path = self.config.targets_path();
        write_table(&path, |w| write_targets_csv(w, &targets))?;
        info!(count = targets.len(), path = %path.display(), "saved ranked targets");
        Ok(targets)
    }

    /// Writes the curated compound table to `compounds_ranked.csv`.
    ///
    /// # Errors
    ///
    /// Returns [`SepsisError::IoError`] if the table cannot be written.
    pub fn generate_compounds(&self) -> Result<Vec<CompoundRecord>, SepsisError> {
        let compounds = compound_table();
        let path = self.config.compounds_path();
        write_table(&path, |w| write_compounds_csv(w, &compounds))?;
        info!(count = compounds.len(), path = %path.display(), "saved compounds");
        Ok(compounds)
    }

    /// Runs target prioritization followed by compound table generation.
    ///
    /// # Errors
    ///
    /// See [`Self::prioritize_targets`] and [`Self::generate_compounds`].
    pub fn run(&self) -> Result<PipelineResults, SepsisError> {
        let targets = self.prioritize_targets()?;
        let compounds = self.generate_compounds()?;
        info!("pipeline complete");

        Ok(PipelineResults {
            target_summary: TargetSummary::from_targets(&targets),
            compound_summary: CompoundSummary::from_compounds(&compounds),
            targets,
            compounds,
            targets_path: self.config.targets_path(),
            compounds_path: self.config.compounds_path(),
        })
    }
}

fn write_table<F>(path: &Path, write: F) -> Result<(), SepsisError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), SepsisError>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    write(&mut writer)?;
    writer.flush()?;
    Ok(())
}
