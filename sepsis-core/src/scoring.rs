//! Composite target-priority scoring.
//!
//! Each gene receives a weighted sum of five terms:
//!
//! | Term                 | Weight | Source                                           |
//! |----------------------|--------|--------------------------------------------------|
//! | Omics evidence       | 0.35   | `0.6 · min(log10(n + 1) / 3, 1) + 0.4 · w_omics`  |
//! | Target evidence      | 0.25   | [`EvidenceSource`], PubMed proxy by default      |
//! | Druggability         | 0.20   | [`druggability_component`]                       |
//! | Pathway centrality   | 0.10   | [`pathway_centrality`]                           |
//! | Replication          | 0.10   | constant 0.7                                     |
//!
//! The omics term and the druggability component read the same annotation
//! through two different weight tables (`High` is 1.0 in one and 0.9 in the
//! other). Both tables are kept exactly; merging them would shift every
//! published score.

use rayon::prelude::*;

use crate::constants::{
    DEFAULT_WEIGHT, DRUGGABILITY_SHARE, DRUGGABILITY_WEIGHT, LITERATURE_LOG_SCALE,
    LITERATURE_SHARE, OMICS_WEIGHT, PATHWAY_WEIGHT, REPLICATION_PROXY, REPLICATION_WEIGHT,
    SCORE_DECIMALS, TARGET_EVIDENCE_WEIGHT,
};
use crate::evidence::{EvidenceSource, PubMedProxy, resolve_evidence};
use crate::types::{Druggability, GeneRecord, Pathway, ScoreBreakdown, ScoredGene};

/// Druggability weight used inside the omics evidence term.
#[must_use]
pub const fn omics_druggability_weight(druggability: &Druggability) -> f64 {
    match druggability {
        Druggability::High => 1.0,
        Druggability::Moderate => 0.6,
        Druggability::Low => 0.3,
        Druggability::Unrecognized(_) => DEFAULT_WEIGHT,
    }
}

/// Standalone druggability component of the composite score.
#[must_use]
pub const fn druggability_component(druggability: &Druggability) -> f64 {
    match druggability {
        Druggability::High => 0.9,
        Druggability::Moderate => 0.6,
        Druggability::Low => 0.3,
        Druggability::Unrecognized(_) => DEFAULT_WEIGHT,
    }
}

/// Centrality weight of a pathway category.
#[must_use]
pub const fn pathway_centrality(pathway: &Pathway) -> f64 {
    match pathway {
        Pathway::CytokineStorm => 0.9,
        Pathway::CheckpointExhaustion => 0.85,
        Pathway::Inflammasome => 0.8,
        Pathway::SurvivalSignaling => 0.75,
        Pathway::Coagulation | Pathway::PatternRecognition => 0.7,
        Pathway::Metabolism | Pathway::Vascular => 0.65,
        Pathway::MyeloidDysfunction => 0.6,
        Pathway::CellTrafficking => 0.55,
        Pathway::Apoptosis => 0.5,
        Pathway::Unrecognized(_) => DEFAULT_WEIGHT,
    }
}

/// Literature volume normalized to `[0, 1]`; saturates near 1000 papers.
#[must_use]
pub fn literature_strength(pubmed_count: u64) -> f64 {
    ((pubmed_count as f64 + 1.0).log10() / LITERATURE_LOG_SCALE).min(1.0)
}

/// Omics evidence: literature strength blended with druggability.
#[must_use]
pub fn omics_evidence(pubmed_count: u64, druggability: &Druggability) -> f64 {
    literature_strength(pubmed_count) * LITERATURE_SHARE
        + omics_druggability_weight(druggability) * DRUGGABILITY_SHARE
}

/// Computes every unrounded term for `gene`.
pub fn score_breakdown(gene: &GeneRecord, source: &dyn EvidenceSource) -> ScoreBreakdown {
    ScoreBreakdown {
        omics_evidence: omics_evidence(gene.pubmed_count, &gene.druggability),
        target_evidence: resolve_evidence(source, gene),
        druggability: druggability_component(&gene.druggability),
        pathway_centrality: pathway_centrality(&gene.pathway),
        replication: REPLICATION_PROXY,
    }
}

impl ScoreBreakdown {
    /// Weighted sum of the terms, rounded to three decimals.
    #[must_use]
    pub fn composite(&self) -> f64 {
        round_to(
            OMICS_WEIGHT * self.omics_evidence
                + TARGET_EVIDENCE_WEIGHT * self.target_evidence
                + DRUGGABILITY_WEIGHT * self.druggability
                + PATHWAY_WEIGHT * self.pathway_centrality
                + REPLICATION_WEIGHT * self.replication,
            SCORE_DECIMALS,
        )
    }
}

/// Composite priority score of `gene` using the PubMed evidence proxy.
///
/// # Examples
///
/// ```rust
/// use sepsis_core::scoring::composite_score;
/// use sepsis_core::types::{Druggability, GeneRecord, Pathway, PhaseRelevance};
///
/// let il6 = GeneRecord {
///     gene: "IL-6".into(),
///     symbol: "IL6".into(),
///     pathway: Pathway::CytokineStorm,
///     phase_relevance: PhaseRelevance::Early,
///     druggability: Druggability::High,
///     pubmed_count: 2847,
/// };
/// assert_eq!(composite_score(&il6), 0.94);
/// ```
#[must_use]
pub fn composite_score(gene: &GeneRecord) -> f64 {
    score_breakdown(gene, &PubMedProxy).composite()
}

/// Scores every gene, preserving input order. Ranks are left at 0.
pub fn score_genes(genes: Vec<GeneRecord>, source: &dyn EvidenceSource) -> Vec<ScoredGene> {
    genes
        .into_par_iter()
        .map(|record| {
            let breakdown = score_breakdown(&record, source);
            ScoredGene {
                composite_score: breakdown.composite(),
                breakdown,
                record,
                rank: 0,
            }
        })
        .collect()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
