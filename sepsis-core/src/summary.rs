use std::ops::RangeInclusive;

use crate::types::{CompoundRecord, Druggability, PhaseRelevance, ScoredGene};

/// Distribution statistics over the ranked targets.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetSummary {
    /// Number of targets scored
    pub total: usize,
    /// Lowest composite score
    pub min_score: f64,
    /// Highest composite score
    pub max_score: f64,
    /// Median composite score
    pub median_score: f64,
    /// Target counts for `High`, `Moderate`, `Low`
    pub by_druggability: Vec<(Druggability, usize)>,
    /// Target counts for `Early`, `Late`, `Both`
    pub by_phase: Vec<(PhaseRelevance, usize)>,
}

impl TargetSummary {
    /// Summarizes `targets`. Score fields are `0.0` for an empty slice.
    #[must_use]
    pub fn from_targets(targets: &[ScoredGene]) -> Self {
        let mut scores: Vec<f64> = targets.iter().map(|t| t.composite_score).collect();
        scores.sort_by(f64::total_cmp);

        let by_druggability = Druggability::LEVELS
            .into_iter()
            .map(|level| {
                let n = targets
                    .iter()
                    .filter(|t| t.record.druggability == level)
                    .count();
                (level, n)
            })
            .collect();
        let by_phase = PhaseRelevance::PHASES
            .into_iter()
            .map(|phase| {
                let n = targets
                    .iter()
                    .filter(|t| t.record.phase_relevance == phase)
                    .count();
                (phase, n)
            })
            .collect();

        Self {
            total: targets.len(),
            min_score: scores.first().copied().unwrap_or_default(),
            max_score: scores.last().copied().unwrap_or_default(),
            median_score: median(&scores),
            by_druggability,
            by_phase,
        }
    }
}

/// Development-stage breakdown of the compound table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundSummary {
    pub total: usize,
    /// Phase 4 compounds
    pub approved: usize,
    pub phase3: usize,
    pub phase2: usize,
    /// Phase 1 and preclinical
    pub early_stage: usize,
}

impl CompoundSummary {
    #[must_use]
    pub fn from_compounds(compounds: &[CompoundRecord]) -> Self {
        let count = |phases: RangeInclusive<u8>| {
            compounds
                .iter()
                .filter(|c| phases.contains(&c.phase.0))
                .count()
        };
        Self {
            total: compounds.len(),
            approved: compounds.iter().filter(|c| c.phase.is_approved()).count(),
            phase3: count(3..=3),
            phase2: count(2..=2),
            early_stage: count(0..=1),
        }
    }
}

fn median(sorted: &[f64]) -> f64 {
    match sorted.len() {
        0 => 0.0,
        n if n % 2 == 1 => sorted[n / 2],
        n => (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0,
    }
}
