use std::cmp::Ordering;

use crate::types::ScoredGene;

/// Orders targets by descending composite score and assigns ranks 1..N.
///
/// The sort is stable: targets with equal scores keep their relative input
/// order, so reruns on the same signature always produce the same ranking.
///
/// # Examples
///
/// ```rust
/// use sepsis_core::evidence::PubMedProxy;
/// use sepsis_core::ranking::rank_targets;
/// use sepsis_core::scoring::score_genes;
/// use sepsis_core::types::{Druggability, GeneRecord, Pathway, PhaseRelevance};
///
/// let gene = |symbol: &str, pubmed_count| GeneRecord {
///     gene: symbol.into(),
///     symbol: symbol.into(),
///     pathway: Pathway::Inflammasome,
///     phase_relevance: PhaseRelevance::Early,
///     druggability: Druggability::Moderate,
///     pubmed_count,
/// };
/// let ranked = rank_targets(score_genes(vec![gene("GSDMD", 128), gene("CASP1", 234)], &PubMedProxy));
/// assert_eq!(ranked[0].record.symbol, "CASP1");
/// assert_eq!(ranked[0].rank, 1);
/// ```
#[must_use]
pub fn rank_targets(mut targets: Vec<ScoredGene>) -> Vec<ScoredGene> {
    targets.sort_by(|a, b| {
        b.composite_score
            .partial_cmp(&a.composite_score)
            .unwrap_or(Ordering::Equal)
    });
    for (i, target) in targets.iter_mut().enumerate() {
        target.rank = i + 1;
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Druggability, GeneRecord, Pathway, PhaseRelevance, ScoreBreakdown};

    fn scored(symbol: &str, composite_score: f64) -> ScoredGene {
        ScoredGene {
            record: GeneRecord {
                gene: symbol.to_string(),
                symbol: symbol.to_string(),
                pathway: Pathway::Vascular,
                phase_relevance: PhaseRelevance::Both,
                druggability: Druggability::Low,
                pubmed_count: 0,
            },
            breakdown: ScoreBreakdown::default(),
            composite_score,
            rank: 0,
        }
    }

    fn symbols(targets: &[ScoredGene]) -> Vec<&str> {
        targets.iter().map(|t| t.record.symbol.as_str()).collect()
    }

    #[test]
    fn test_rank_descending() {
        let ranked = rank_targets(vec![scored("A", 0.4), scored("B", 0.9), scored("C", 0.6)]);
        assert_eq!(symbols(&ranked), vec!["B", "C", "A"]);
        let ranks: Vec<_> = ranked.iter().map(|t| t.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank_targets(vec![
            scored("CXCL8", 0.824),
            scored("LOW", 0.1),
            scored("IL10", 0.824),
            scored("TOP", 0.94),
            scored("CD274", 0.824),
        ]);
        assert_eq!(symbols(&ranked), vec!["TOP", "CXCL8", "IL10", "CD274", "LOW"]);
        assert_eq!(ranked[1].rank, 2);
        assert_eq!(ranked[3].rank, 4);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_targets(Vec::new()).is_empty());
    }

    #[test]
    fn test_ranks_form_permutation() {
        let input: Vec<_> = (0..60)
            .map(|i| scored(&format!("G{i}"), f64::from((i * 37) % 11) / 10.0))
            .collect();
        let ranked = rank_targets(input);
        let mut ranks: Vec<_> = ranked.iter().map(|t| t.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (1..=60).collect::<Vec<_>>());
        assert!(
            ranked
                .windows(2)
                .all(|w| w[0].composite_score >= w[1].composite_score)
        );
    }
}
