//! External target-evidence sources.
//!
//! The composite score reserves a quarter of its weight for evidence from a
//! target-annotation database. The scorer reads that term through
//! [`EvidenceSource`], so callers can plug in curated offline values while
//! the default run stays fully deterministic and offline.

use std::collections::HashMap;

use tracing::debug;

use crate::constants::PUBMED_PROXY_SATURATION;
use crate::types::GeneRecord;

/// Provides the target-evidence term for a gene, in `[0, 1]`.
///
/// Returning `None` means the source has no data for the gene; the scorer
/// then falls back to [`PubMedProxy`].
pub trait EvidenceSource: Send + Sync {
    fn evidence(&self, gene: &GeneRecord) -> Option<f64>;
}

/// Literature-volume stand-in for database evidence:
/// `min(PubMed_Count / 200, 1.0)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PubMedProxy;

impl PubMedProxy {
    #[must_use]
    pub fn score(pubmed_count: u64) -> f64 {
        (pubmed_count as f64 / PUBMED_PROXY_SATURATION).min(1.0)
    }
}

impl EvidenceSource for PubMedProxy {
    fn evidence(&self, gene: &GeneRecord) -> Option<f64> {
        Some(Self::score(gene.pubmed_count))
    }
}

/// Fixed symbol → evidence table.
///
/// Values outside `[0, 1]` (or NaN) are treated as missing.
///
/// # Examples
///
/// ```rust
/// use sepsis_core::evidence::StaticEvidence;
///
/// let source = StaticEvidence::from_iter([("IL6", 0.92), ("TNF", 0.88)]);
/// assert_eq!(source.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticEvidence {
    scores: HashMap<String, f64>,
}

impl StaticEvidence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: impl Into<String>, score: f64) {
        self.scores.insert(symbol.into(), score);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for StaticEvidence {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            scores: iter
                .into_iter()
                .map(|(symbol, score)| (symbol.into(), score))
                .collect(),
        }
    }
}

impl EvidenceSource for StaticEvidence {
    fn evidence(&self, gene: &GeneRecord) -> Option<f64> {
        let score = *self.scores.get(&gene.symbol)?;
        if (0.0..=1.0).contains(&score) {
            Some(score)
        } else {
            debug!(symbol = %gene.symbol, score, "discarding out-of-range evidence");
            None
        }
    }
}

/// Evidence term for `gene`, falling back to the PubMed proxy.
pub fn resolve_evidence(source: &dyn EvidenceSource, gene: &GeneRecord) -> f64 {
    source.evidence(gene).unwrap_or_else(|| {
        debug!(symbol = %gene.symbol, "no external evidence, using PubMed proxy");
        PubMedProxy::score(gene.pubmed_count)
    })
}
