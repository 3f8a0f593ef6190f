use std::fmt;

use thiserror::Error;

/// Druggability annotation of a host target.
///
/// The three curated levels map to fixed weights in the scorer. Any other
/// label found in the input is carried through unchanged and scored with
/// the neutral default weight.
///
/// # Examples
///
/// ```rust
/// use sepsis_core::types::Druggability;
///
/// assert_eq!(Druggability::parse("High"), Druggability::High);
/// assert_eq!(Druggability::parse("n/a").to_string(), "n/a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Druggability {
    /// Established small-molecule or biologic tractability
    High,
    /// Partial tractability evidence
    Moderate,
    /// Little or no tractability evidence
    Low,
    /// Label outside the curated vocabulary, kept verbatim
    Unrecognized(String),
}

impl Druggability {
    /// Parses a label, falling back to [`Druggability::Unrecognized`].
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label {
            "High" => Self::High,
            "Moderate" => Self::Moderate,
            "Low" => Self::Low,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Curated levels in reporting order.
    pub const LEVELS: [Self; 3] = [Self::High, Self::Moderate, Self::Low];
}

impl fmt::Display for Druggability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Low => write!(f, "Low"),
            Self::Unrecognized(label) => write!(f, "{label}"),
        }
    }
}

/// Stage of the biphasic sepsis immune response a target is relevant to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhaseRelevance {
    /// Hyperinflammatory phase (first ~72h)
    Early,
    /// Immunosuppressive phase
    Late,
    /// Relevant across both phases
    Both,
    /// Label outside `Early | Late | Both`, kept verbatim
    Unrecognized(String),
}

impl PhaseRelevance {
    /// Parses a label, falling back to [`PhaseRelevance::Unrecognized`].
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label {
            "Early" => Self::Early,
            "Late" => Self::Late,
            "Both" => Self::Both,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Whether the label belongs to the curated vocabulary.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Curated phases in reporting order.
    pub const PHASES: [Self; 3] = [Self::Early, Self::Late, Self::Both];
}

impl fmt::Display for PhaseRelevance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Early => write!(f, "Early"),
            Self::Late => write!(f, "Late"),
            Self::Both => write!(f, "Both"),
            Self::Unrecognized(label) => write!(f, "{label}"),
        }
    }
}

/// Functional pathway category of a host target.
///
/// Eleven categories are curated; each carries a fixed centrality weight
/// (see [`crate::scoring::pathway_centrality`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pathway {
    CytokineStorm,
    CheckpointExhaustion,
    Inflammasome,
    SurvivalSignaling,
    Coagulation,
    Metabolism,
    PatternRecognition,
    MyeloidDysfunction,
    CellTrafficking,
    Vascular,
    Apoptosis,
    /// Category outside the curated set, kept verbatim
    Unrecognized(String),
}

impl Pathway {
    /// All curated categories.
    pub const CATEGORIES: [Self; 11] = [
        Self::CytokineStorm,
        Self::CheckpointExhaustion,
        Self::Inflammasome,
        Self::SurvivalSignaling,
        Self::Coagulation,
        Self::Metabolism,
        Self::PatternRecognition,
        Self::MyeloidDysfunction,
        Self::CellTrafficking,
        Self::Vascular,
        Self::Apoptosis,
    ];

    /// Parses a snake_case category name, falling back to
    /// [`Pathway::Unrecognized`].
    #[must_use]
    pub fn parse(label: &str) -> Self {
        Self::CATEGORIES
            .iter()
            .find(|category| category.as_str() == label)
            .cloned()
            .unwrap_or_else(|| Self::Unrecognized(label.to_string()))
    }

    /// Category name as written in the signature file.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::CytokineStorm => "cytokine_storm",
            Self::CheckpointExhaustion => "checkpoint_exhaustion",
            Self::Inflammasome => "inflammasome",
            Self::SurvivalSignaling => "survival_signaling",
            Self::Coagulation => "coagulation",
            Self::Metabolism => "metabolism",
            Self::PatternRecognition => "pattern_recognition",
            Self::MyeloidDysfunction => "myeloid_dysfunction",
            Self::CellTrafficking => "cell_trafficking",
            Self::Vascular => "vascular",
            Self::Apoptosis => "apoptosis",
            Self::Unrecognized(label) => label,
        }
    }
}

impl fmt::Display for Pathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the gene signature.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneRecord {
    /// Stable gene identifier
    pub gene: String,
    /// Display symbol (HGNC)
    pub symbol: String,
    /// Functional pathway category
    pub pathway: Pathway,
    /// Immune-response phase the target is relevant to
    pub phase_relevance: PhaseRelevance,
    /// Tractability annotation
    pub druggability: Druggability,
    /// Number of sepsis-related PubMed hits
    pub pubmed_count: u64,
}

/// Per-component contributions to a composite score, before rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    /// Literature volume blended with druggability weight
    pub omics_evidence: f64,
    /// External target-evidence term (PubMed proxy by default)
    pub target_evidence: f64,
    /// Druggability component
    pub druggability: f64,
    /// Pathway centrality weight
    pub pathway_centrality: f64,
    /// Replication proxy
    pub replication: f64,
}

/// A gene record with its composite priority score and rank.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredGene {
    /// Source signature row
    pub record: GeneRecord,
    /// Unrounded component contributions
    pub breakdown: ScoreBreakdown,
    /// Composite score rounded to three decimals
    pub composite_score: f64,
    /// Dense rank, 1 = highest score; 0 until ranked
    pub rank: usize,
}

/// Clinical development stage of a compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClinicalPhase(pub u8);

impl ClinicalPhase {
    /// Marketed / regulator-approved
    pub const APPROVED: Self = Self(4);

    /// Whether the compound is approved for clinical use.
    #[must_use]
    pub const fn is_approved(self) -> bool {
        self.0 == Self::APPROVED.0
    }

    /// Human-readable stage label.
    #[must_use]
    pub fn label(self) -> String {
        match self.0 {
            4 => "FDA Approved".to_string(),
            3 => "Phase III".to_string(),
            2 => "Phase II".to_string(),
            1 => "Phase I".to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ClinicalPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A drug/compound associated with a signature target.
///
/// `related_gene` is a plain symbol reference; it is not checked against
/// the gene signature.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundRecord {
    /// Drug name
    pub drug: &'static str,
    /// Protein or receptor the drug acts on
    pub target: &'static str,
    /// Signature symbol the compound is associated with
    pub related_gene: &'static str,
    /// Potency, negative log molar
    pub pchembl: f64,
    /// Clinical development stage
    pub phase: ClinicalPhase,
    /// Clinical evidence note
    pub evidence: &'static str,
}

/// Errors that can occur while running the prioritization pipeline.
#[derive(Debug, Error)]
pub enum SepsisError {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Input table could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Signature content violates its invariants
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),
    /// Worker pool could not be built
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_druggability_parse_known_levels() {
        assert_eq!(Druggability::parse("High"), Druggability::High);
        assert_eq!(Druggability::parse("Moderate"), Druggability::Moderate);
        assert_eq!(Druggability::parse("Low"), Druggability::Low);
    }

    #[test]
    fn test_druggability_parse_is_case_sensitive() {
        assert_eq!(
            Druggability::parse("high"),
            Druggability::Unrecognized("high".to_string())
        );
    }

    #[test]
    fn test_unrecognized_labels_display_verbatim() {
        assert_eq!(Druggability::parse("Unknown").to_string(), "Unknown");
        assert_eq!(PhaseRelevance::parse("Mid").to_string(), "Mid");
        assert_eq!(Pathway::parse("autophagy").to_string(), "autophagy");
    }

    #[test]
    fn test_pathway_parse_all_categories() {
        for category in Pathway::CATEGORIES {
            assert_eq!(Pathway::parse(category.as_str()), category);
        }
        assert_eq!(
            Pathway::parse("Cytokine_Storm"),
            Pathway::Unrecognized("Cytokine_Storm".to_string())
        );
    }

    #[test]
    fn test_phase_relevance_recognition() {
        assert!(PhaseRelevance::parse("Early").is_recognized());
        assert!(PhaseRelevance::parse("Both").is_recognized());
        assert!(!PhaseRelevance::parse("").is_recognized());
    }

    #[test]
    fn test_clinical_phase_labels() {
        assert_eq!(ClinicalPhase(4).label(), "FDA Approved");
        assert_eq!(ClinicalPhase(3).label(), "Phase III");
        assert_eq!(ClinicalPhase(2).label(), "Phase II");
        assert_eq!(ClinicalPhase(1).label(), "Phase I");
        assert_eq!(ClinicalPhase(0).label(), "0");
        assert!(ClinicalPhase(4).is_approved());
        assert!(!ClinicalPhase(3).is_approved());
    }

    #[test]
    fn test_error_display() {
        let err = SepsisError::ParseError("line 3: bad count".to_string());
        assert_eq!(err.to_string(), "Parse error: line 3: bad count");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SepsisError = io.into();
        assert!(matches!(err, SepsisError::IoError(_)));
    }
}
