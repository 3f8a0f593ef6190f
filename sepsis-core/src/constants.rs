// =============================================================================
// Pipeline layout
// =============================================================================

/// Gene signature input, relative to the project root
pub const GENE_SIGNATURE_PATH: &str = "data/gene_signature.csv";

/// Directory receiving the ranked tables, relative to the project root
pub const TABLES_DIR: &str = "outputs/tables";

/// Ranked target table file name
pub const TARGETS_FILE: &str = "targets_ranked.csv";

/// Compound table file name
pub const COMPOUNDS_FILE: &str = "compounds_ranked.csv";

/// Number of rows in the curated gene signature
pub const EXPECTED_SIGNATURE_SIZE: usize = 60;

/// Rows shown in the console top-target table
pub const DEFAULT_TOP_N: usize = 15;

// =============================================================================
// Composite score weights
// =============================================================================

/// Weight of the omics evidence term
pub const OMICS_WEIGHT: f64 = 0.35;

/// Weight of the external target-evidence term
pub const TARGET_EVIDENCE_WEIGHT: f64 = 0.25;

/// Weight of the druggability component
pub const DRUGGABILITY_WEIGHT: f64 = 0.20;

/// Weight of the pathway centrality term
pub const PATHWAY_WEIGHT: f64 = 0.10;

/// Weight of the replication term
pub const REPLICATION_WEIGHT: f64 = 0.10;

/// Replication proxy applied to every gene
pub const REPLICATION_PROXY: f64 = 0.7;

/// Decimal places kept in the composite score
pub const SCORE_DECIMALS: i32 = 3;

// =============================================================================
// Omics evidence
// =============================================================================

/// Share of omics evidence taken from literature volume
pub const LITERATURE_SHARE: f64 = 0.6;

/// Share of omics evidence taken from the druggability weight
pub const DRUGGABILITY_SHARE: f64 = 0.4;

/// log10 divisor that maps ~1000 publications to full literature weight
pub const LITERATURE_LOG_SCALE: f64 = 3.0;

/// Publication count at which the PubMed evidence proxy saturates
pub const PUBMED_PROXY_SATURATION: f64 = 200.0;

/// Weight used whenever an annotation falls outside its vocabulary
pub const DEFAULT_WEIGHT: f64 = 0.5;
