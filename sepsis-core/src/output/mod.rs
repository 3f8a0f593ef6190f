//! Output writers for the prioritization tables and console report.
//!
//! ## Tables
//!
//! - **targets_ranked.csv**: signature columns plus `Composite_Score` and
//!   `Rank`, in rank order
//! - **compounds_ranked.csv**: `Drug, Target, Related_Gene, pChEMBL, Phase,
//!   Evidence`
//!
//! Both tables are read by the manuscript and figure generators, so numbers
//! are written the way those readers expect: shortest round-trip form with
//! a trailing `.0` on integral floats (`9.0`, `0.94`).
//!
//! ## Examples
//!
//! ```rust,no_run
//! use sepsis_core::{TargetPrioritizer, config::SepsisConfig};
//! use sepsis_core::output::write_targets_csv;
//! use std::io::stdout;
//!
//! let prioritizer = TargetPrioritizer::new(SepsisConfig::default());
//! let targets = prioritizer.prioritize_targets()?;
//! write_targets_csv(&mut stdout(), &targets)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::Write;

use crate::results::PipelineResults;
use crate::types::{CompoundRecord, ScoredGene, SepsisError};

mod formats {
    pub mod csv;
    pub mod report;
}

use formats::{
    csv::{write_compound_rows, write_target_rows},
    report::write_report_text,
};

pub(crate) use formats::csv::format_float;

/// Writes the ranked target table as CSV.
///
/// # Errors
///
/// Returns [`SepsisError::IoError`] if writing fails.
pub fn write_targets_csv<W: Write>(
    writer: &mut W,
    targets: &[ScoredGene],
) -> Result<(), SepsisError> {
    write_target_rows(writer, targets)
}

/// Writes the compound table as CSV.
///
/// # Errors
///
/// Returns [`SepsisError::IoError`] if writing fails.
pub fn write_compounds_csv<W: Write>(
    writer: &mut W,
    compounds: &[CompoundRecord],
) -> Result<(), SepsisError> {
    write_compound_rows(writer, compounds)
}

/// Writes the console report: top `top_n` targets, target summary and
/// compound summary.
///
/// # Errors
///
/// Returns [`SepsisError::IoError`] if writing fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    results: &PipelineResults,
    top_n: usize,
) -> Result<(), SepsisError> {
    write_report_text(writer, results, top_n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compounds::compound_table;
    use crate::summary::{CompoundSummary, TargetSummary};
    use crate::types::{Druggability, GeneRecord, Pathway, PhaseRelevance, ScoreBreakdown};
    use std::path::PathBuf;

    fn create_test_results() -> PipelineResults {
        let targets = vec![ScoredGene {
            record: GeneRecord {
                gene: "IL-6".to_string(),
                symbol: "IL6".to_string(),
                pathway: Pathway::CytokineStorm,
                phase_relevance: PhaseRelevance::Early,
                druggability: Druggability::High,
                pubmed_count: 2847,
            },
            breakdown: ScoreBreakdown::default(),
            composite_score: 0.94,
            rank: 1,
        }];
        let compounds = compound_table();
        PipelineResults {
            target_summary: TargetSummary::from_targets(&targets),
            compound_summary: CompoundSummary::from_compounds(&compounds),
            targets,
            compounds,
            targets_path: PathBuf::from("outputs/tables/targets_ranked.csv"),
            compounds_path: PathBuf::from("outputs/tables/compounds_ranked.csv"),
        }
    }

    #[test]
    fn test_write_targets_csv() {
        let results = create_test_results();
        let mut buffer = Vec::new();
        write_targets_csv(&mut buffer, &results.targets).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "Gene,Symbol,Pathway,Phase_Relevance,Druggability,PubMed_Count,Composite_Score,Rank\n\
             IL-6,IL6,cytokine_storm,Early,High,2847,0.94,1\n"
        );
    }

    #[test]
    fn test_write_compounds_csv() {
        let results = create_test_results();
        let mut buffer = Vec::new();
        write_compounds_csv(&mut buffer, &results.compounds).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 38);
        assert_eq!(lines[0], "Drug,Target,Related_Gene,pChEMBL,Phase,Evidence");
        assert_eq!(
            lines[1],
            "Tocilizumab,IL6R,IL6,8.5,4,RECOVERY trial - COVID-sepsis"
        );
        assert_eq!(lines[3], "Siltuximab,IL6,IL6,9.0,4,Approved for Castleman");
    }

    #[test]
    fn test_write_report() {
        let results = create_test_results();
        let mut buffer = Vec::new();
        write_report(&mut buffer, &results, 15).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("TOP 15 PRIORITIZED TARGETS"));
        assert!(output.contains("IL6"));
        assert!(output.contains("Total targets: 1"));
        assert!(output.contains("FDA-approved (Phase 4): 26"));
    }
}
