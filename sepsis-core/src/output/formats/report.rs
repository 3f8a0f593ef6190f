use std::io::Write;

use crate::output::format_float;
use crate::results::PipelineResults;
use crate::types::SepsisError;

const RULE_WIDTH: usize = 60;

fn banner<W: Write>(writer: &mut W, title: &str) -> Result<(), SepsisError> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(writer, "\n{rule}\n{title}\n{rule}")?;
    Ok(())
}

/// Write the human-readable run report
pub fn write_report_text<W: Write>(
    writer: &mut W,
    results: &PipelineResults,
    top_n: usize,
) -> Result<(), SepsisError> {
    banner(writer, &format!("TOP {top_n} PRIORITIZED TARGETS"))?;
    writeln!(
        writer,
        "{:<6}{:<12}{:<25}{:<8}{}",
        "Rank", "Gene", "Pathway", "Score", "Phase"
    )?;
    writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;
    for target in results.targets.iter().take(top_n) {
        writeln!(
            writer,
            "{:<6}{:<12}{:<25}{:<8}{}",
            target.rank,
            target.record.symbol,
            target.record.pathway.as_str(),
            format_float(target.composite_score),
            target.record.phase_relevance
        )?;
    }

    let summary = &results.target_summary;
    banner(writer, "SUMMARY STATISTICS")?;
    writeln!(writer, "Total targets: {}", summary.total)?;
    writeln!(
        writer,
        "Score range: {:.3} - {:.3}",
        summary.min_score, summary.max_score
    )?;
    writeln!(writer, "Median score: {:.3}", summary.median_score)?;

    writeln!(writer, "\nTargets by druggability:")?;
    for (level, n) in &summary.by_druggability {
        writeln!(writer, "  {level}: {n} targets")?;
    }
    writeln!(writer, "\nTargets by phase:")?;
    for (phase, n) in &summary.by_phase {
        writeln!(writer, "  {phase}: {n} targets")?;
    }

    let compounds = &results.compound_summary;
    banner(writer, "COMPOUND BIOACTIVITY ANALYSIS")?;
    writeln!(writer, "Total compounds: {}", compounds.total)?;
    writeln!(writer, "FDA-approved (Phase 4): {}", compounds.approved)?;
    writeln!(writer, "Phase 3: {}", compounds.phase3)?;
    writeln!(writer, "Phase 2: {}", compounds.phase2)?;
    writeln!(writer, "Phase 1/Preclinical: {}", compounds.early_stage)?;

    writeln!(writer, "\nTargets table: {}", results.targets_path.display())?;
    writeln!(writer, "Compounds table: {}", results.compounds_path.display())?;
    Ok(())
}
