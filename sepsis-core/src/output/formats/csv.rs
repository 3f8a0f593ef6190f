use std::borrow::Cow;
use std::io::Write;

use crate::signature::SIGNATURE_COLUMNS;
use crate::types::{CompoundRecord, ScoredGene, SepsisError};

const COMPOUND_COLUMNS: [&str; 6] = ["Drug", "Target", "Related_Gene", "pChEMBL", "Phase", "Evidence"];

/// Write the ranked targets, header first
pub fn write_target_rows<W: Write>(
    writer: &mut W,
    targets: &[ScoredGene],
) -> Result<(), SepsisError> {
    writeln!(
        writer,
        "{},Composite_Score,Rank",
        SIGNATURE_COLUMNS.join(",")
    )?;
    for target in targets {
        let record = &target.record;
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{}",
            escape(&record.gene),
            escape(&record.symbol),
            escape(record.pathway.as_str()),
            escape(&record.phase_relevance.to_string()),
            escape(&record.druggability.to_string()),
            record.pubmed_count,
            format_float(target.composite_score),
            target.rank
        )?;
    }
    Ok(())
}

/// Write the compound table, header first
pub fn write_compound_rows<W: Write>(
    writer: &mut W,
    compounds: &[CompoundRecord],
) -> Result<(), SepsisError> {
    writeln!(writer, "{}", COMPOUND_COLUMNS.join(","))?;
    for compound in compounds {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            escape(compound.drug),
            escape(compound.target),
            escape(compound.related_gene),
            format_float(compound.pchembl),
            compound.phase,
            escape(compound.evidence)
        )?;
    }
    Ok(())
}

/// Shortest round-trip form, keeping `.0` on integral values.
pub fn format_float(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains(['.', 'e']) {
        format!("{text}.0")
    } else {
        text
    }
}

fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
