//! Gene signature loading and validation.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::info;

use crate::constants::EXPECTED_SIGNATURE_SIZE;
use crate::types::{Druggability, GeneRecord, Pathway, PhaseRelevance, SepsisError};

/// Columns the signature must provide, in output order.
pub const SIGNATURE_COLUMNS: [&str; 6] = [
    "Gene",
    "Symbol",
    "Pathway",
    "Phase_Relevance",
    "Druggability",
    "PubMed_Count",
];

/// Reads the gene signature CSV at `path`.
///
/// Columns are matched by header name, so their order is free and extra
/// columns are ignored. Unknown pathway, phase or druggability labels are
/// kept as-is; only structural problems are errors.
///
/// # Errors
///
/// - [`SepsisError::IoError`] if the file cannot be opened or read
/// - [`SepsisError::ParseError`] for a missing column, a short row or a
///   `PubMed_Count` that is not a non-negative integer
pub fn load_gene_signature(path: impl AsRef<Path>) -> Result<Vec<GeneRecord>, SepsisError> {
    let path = path.as_ref();
    let genes = read_gene_signature(File::open(path)?)?;
    info!(count = genes.len(), path = %path.display(), "loaded gene signature");
    Ok(genes)
}

/// Parses a gene signature from any reader.
///
/// # Errors
///
/// See [`load_gene_signature`].
pub fn read_gene_signature<R: Read>(reader: R) -> Result<Vec<GeneRecord>, SepsisError> {
    let mut lines = BufReader::new(reader).lines().enumerate();

    let header = loop {
        match lines.next() {
            Some((_, line)) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break split_csv_line(line.trim_start_matches('\u{feff}'));
                }
            }
            None => return Err(SepsisError::ParseError("empty gene signature".to_string())),
        }
    };

    let mut index = [0usize; SIGNATURE_COLUMNS.len()];
    for (slot, column) in index.iter_mut().zip(SIGNATURE_COLUMNS) {
        *slot = header
            .iter()
            .position(|name| name.trim() == column)
            .ok_or_else(|| SepsisError::ParseError(format!("missing column '{column}'")))?;
    }
    let width = header.len();

    let mut genes = Vec::new();
    for (line_no, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_csv_line(&line);
        if fields.len() != width {
            return Err(SepsisError::ParseError(format!(
                "line {}: expected {} fields, found {}",
                line_no + 1,
                width,
                fields.len()
            )));
        }
        let field = |i: usize| fields[index[i]].trim();

        let pubmed_count = field(5).parse::<u64>().map_err(|_| {
            SepsisError::ParseError(format!(
                "line {}: invalid PubMed_Count '{}'",
                line_no + 1,
                field(5)
            ))
        })?;

        genes.push(GeneRecord {
            gene: field(0).to_string(),
            symbol: field(1).to_string(),
            pathway: Pathway::parse(field(2)),
            phase_relevance: PhaseRelevance::parse(field(3)),
            druggability: Druggability::parse(field(4)),
            pubmed_count,
        });
    }

    Ok(genes)
}

/// Checks the curated signature invariants: exactly 60 rows, every phase
/// one of `Early | Late | Both`.
///
/// # Errors
///
/// Returns [`SepsisError::InvalidSignature`] describing the first violation.
pub fn validate_signature(genes: &[GeneRecord]) -> Result<(), SepsisError> {
    if genes.len() != EXPECTED_SIGNATURE_SIZE {
        return Err(SepsisError::InvalidSignature(format!(
            "expected {} genes, found {}",
            EXPECTED_SIGNATURE_SIZE,
            genes.len()
        )));
    }
    if let Some(gene) = genes.iter().find(|g| !g.phase_relevance.is_recognized()) {
        return Err(SepsisError::InvalidSignature(format!(
            "{} has invalid phase '{}'",
            gene.symbol, gene.phase_relevance
        )));
    }
    Ok(())
}

/// Splits one CSV line, honouring double-quoted fields and `""` escapes.
pub(crate) fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            ('"', true) => in_quotes = false,
            ('"', false) if current.is_empty() => in_quotes = true,
            (',', false) => fields.push(std::mem::take(&mut current)),
            (c, _) => current.push(c),
        }
    }
    fields.push(current);
    fields
}
