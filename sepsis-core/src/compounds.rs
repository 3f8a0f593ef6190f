//! Curated compound table for the prioritized targets.
//!
//! Approved and clinical-stage drugs acting on signature targets, with
//! manually assigned potency and development stage. `Related_Gene` links a
//! compound to a signature symbol by name only.

use crate::types::{ClinicalPhase, CompoundRecord};

const fn compound(
    drug: &'static str,
    target: &'static str,
    related_gene: &'static str,
    pchembl: f64,
    phase: u8,
    evidence: &'static str,
) -> CompoundRecord {
    CompoundRecord {
        drug,
        target,
        related_gene,
        pchembl,
        phase: ClinicalPhase(phase),
        evidence,
    }
}

/// Number of curated compounds
pub const COMPOUND_COUNT: usize = 37;

static COMPOUNDS: [CompoundRecord; COMPOUND_COUNT] = [
    // IL-6 axis
    compound("Tocilizumab", "IL6R", "IL6", 8.5, 4, "RECOVERY trial - COVID-sepsis"),
    compound("Sarilumab", "IL6R", "IL6", 8.8, 4, "Approved for RA"),
    compound("Siltuximab", "IL6", "IL6", 9.0, 4, "Approved for Castleman"),
    // TNF
    compound("Infliximab", "TNF", "TNF", 9.2, 4, "Anti-TNF antibody"),
    compound("Etanercept", "TNF", "TNF", 8.8, 4, "TNF decoy receptor"),
    compound("Adalimumab", "TNF", "TNF", 9.5, 4, "Anti-TNF antibody"),
    // IL-1
    compound("Anakinra", "IL1R", "IL1B", 8.0, 4, "SAVE-MORE trial success"),
    compound("Canakinumab", "IL1B", "IL1B", 9.3, 4, "Anti-IL1β antibody"),
    compound("Rilonacept", "IL1", "IL1B", 8.2, 4, "IL-1 trap"),
    // JAK
    compound("Baricitinib", "JAK1/2", "JAK2", 7.8, 4, "ACTT-2 COVID approval"),
    compound("Ruxolitinib", "JAK1/2", "JAK2", 7.5, 4, "Approved for MPN"),
    compound("Tofacitinib", "JAK1/2/3", "JAK2", 7.4, 4, "Approved for RA"),
    compound("Upadacitinib", "JAK1", "JAK2", 8.5, 4, "High selectivity"),
    // checkpoints
    compound("Nivolumab", "PD1", "PDCD1", 9.0, 4, "Pilot sepsis trials"),
    compound("Pembrolizumab", "PD1", "PDCD1", 9.2, 4, "Approved for cancer"),
    compound("Atezolizumab", "PDL1", "CD274", 8.8, 4, "Anti-PDL1"),
    compound("Durvalumab", "PDL1", "CD274", 8.5, 4, "Anti-PDL1"),
    compound("Ipilimumab", "CTLA4", "CTLA4", 8.9, 4, "Anti-CTLA4"),
    // NLRP3
    compound("MCC950", "NLRP3", "NLRP3", 8.5, 2, "Selective inhibitor"),
    compound("OLT1177", "NLRP3", "NLRP3", 7.2, 2, "Oral inhibitor"),
    compound("Tranilast", "NLRP3", "NLRP3", 5.5, 4, "Repurposing candidate"),
    compound("Colchicine", "NLRP3", "NLRP3", 5.8, 4, "COLCORONA trial"),
    // TLR4
    compound("Eritoran", "TLR4", "TLR4", 7.5, 3, "ACCESS trial (failed)"),
    compound("TAK-242", "TLR4", "TLR4", 7.8, 2, "Small molecule"),
    // coagulation
    compound("Recombinant APC", "PROCR", "PROCR", 7.0, 4, "Xigris (withdrawn)"),
    compound("Thrombomodulin", "THBD", "THBD", 7.2, 4, "Approved in Japan"),
    compound("Antithrombin III", "F3", "F3", 6.8, 4, "Anticoagulant"),
    // VEGF
    compound("Bevacizumab", "VEGFA", "VEGFA", 9.5, 4, "Anti-VEGF"),
    compound("Aflibercept", "VEGFA", "VEGFA", 9.8, 4, "VEGF trap"),
    // HMGB1
    compound("Glycyrrhizin", "HMGB1", "HMGB1", 5.2, 2, "Natural product"),
    compound("Anti-HMGB1 mAb", "HMGB1", "HMGB1", 8.5, 1, "Preclinical"),
    // IFN-γ / IL-18
    compound("Emapalumab", "IFNG", "IFNG", 9.0, 4, "Approved for HLH"),
    compound("Tadekinig alfa", "IL18BP", "IL18", 7.5, 3, "IL-18 binding protein"),
    // immunostimulants
    compound("GM-CSF", "CSF2RA", "ARG1", 7.0, 3, "Immunostimulant"),
    compound("IFN-gamma", "IFNGR", "IFNG", 7.2, 2, "Immunostimulant"),
    compound("IL-7", "IL7R", "BCL2", 7.5, 2, "Lymphocyte recovery"),
    compound("Thymosin alpha 1", "TLR2", "TLR2", 5.5, 3, "Immunomodulator"),
];

/// Returns the curated compound table in its canonical order.
#[must_use]
pub fn compound_table() -> Vec<CompoundRecord> {
    COMPOUNDS.to_vec()
}
