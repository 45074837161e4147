pub mod report;
pub mod variants;

pub use report::{variant_report, VariantReportPayload};
pub use variants::{generate_variants, GenerateVariantsPayload, GenerateVariantsResponse};
