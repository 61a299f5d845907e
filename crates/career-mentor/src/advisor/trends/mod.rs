//! Market trends snapshot and the advisory insights derived from it.

mod dataset;
mod insights;

pub use dataset::{
    DemandCsvImporter, DemandEntry, GrowthSeries, TrendsDataset, TrendsImportError, TREND_YEARS,
};
pub use insights::{
    derive_highlights, standard_advice, CareerAdvice, HighlightEntry, TrendsHighlights,
    TrendsReport,
};
