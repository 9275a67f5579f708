mod catalog;
mod document;
mod insights;
mod summary;

pub use catalog::{Capability, CapabilityProfile, MaturityCatalog, RecommendationProfile};
pub use document::{Block, DocumentFormat, ReportDocument, TextStyle, Tone, REPORT_TITLE};
pub use insights::{generate_insights, InsightBand, PillarInsight};
pub use summary::{CatalogSection, MaturityReport};
