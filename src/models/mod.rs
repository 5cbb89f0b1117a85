mod company;
mod estimates;
mod financials;
mod metrics;
mod popular;
mod price_point;
mod sourced;

pub use company::CompanyProfile;
pub use estimates::{AnalystEstimate, GrowthRecord};
pub use financials::FinancialStatementPeriod;
pub use metrics::{FinancialHealthScores, KeyMetricsSnapshot};
pub use popular::PopularStock;
pub use price_point::PricePoint;
pub use sourced::{DataOrigin, Sourced};
