mod marketing;
mod metrics;
mod sale;

// Publicly expose the Metrics abstraction
pub use metrics::{Metrics, MetricsPtr};

// Request classification and sale payloads
pub use marketing::{MarketingMedium, MediumQuery};
pub use sale::{AgeBracket, SaleEvent};
