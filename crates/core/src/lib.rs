pub mod config;
pub mod dataset;
pub mod directory;
pub mod domain;
pub mod errors;
pub mod recommend;
pub mod trends;

pub use dataset::{load_csv, load_or_sample, parse_csv, sample_table, DataSource, DatasetError};
pub use directory::{Company, CompanyTier, TierListing, UnknownTier};
pub use domain::industry::{Industry, MetricRole};
pub use domain::survey::{
    strength_profile, BusinessLanguage, JobRole, Major, PreparationStage, Strength, SurveyAnswers,
    SurveyResponse, TheoryLevel,
};
pub use domain::table::{MetricSeries, TimeSeriesTable};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use recommend::{recommend, RecommendationBundle, RecommendationEngine};
pub use trends::{
    compute_cagr, format_growth, snapshot, IndustrySnapshot, MarketRegime, MetricTrend,
    TrendAnalyzer, TrendSet,
};
