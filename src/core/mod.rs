mod engine;
mod errors;
mod series;
mod types;

pub use engine::{annualized_return, investment_value, run_analysis};
pub use errors::AnalysisError;
pub use series::HistoricSeries;
pub use types::{
    AnalysisOutcome, BenchmarkResult, CashFlowPolicy, ScenarioConfig, ScenarioResult,
};
