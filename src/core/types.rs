use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct CashFlowPolicy {
    pub amount: f64,
    pub start: u32,
    pub stop: Option<u32>,
}

impl CashFlowPolicy {
    pub fn flat(amount: f64) -> Self {
        Self {
            amount,
            start: 1,
            stop: None,
        }
    }

    pub fn windowed(amount: f64, start: u32, stop: Option<u32>) -> Self {
        Self { amount, start, stop }
    }

    pub fn none() -> Self {
        Self::flat(0.0)
    }

    // Expands the policy into one amount per simulated year, 1-based. A
    // missing stop bound means the flow runs to the end of the window.
    pub fn per_year(&self, duration: u32) -> Vec<f64> {
        let stop = self.stop.unwrap_or(duration);
        (1..=duration)
            .map(|year| {
                if self.start <= year && year <= stop {
                    self.amount
                } else {
                    0.0
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    pub duration: u32,
    pub principal: f64,
    pub contribution: CashFlowPolicy,
    pub withdrawal: CashFlowPolicy,
    pub benchmark: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub start_year: i32,
    pub end_year: i32,
    pub annualized_return: f64,
    pub end_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    pub annualized_return: f64,
    pub end_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub scenarios: Vec<ScenarioResult>,
    pub benchmark: Option<BenchmarkResult>,
}
