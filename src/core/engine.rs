use super::errors::AnalysisError;
use super::series::HistoricSeries;
use super::types::{AnalysisOutcome, BenchmarkResult, ScenarioConfig, ScenarioResult};

pub fn annualized_return(returns: &[f64]) -> Result<f64, AnalysisError> {
    if returns.is_empty() {
        return Err(AnalysisError::InsufficientData);
    }

    let mut total = 0.0;
    for &value in returns {
        let multiplier = 1.0 + value / 100.0;
        if multiplier <= 0.0 {
            return Err(AnalysisError::InvalidReturn { value });
        }
        total += multiplier.ln();
    }

    let mean = total / returns.len() as f64;
    Ok((mean.exp() - 1.0) * 100.0)
}

// Timing convention: withdrawals leave at the start of a period, before
// growth; contributions arrive at the end, after growth. Reordering these
// steps changes the result. Negative balances are allowed.
pub fn investment_value(
    principal: f64,
    returns: &[f64],
    contributions: &[f64],
    withdrawals: &[f64],
) -> Result<f64, AnalysisError> {
    if returns.len() != contributions.len() || returns.len() != withdrawals.len() {
        return Err(AnalysisError::LengthMismatch {
            returns: returns.len(),
            contributions: contributions.len(),
            withdrawals: withdrawals.len(),
        });
    }

    let mut balance = principal;
    for ((&value, &contribution), &withdrawal) in
        returns.iter().zip(contributions).zip(withdrawals)
    {
        balance -= withdrawal;
        balance *= 1.0 + value / 100.0;
        balance += contribution;
    }
    Ok(balance)
}

pub fn run_analysis(
    series: &HistoricSeries,
    config: &ScenarioConfig,
) -> Result<AnalysisOutcome, AnalysisError> {
    if config.duration == 0 {
        return Err(AnalysisError::InvalidDuration {
            duration: config.duration,
        });
    }

    let start = series.start_year()?;
    let end = series.end_year()?;
    let duration = config.duration as i32;
    if start + duration > end {
        return Err(AnalysisError::InsufficientHistory {
            start,
            end,
            duration: config.duration,
        });
    }

    let contributions = config.contribution.per_year(config.duration);
    let withdrawals = config.withdrawal.per_year(config.duration);

    let mut scenarios = Vec::new();
    let mut year = start;
    while year + duration <= end {
        // A duration-year window draws duration+1 data points; the inclusive
        // upper year feeds the annualized figure only, while the balance fold
        // consumes exactly one return per cash-flow year.
        let returns = series.returns_for(year, year + duration)?;
        let annualized = annualized_return(&returns)?;
        let end_value = investment_value(
            config.principal,
            &returns[..config.duration as usize],
            &contributions,
            &withdrawals,
        )?;
        scenarios.push(ScenarioResult {
            start_year: year,
            end_year: year + duration,
            annualized_return: annualized,
            end_value,
        });
        year += 1;
    }

    let benchmark = match config.benchmark {
        Some(rate) => {
            let returns = vec![rate; config.duration as usize];
            Some(BenchmarkResult {
                annualized_return: annualized_return(&returns)?,
                end_value: investment_value(
                    config.principal,
                    &returns,
                    &contributions,
                    &withdrawals,
                )?,
            })
        }
        None => None,
    };

    Ok(AnalysisOutcome {
        scenarios,
        benchmark,
    })
}
