use std::cmp::Ordering;
use std::fs::File;
use std::path::PathBuf;

use clap::Parser;

use crate::core::{
    AnalysisOutcome, CashFlowPolicy, HistoricSeries, ScenarioConfig, run_analysis,
};

#[derive(Parser, Debug)]
#[command(
    name = "hindsight",
    about = "Rolling-window historical return analyzer (annualized returns + cash-flow-aware end values)"
)]
pub struct Cli {
    #[arg(long, help = "Path to a CSV file with historic data (year,return)")]
    pub source: PathBuf,
    #[arg(long, help = "The investment duration in years")]
    pub duration: u32,
    #[arg(long, help = "Invested amount")]
    pub principal: f64,
    #[arg(long, default_value_t = 0.0, help = "Annual contribution")]
    pub contrib: f64,
    #[arg(
        long,
        default_value_t = 1,
        help = "The simulated year from which annual contributions start"
    )]
    pub contrib_start: u32,
    #[arg(
        long,
        help = "The simulated year after which annual contributions stop; defaults to the full duration"
    )]
    pub contrib_stop: Option<u32>,
    #[arg(long, default_value_t = 0.0, help = "Annual withdrawal")]
    pub withdraw: f64,
    #[arg(
        long,
        default_value_t = 1,
        help = "The simulated year from which annual withdrawals start"
    )]
    pub withdraw_start: u32,
    #[arg(
        long,
        help = "The simulated year after which annual withdrawals stop; defaults to the full duration"
    )]
    pub withdraw_stop: Option<u32>,
    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Annualized return in percent to use as a benchmark"
    )]
    pub benchmark: Option<f64>,
    #[arg(
        long,
        default_value_t = f64::NEG_INFINITY,
        allow_hyphen_values = true,
        help = "Min annualized return to show"
    )]
    pub min: f64,
    #[arg(
        long,
        default_value_t = f64::INFINITY,
        allow_hyphen_values = true,
        help = "Max annualized return to show"
    )]
    pub max: f64,
    #[arg(long, help = "Emit the outcome as JSON instead of a table")]
    pub json: bool,
}

impl Cli {
    fn to_config(&self) -> ScenarioConfig {
        ScenarioConfig {
            duration: self.duration,
            principal: self.principal,
            contribution: CashFlowPolicy::windowed(
                self.contrib,
                self.contrib_start,
                self.contrib_stop,
            ),
            withdrawal: CashFlowPolicy::windowed(
                self.withdraw,
                self.withdraw_start,
                self.withdraw_stop,
            ),
            benchmark: self.benchmark,
        }
    }
}

pub fn run(cli: Cli) -> Result<(), String> {
    let file = File::open(&cli.source)
        .map_err(|e| format!("failed to open {}: {e}", cli.source.display()))?;
    let series = HistoricSeries::from_reader(file).map_err(|e| e.to_string())?;
    let outcome = run_analysis(&series, &cli.to_config()).map_err(|e| e.to_string())?;
    let view = presentation_view(outcome, cli.min, cli.max);

    if cli.json {
        let text = serde_json::to_string_pretty(&view).map_err(|e| e.to_string())?;
        println!("{text}");
    } else {
        print_table(&view);
    }
    Ok(())
}

// Filtering and ordering happen here, after the core has computed every
// window: min/max bound the annualized return, rows sort by end value.
fn presentation_view(outcome: AnalysisOutcome, min: f64, max: f64) -> AnalysisOutcome {
    let mut scenarios: Vec<_> = outcome
        .scenarios
        .into_iter()
        .filter(|s| min <= s.annualized_return && s.annualized_return <= max)
        .collect();
    scenarios.sort_by(|a, b| {
        b.end_value
            .partial_cmp(&a.end_value)
            .unwrap_or(Ordering::Equal)
    });
    AnalysisOutcome {
        scenarios,
        benchmark: outcome.benchmark,
    }
}

fn print_table(view: &AnalysisOutcome) {
    let has_benchmark = view.benchmark.is_some();
    let benchmark_header = if has_benchmark {
        "\tDifference From Benchmark"
    } else {
        ""
    };
    let benchmark_rule = if has_benchmark {
        "\t========================="
    } else {
        ""
    };
    println!("Period\t\tReturn\tEnd Value{benchmark_header}");
    println!("======\t\t======\t========={benchmark_rule}");

    if let Some(benchmark) = &view.benchmark {
        println!(
            "Benchmark\t{:.2}%\t{}\n",
            benchmark.annualized_return,
            format_amount(benchmark.end_value)
        );
    }

    for scenario in &view.scenarios {
        let mut line = format!(
            "{}-{}\t{:.2}%\t{}",
            scenario.start_year,
            scenario.end_year,
            scenario.annualized_return,
            format_amount(scenario.end_value)
        );
        if let Some(benchmark) = &view.benchmark {
            line.push_str(&format!(
                "\t\t({})",
                format_amount(scenario.end_value - benchmark.end_value)
            ));
        }
        println!("{line}");
    }
}

fn format_amount(value: f64) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let text = format!("{:.2}", value.abs());
    let (whole, frac) = match text.split_once('.') {
        Some(parts) => parts,
        None => (text.as_str(), "00"),
    };
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}{grouped}.{frac}")
}
