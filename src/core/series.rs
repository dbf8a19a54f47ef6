use std::collections::BTreeMap;
use std::io::Read;

use super::errors::AnalysisError;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoricSeries {
    returns: BTreeMap<i32, f64>,
}

impl HistoricSeries {
    pub fn from_reader<R: Read>(source: R) -> Result<Self, AnalysisError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(source);

        let mut returns = BTreeMap::new();
        for (index, record) in reader.records().enumerate() {
            let row = index + 1;
            let record = record.map_err(|e| AnalysisError::MalformedInput {
                row,
                reason: e.to_string(),
            })?;
            if record.len() != 2 {
                return Err(AnalysisError::MalformedInput {
                    row,
                    reason: format!("expected a `year,return` pair, got {} fields", record.len()),
                });
            }
            let year: i32 = record[0].parse().map_err(|_| AnalysisError::MalformedInput {
                row,
                reason: format!("`{}` is not an integer year", &record[0]),
            })?;
            let value: f64 = record[1].parse().map_err(|_| AnalysisError::MalformedInput {
                row,
                reason: format!("`{}` is not a numeric return", &record[1]),
            })?;
            if returns.insert(year, value).is_some() {
                return Err(AnalysisError::DuplicateYear { year });
            }
        }

        Ok(Self { returns })
    }

    pub fn return_for(&self, year: i32) -> Result<f64, AnalysisError> {
        self.returns
            .get(&year)
            .copied()
            .ok_or(AnalysisError::MissingYear { year })
    }

    pub fn returns_for(&self, start: i32, end: i32) -> Result<Vec<f64>, AnalysisError> {
        (start..=end).map(|year| self.return_for(year)).collect()
    }

    pub fn start_year(&self) -> Result<i32, AnalysisError> {
        self.returns
            .keys()
            .next()
            .copied()
            .ok_or(AnalysisError::EmptySeries)
    }

    pub fn end_year(&self) -> Result<i32, AnalysisError> {
        self.returns
            .keys()
            .next_back()
            .copied()
            .ok_or(AnalysisError::EmptySeries)
    }

    pub fn len(&self) -> usize {
        self.returns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }
}
