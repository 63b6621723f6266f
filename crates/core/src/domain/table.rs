use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::DomainError;

/// Years-indexed table of named numeric metrics. Years are strictly
/// increasing and every column has one (possibly missing) cell per year.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TimeSeriesTable {
    years: Vec<i32>,
    columns: BTreeMap<String, Vec<Option<f64>>>,
}

/// One column of a table paired with its years.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricSeries {
    pub name: String,
    pub points: Vec<(i32, Option<f64>)>,
}

impl MetricSeries {
    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|(_, value)| *value).collect()
    }

    pub fn observed_count(&self) -> usize {
        self.points.iter().filter(|(_, value)| value.is_some()).count()
    }

    /// Raw value of the most recent year, which may itself be missing.
    pub fn latest(&self) -> Option<f64> {
        self.points.last().and_then(|(_, value)| *value)
    }
}

impl TimeSeriesTable {
    pub fn new(years: Vec<i32>) -> Result<Self, DomainError> {
        if years.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(DomainError::InvariantViolation(
                "table years must be strictly increasing".to_string(),
            ));
        }
        Ok(Self { years, columns: BTreeMap::new() })
    }

    /// Builds a table from columns already known to match `years`.
    pub(crate) fn from_trusted_parts(
        years: Vec<i32>,
        columns: BTreeMap<String, Vec<Option<f64>>>,
    ) -> Self {
        debug_assert!(years.windows(2).all(|pair| pair[0] < pair[1]));
        debug_assert!(columns.values().all(|values| values.len() == years.len()));
        Self { years, columns }
    }

    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: Vec<Option<f64>>,
    ) -> Result<Self, DomainError> {
        self.insert_column(name, values)?;
        Ok(self)
    }

    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<Option<f64>>,
    ) -> Result<(), DomainError> {
        let name = name.into();
        if values.len() != self.years.len() {
            return Err(DomainError::InvariantViolation(format!(
                "column `{name}` has {} values for {} years",
                values.len(),
                self.years.len()
            )));
        }
        // NaN is a parse artefact, not a value.
        let values = values.into_iter().map(|value| value.filter(|v| v.is_finite())).collect();
        self.columns.insert(name, values);
        Ok(())
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn latest_year(&self) -> Option<i32> {
        self.years.last().copied()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    pub fn value(&self, year: i32, name: &str) -> Option<f64> {
        let index = self.years.binary_search(&year).ok()?;
        self.columns.get(name).and_then(|values| values[index])
    }

    pub fn series(&self, name: &str) -> Option<MetricSeries> {
        let values = self.columns.get(name)?;
        Some(MetricSeries {
            name: name.to_string(),
            points: self.years.iter().copied().zip(values.iter().copied()).collect(),
        })
    }

    /// Rows with `year >= min_year`, all columns kept.
    pub fn since(&self, min_year: i32) -> Self {
        let start = self.years.partition_point(|year| *year < min_year);
        Self {
            years: self.years[start..].to_vec(),
            columns: self
                .columns
                .iter()
                .map(|(name, values)| (name.clone(), values[start..].to_vec()))
                .collect(),
        }
    }
}
