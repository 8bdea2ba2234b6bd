use super::entities::{HoldingsDataset, RawHoldingsDataset, SectorSeries};
use super::value_objects::{Sector, Share, ValidationMode, Year};
use crate::domain::errors::{ValidationError, ValidationResult};
use crate::domain::logging::LogComponent;
use crate::log_warn;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Outcome of loading a dataset: the dataset plus every sector dropped on the way
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDataset {
    pub dataset: HoldingsDataset,
    pub dropped: Vec<ValidationError>,
}

/// Domain service turning raw series into a [`HoldingsDataset`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetValidationService {
    mode: ValidationMode,
}

impl DatasetValidationService {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn strict() -> Self {
        Self::new(ValidationMode::Strict)
    }

    pub fn lenient() -> Self {
        Self::new(ValidationMode::Lenient)
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Validate typed series. Duplicated sectors count as malformed input.
    pub fn validate(&self, years: &[i32], series: Vec<SectorSeries>) -> ValidationResult<LoadedDataset> {
        let years = Self::validate_years(years)?;
        let mut seen = BTreeSet::new();
        let mut accepted = Vec::with_capacity(series.len());
        let mut dropped = Vec::new();

        for s in series {
            let checked = if seen.insert(s.sector()) {
                Self::check_series(&s, years.len()).map(|_| s)
            } else {
                Err(ValidationError::MalformedInput(format!("duplicate sector '{}'", s.sector())))
            };

            match checked {
                Ok(s) => accepted.push(s),
                Err(e) => self.reject(e, &mut dropped)?,
            }
        }

        Ok(LoadedDataset { dataset: HoldingsDataset::from_validated(years, accepted), dropped })
    }

    /// Validate sector series keyed by display name.
    pub fn validate_raw(&self, raw: RawHoldingsDataset) -> ValidationResult<LoadedDataset> {
        let mut series = Vec::with_capacity(raw.sectors.len());
        let mut dropped = Vec::new();

        for (name, values) in raw.sectors {
            match Sector::from_str(&name) {
                Ok(sector) => series.push(SectorSeries::from_values(sector, &values)),
                Err(_) => self.reject(ValidationError::UnknownSector(name), &mut dropped)?,
            }
        }

        let mut loaded = self.validate(&raw.years, series)?;
        dropped.append(&mut loaded.dropped);
        loaded.dropped = dropped;
        Ok(loaded)
    }

    pub fn validate_json(&self, json: &str) -> ValidationResult<LoadedDataset> {
        let raw = RawHoldingsDataset::from_json(json)
            .map_err(|e| ValidationError::MalformedInput(e.to_string()))?;
        self.validate_raw(raw)
    }

    /// Strict mode returns the error; lenient mode records it and keeps going.
    fn reject(&self, error: ValidationError, dropped: &mut Vec<ValidationError>) -> ValidationResult<()> {
        match self.mode {
            ValidationMode::Strict => Err(error),
            ValidationMode::Lenient => {
                log_warn!(LogComponent::Domain("DatasetValidation"), "Dropping sector: {}", error);
                dropped.push(error);
                Ok(())
            }
        }
    }

    fn validate_years(years: &[i32]) -> ValidationResult<Vec<Year>> {
        if years.is_empty() {
            return Err(ValidationError::EmptyYears);
        }
        for (index, pair) in years.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(ValidationError::YearsNotIncreasing {
                    index: index + 1,
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }
        Ok(years.iter().copied().map(Year::from).collect())
    }

    fn check_series(series: &SectorSeries, expected: usize) -> ValidationResult<()> {
        if series.len() != expected {
            return Err(ValidationError::SeriesLengthMismatch {
                sector: series.sector().to_string(),
                expected,
                actual: series.len(),
            });
        }
        if let Some((index, share)) = series.shares().iter().enumerate().find(|(_, s)| !s.is_valid()) {
            return Err(ValidationError::ShareOutOfRange {
                sector: series.sector().to_string(),
                index,
                value: Share::value(share),
            });
        }
        Ok(())
    }
}
