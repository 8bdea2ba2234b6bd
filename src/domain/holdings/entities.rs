use super::value_objects::{Sector, Share, Year};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Domain entity - one sector's share of holdings, one value per dataset year
#[derive(Debug, Clone, PartialEq)]
pub struct SectorSeries {
    sector: Sector,
    shares: Vec<Share>,
}

impl SectorSeries {
    pub fn new(sector: Sector, shares: Vec<Share>) -> Self {
        Self { sector, shares }
    }

    pub fn from_values(sector: Sector, values: &[f64]) -> Self {
        Self::new(sector, values.iter().copied().map(Share::from).collect())
    }

    pub fn sector(&self) -> Sector {
        self.sector
    }

    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    pub fn values(&self) -> Vec<f64> {
        self.shares.iter().map(Share::value).collect()
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn last(&self) -> Option<Share> {
        self.shares.last().copied()
    }
}

/// Domain entity - per-sector share series over a common, strictly increasing year axis
///
/// Instances only come out of [`DatasetValidationService`](super::services::DatasetValidationService),
/// so every series has exactly one share per year. Shares are never re-normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingsDataset {
    years: Vec<Year>,
    sectors: BTreeMap<Sector, SectorSeries>,
}

impl HoldingsDataset {
    pub(crate) fn from_validated(years: Vec<Year>, series: Vec<SectorSeries>) -> Self {
        let sectors = series.into_iter().map(|s| (s.sector(), s)).collect();
        Self { years, sectors }
    }

    pub fn years(&self) -> &[Year] {
        &self.years
    }

    pub fn year_values(&self) -> Vec<i32> {
        self.years.iter().map(Year::value).collect()
    }

    pub fn first_year(&self) -> Option<Year> {
        self.years.first().copied()
    }

    pub fn last_year(&self) -> Option<Year> {
        self.years.last().copied()
    }

    /// Number of observation years.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn series(&self, sector: Sector) -> Option<&SectorSeries> {
        self.sectors.get(&sector)
    }

    pub fn contains(&self, sector: Sector) -> bool {
        self.sectors.contains_key(&sector)
    }

    pub fn sectors(&self) -> impl Iterator<Item = Sector> + '_ {
        self.sectors.keys().copied()
    }

    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    /// Sum of all present sectors' shares for each year.
    pub fn share_totals(&self) -> Vec<(Year, f64)> {
        self.years
            .iter()
            .enumerate()
            .map(|(i, year)| {
                let total = self
                    .sectors
                    .values()
                    .filter_map(|s| s.shares().get(i))
                    .map(Share::value)
                    .sum();
                (*year, total)
            })
            .collect()
    }

    /// Years whose share total differs from 1.0 by more than `tolerance`.
    pub fn normalization_gaps(&self, tolerance: f64) -> Vec<NormalizationGap> {
        self.share_totals()
            .into_iter()
            .filter(|(_, total)| (total - 1.0).abs() > tolerance)
            .map(|(year, total)| NormalizationGap { year, total })
            .collect()
    }
}

/// A year whose sector shares do not add up to a whole
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationGap {
    pub year: Year,
    pub total: f64,
}

/// Unvalidated dataset as it appears in JSON input
///
/// ```json
/// { "years": [1980, 1985], "sectors": { "Households": [0.6, 0.4] } }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawHoldingsDataset {
    pub years: Vec<i32>,
    pub sectors: BTreeMap<String, Vec<f64>>,
}

impl RawHoldingsDataset {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
