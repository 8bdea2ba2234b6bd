//! Embedded holdings datasets.
//!
//! Shares by investor type from the Federal Reserve Z.1 Financial Accounts
//! (Flow of Funds), market value of holdings. Each dataset is validated once,
//! on first access, and then shared read-only.

use super::entities::{HoldingsDataset, SectorSeries};
use super::services::DatasetValidationService;
use super::value_objects::{ContainerId, Sector, ValidationMode};
use crate::domain::errors::ValidationResult;
use once_cell::sync::Lazy;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

/// Static literal form of a dataset
#[derive(Debug)]
pub struct DatasetSource {
    pub years: &'static [i32],
    pub sectors: &'static [(Sector, &'static [f64])],
}

impl DatasetSource {
    pub fn series(&self) -> Vec<SectorSeries> {
        self.sectors
            .iter()
            .map(|(sector, values)| SectorSeries::from_values(*sector, values))
            .collect()
    }

    pub fn load(&self, mode: ValidationMode) -> ValidationResult<HoldingsDataset> {
        DatasetValidationService::new(mode)
            .validate(self.years, self.series())
            .map(|loaded| loaded.dataset)
    }
}

const FULL_RANGE: &[i32] = &[1960, 1965, 1970, 1975, 1980, 1985, 1990, 1995, 2000, 2005, 2010, 2015, 2020, 2023];

/// Table L.223, corporate equities.
pub static EQUITIES: DatasetSource = DatasetSource {
    years: FULL_RANGE,
    sectors: &[
        (Sector::Households, &[0.86, 0.84, 0.78, 0.71, 0.63, 0.55, 0.51, 0.48, 0.42, 0.38, 0.36, 0.38, 0.39, 0.40]),
        (Sector::MutualFunds, &[0.03, 0.04, 0.05, 0.04, 0.03, 0.05, 0.07, 0.13, 0.19, 0.24, 0.26, 0.28, 0.29, 0.28]),
        (Sector::PensionFunds, &[0.04, 0.05, 0.08, 0.13, 0.18, 0.24, 0.26, 0.25, 0.24, 0.22, 0.20, 0.17, 0.15, 0.14]),
        (Sector::Insurance, &[0.04, 0.04, 0.04, 0.05, 0.05, 0.05, 0.05, 0.05, 0.05, 0.05, 0.04, 0.04, 0.03, 0.03]),
        (Sector::Banks, &[0.01, 0.01, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02]),
        (Sector::Foreign, &[0.02, 0.02, 0.03, 0.05, 0.09, 0.09, 0.09, 0.07, 0.08, 0.09, 0.12, 0.11, 0.12, 0.13]),
    ],
};

/// Table L.210, Treasury bills, notes and bonds.
pub static TREASURY: DatasetSource = DatasetSource {
    years: FULL_RANGE,
    sectors: &[
        (Sector::Households, &[0.24, 0.21, 0.20, 0.18, 0.14, 0.10, 0.10, 0.08, 0.06, 0.05, 0.05, 0.05, 0.04, 0.04]),
        (Sector::MutualFunds, &[0.00, 0.00, 0.01, 0.01, 0.01, 0.03, 0.05, 0.06, 0.04, 0.05, 0.07, 0.08, 0.09, 0.10]),
        (Sector::PensionFunds, &[0.03, 0.03, 0.03, 0.04, 0.06, 0.11, 0.12, 0.08, 0.06, 0.06, 0.06, 0.05, 0.04, 0.04]),
        (Sector::Insurance, &[0.04, 0.03, 0.03, 0.03, 0.03, 0.04, 0.05, 0.04, 0.03, 0.03, 0.03, 0.03, 0.02, 0.02]),
        (Sector::Banks, &[0.17, 0.16, 0.15, 0.12, 0.10, 0.09, 0.08, 0.07, 0.05, 0.03, 0.02, 0.03, 0.05, 0.06]),
        (Sector::FederalReserve, &[0.12, 0.14, 0.16, 0.18, 0.14, 0.10, 0.09, 0.10, 0.12, 0.12, 0.11, 0.18, 0.24, 0.20]),
        (Sector::Foreign, &[0.40, 0.43, 0.42, 0.44, 0.52, 0.53, 0.51, 0.57, 0.64, 0.66, 0.66, 0.58, 0.52, 0.54]),
    ],
};

/// Tables L.211 and L.217, GSE debt and agency/GSE-backed mortgage pools.
pub static AGENCY_MBS: DatasetSource = DatasetSource {
    years: &[1980, 1985, 1990, 1995, 2000, 2005, 2010, 2015, 2020, 2023],
    sectors: &[
        (Sector::Households, &[0.08, 0.06, 0.05, 0.04, 0.02, 0.02, 0.02, 0.02, 0.01, 0.01]),
        (Sector::MutualFunds, &[0.02, 0.04, 0.06, 0.08, 0.06, 0.07, 0.08, 0.09, 0.10, 0.11]),
        (Sector::PensionFunds, &[0.04, 0.06, 0.06, 0.05, 0.04, 0.04, 0.04, 0.03, 0.03, 0.03]),
        (Sector::Insurance, &[0.06, 0.07, 0.08, 0.09, 0.09, 0.08, 0.08, 0.08, 0.06, 0.06]),
        (Sector::Banks, &[0.28, 0.26, 0.24, 0.22, 0.20, 0.22, 0.16, 0.18, 0.17, 0.19]),
        (Sector::FederalReserve, &[0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.12, 0.25, 0.30, 0.24]),
        (Sector::Foreign, &[0.50, 0.49, 0.49, 0.50, 0.57, 0.55, 0.50, 0.35, 0.33, 0.36]),
    ],
};

/// Table L.213, corporate bonds excluding ABS.
pub static CORPORATE_BONDS: DatasetSource = DatasetSource {
    years: FULL_RANGE,
    sectors: &[
        (Sector::Households, &[0.12, 0.10, 0.08, 0.06, 0.05, 0.05, 0.06, 0.05, 0.06, 0.06, 0.08, 0.08, 0.07, 0.07]),
        (Sector::MutualFunds, &[0.03, 0.03, 0.03, 0.03, 0.02, 0.05, 0.07, 0.10, 0.10, 0.14, 0.18, 0.21, 0.23, 0.24]),
        (Sector::PensionFunds, &[0.10, 0.11, 0.13, 0.16, 0.18, 0.20, 0.17, 0.14, 0.12, 0.12, 0.12, 0.11, 0.10, 0.09]),
        (Sector::Insurance, &[0.45, 0.44, 0.42, 0.40, 0.38, 0.36, 0.35, 0.30, 0.28, 0.24, 0.20, 0.18, 0.16, 0.15]),
        (Sector::Banks, &[0.05, 0.05, 0.05, 0.05, 0.05, 0.04, 0.04, 0.04, 0.05, 0.06, 0.08, 0.08, 0.09, 0.10]),
        (Sector::Foreign, &[0.25, 0.27, 0.29, 0.30, 0.32, 0.30, 0.31, 0.37, 0.39, 0.38, 0.34, 0.34, 0.35, 0.35]),
    ],
};

/// Embedded dataset identifier, parsed from the page's dataset keys
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, StrumDisplay, EnumIter, EnumString, AsRefStr,
)]
pub enum DatasetKey {
    #[strum(serialize = "equities")]
    Equities,
    #[strum(serialize = "treasury")]
    Treasury,
    #[strum(serialize = "agency-mbs")]
    AgencyMbs,
    #[strum(serialize = "corporate-bonds")]
    CorporateBonds,
}

impl DatasetKey {
    pub fn source(&self) -> &'static DatasetSource {
        match self {
            Self::Equities => &EQUITIES,
            Self::Treasury => &TREASURY,
            Self::AgencyMbs => &AGENCY_MBS,
            Self::CorporateBonds => &CORPORATE_BONDS,
        }
    }

    pub fn container_id(&self) -> &'static str {
        match self {
            Self::Equities => "equities-chart",
            Self::Treasury => "treasury-chart",
            Self::AgencyMbs => "agency-mbs-chart",
            Self::CorporateBonds => "corporate-bonds-chart",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Equities => "Who Holds Corporate Equities?",
            Self::Treasury => "Who Holds Treasury Securities?",
            Self::AgencyMbs => "Who Holds Agency & MBS Securities?",
            Self::CorporateBonds => "Who Holds Corporate Bonds?",
        }
    }

    pub fn include_central_bank(&self) -> bool {
        matches!(self, Self::Treasury | Self::AgencyMbs)
    }

    pub fn source_table(&self) -> &'static str {
        match self {
            Self::Equities => "Z.1 Table L.223",
            Self::Treasury => "Z.1 Table L.210",
            Self::AgencyMbs => "Z.1 Tables L.211, L.217",
            Self::CorporateBonds => "Z.1 Table L.213",
        }
    }

    /// Validated dataset, built once per process.
    pub fn dataset(&self) -> ValidationResult<&'static HoldingsDataset> {
        let loaded = match self {
            Self::Equities => &*EQUITIES_DATASET,
            Self::Treasury => &*TREASURY_DATASET,
            Self::AgencyMbs => &*AGENCY_MBS_DATASET,
            Self::CorporateBonds => &*CORPORATE_BONDS_DATASET,
        };
        loaded.as_ref().map_err(|e| e.clone())
    }

    pub fn definition(&self) -> ChartDefinition {
        ChartDefinition {
            key: *self,
            container_id: ContainerId::from(self.container_id()),
            title: self.title(),
            include_central_bank: self.include_central_bank(),
        }
    }
}

static EQUITIES_DATASET: Lazy<ValidationResult<HoldingsDataset>> = Lazy::new(|| EQUITIES.load(ValidationMode::Lenient));
static TREASURY_DATASET: Lazy<ValidationResult<HoldingsDataset>> = Lazy::new(|| TREASURY.load(ValidationMode::Lenient));
static AGENCY_MBS_DATASET: Lazy<ValidationResult<HoldingsDataset>> =
    Lazy::new(|| AGENCY_MBS.load(ValidationMode::Lenient));
static CORPORATE_BONDS_DATASET: Lazy<ValidationResult<HoldingsDataset>> =
    Lazy::new(|| CORPORATE_BONDS.load(ValidationMode::Lenient));

/// Which dataset goes into which container, under which title
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDefinition {
    pub key: DatasetKey,
    pub container_id: ContainerId,
    pub title: &'static str,
    pub include_central_bank: bool,
}

/// Every chart the page may contain, in page order.
pub fn chart_catalog() -> Vec<ChartDefinition> {
    DatasetKey::iter().map(|key| key.definition()).collect()
}

/// Container ids the resize handler walks.
pub fn known_container_ids() -> Vec<ContainerId> {
    DatasetKey::iter().map(|key| ContainerId::from(key.container_id())).collect()
}
