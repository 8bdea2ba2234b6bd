use derive_more::{Constructor, Deref, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumCount, EnumIter, EnumString};

/// Value Object - investor-type category holding a class of financial assets
///
/// The display name doubles as the parse key, so `"Pension Funds".parse()`
/// yields [`Sector::PensionFunds`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    StrumDisplay,
    EnumIter,
    EnumString,
    EnumCount,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Sector {
    #[strum(serialize = "Households")]
    #[serde(rename = "Households")]
    Households,

    #[strum(serialize = "Mutual Funds & ETFs")]
    #[serde(rename = "Mutual Funds & ETFs")]
    MutualFunds,

    #[strum(serialize = "Pension Funds")]
    #[serde(rename = "Pension Funds")]
    PensionFunds,

    #[strum(serialize = "Insurance")]
    #[serde(rename = "Insurance")]
    Insurance,

    #[strum(serialize = "Banks & Intermediaries")]
    #[serde(rename = "Banks & Intermediaries")]
    Banks,

    #[strum(serialize = "Federal Reserve")]
    #[serde(rename = "Federal Reserve")]
    FederalReserve,

    #[strum(serialize = "Foreign")]
    #[serde(rename = "Foreign")]
    Foreign,
}

impl Sector {
    pub fn display_name(&self) -> &str {
        self.as_ref()
    }

    /// Whether this is the central-bank sector toggled per chart.
    pub fn is_central_bank(&self) -> bool {
        matches!(self, Self::FederalReserve)
    }
}

/// Value Object - observation year
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Constructor, Serialize, Deserialize,
)]
pub struct Year(i32);

impl Year {
    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Value Object - fraction of total holdings, expected in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Share(f64);

impl Share {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && (0.0..=1.0).contains(&self.0)
    }
}

/// Value Object - identifier of a chart container in the host document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Serialize, Deserialize)]
pub struct ContainerId(String);

impl ContainerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContainerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for ContainerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Controls how strictly raw holdings input is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Any malformation is an error. Used by build-time checks and tests.
    Strict,
    /// Malformed or unknown sectors are dropped with a warning; year errors stay fatal.
    #[default]
    Lenient,
}
