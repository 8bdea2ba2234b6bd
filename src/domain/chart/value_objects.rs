use crate::domain::holdings::Sector;
use serde::{Serialize, Serializer};

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::new(((hex >> 16) & 0xFF) as u8, ((hex >> 8) & 0xFF) as u8, (hex & 0xFF) as u8, 1.0)
    }

    pub fn to_hex(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha, ..*self }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// CSS form: `#RRGGBB` when opaque, `rgba(r,g,b,a)` otherwise.
    pub fn to_css(&self) -> String {
        if self.is_opaque() {
            format!("#{:06X}", self.to_hex())
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }

    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0.0);
    pub const AXIS_LINE: Color = Color::from_hex(0xCCCCCC);
    pub const GRID: Color = Color::from_hex(0xEEEEEE);
    pub const TITLE: Color = Color::from_hex(0x333333);
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

/// Fixed sector → color mapping shared by every chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorPalette;

impl SectorPalette {
    pub const fn color(&self, sector: Sector) -> Color {
        match sector {
            Sector::Households => Color::from_hex(0x4A90A4),
            Sector::MutualFunds => Color::from_hex(0x7FB069),
            Sector::PensionFunds => Color::from_hex(0xF4A261),
            Sector::Insurance => Color::from_hex(0x9B5DE5),
            Sector::Banks => Color::from_hex(0xE76F51),
            Sector::FederalReserve => Color::from_hex(0x2A9D8F),
            Sector::Foreign => Color::from_hex(0x264653),
        }
    }
}

pub static SECTOR_PALETTE: SectorPalette = SectorPalette;

const ORDER_WITHOUT_CENTRAL_BANK: &[Sector] = &[
    Sector::Households,
    Sector::MutualFunds,
    Sector::PensionFunds,
    Sector::Insurance,
    Sector::Banks,
    Sector::Foreign,
];

const ORDER_WITH_CENTRAL_BANK: &[Sector] = &[
    Sector::Households,
    Sector::MutualFunds,
    Sector::PensionFunds,
    Sector::Insurance,
    Sector::Banks,
    Sector::FederalReserve,
    Sector::Foreign,
];

/// Value Object - bottom-to-top stacking order of a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOrder {
    WithoutCentralBank,
    WithCentralBank,
}

impl DisplayOrder {
    pub fn for_flag(include_central_bank: bool) -> Self {
        if include_central_bank { Self::WithCentralBank } else { Self::WithoutCentralBank }
    }

    pub fn sectors(&self) -> &'static [Sector] {
        match self {
            Self::WithoutCentralBank => ORDER_WITHOUT_CENTRAL_BANK,
            Self::WithCentralBank => ORDER_WITH_CENTRAL_BANK,
        }
    }

    pub fn contains(&self, sector: Sector) -> bool {
        self.sectors().contains(&sector)
    }

    /// Position from the bottom of the stack.
    pub fn position(&self, sector: Sector) -> Option<usize> {
        self.sectors().iter().position(|s| *s == sector)
    }
}
