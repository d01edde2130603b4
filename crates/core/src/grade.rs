//! Commodity vocabulary: oil grades and stock pools.

use serde::{Deserialize, Serialize};

/// A traded oil grade.
///
/// Each grade carries a fixed density (kg/litre) used to convert metric
/// tonnes into litres when pricing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "Crude Degummed Oil")]
    CrudeDegummed,
    #[serde(rename = "Palm Oil")]
    Palm,
    #[serde(rename = "Palm Degummed")]
    PalmDegummed,
    #[serde(rename = "Crude Sunflower Oil")]
    CrudeSunflower,
}

impl Grade {
    /// All grades, in display order.
    pub const ALL: [Grade; 4] = [
        Grade::CrudeDegummed,
        Grade::Palm,
        Grade::PalmDegummed,
        Grade::CrudeSunflower,
    ];

    /// Standard density in kg/litre (1 MT = 1000 kg).
    pub fn density(self) -> f64 {
        match self {
            Grade::CrudeDegummed => 0.92,
            Grade::Palm => 0.915,
            Grade::PalmDegummed => 0.918,
            Grade::CrudeSunflower => 0.922,
        }
    }

    /// Human-readable trade name (also the serialized form).
    pub fn name(self) -> &'static str {
        match self {
            Grade::CrudeDegummed => "Crude Degummed Oil",
            Grade::Palm => "Palm Oil",
            Grade::PalmDegummed => "Palm Degummed",
            Grade::CrudeSunflower => "Crude Sunflower Oil",
        }
    }
}

impl core::fmt::Display for Grade {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Stock pool a quantity lives in. Refined stock is the sellable pool.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pool {
    Crude,
    Refined,
}

impl core::fmt::Display for Pool {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Pool::Crude => f.write_str("Crude"),
            Pool::Refined => f.write_str("Refined"),
        }
    }
}
