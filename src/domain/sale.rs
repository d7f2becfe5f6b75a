//! Sale events and the age brackets they are bucketed into.

use serde::Deserialize;

/// A single completed sale, as posted to `/complete-sale`.
///
/// Built per request from the JSON body and dropped once the counters have
/// been updated. Field names on the wire are camelCase. Any integer is
/// accepted for `quantity_sold`; the metrics backend decides what a
/// negative quantity means for its counters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleEvent {
    pub product_name: String,
    pub quantity_sold: i32,
    pub age: i32,
    pub location: String,
}

/// Customer age bracket.
///
/// Nine contiguous ranges with inclusive upper bounds covering every age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBracket {
    UpTo10,
    From11To20,
    From21To30,
    From31To40,
    From41To50,
    From51To60,
    From61To70,
    From71To80,
    Over80,
}

impl AgeBracket {
    /// All brackets in ascending order.
    pub const ALL: [AgeBracket; 9] = [
        AgeBracket::UpTo10,
        AgeBracket::From11To20,
        AgeBracket::From21To30,
        AgeBracket::From31To40,
        AgeBracket::From41To50,
        AgeBracket::From51To60,
        AgeBracket::From61To70,
        AgeBracket::From71To80,
        AgeBracket::Over80,
    ];

    /// Classify an age. Negative ages land in the lowest bracket.
    pub fn from_age(age: i32) -> Self {
        // ---
        match age {
            i32::MIN..=10 => AgeBracket::UpTo10,
            11..=20 => AgeBracket::From11To20,
            21..=30 => AgeBracket::From21To30,
            31..=40 => AgeBracket::From31To40,
            41..=50 => AgeBracket::From41To50,
            51..=60 => AgeBracket::From51To60,
            61..=70 => AgeBracket::From61To70,
            71..=80 => AgeBracket::From71To80,
            _ => AgeBracket::Over80,
        }
    }

    /// Human-readable label, e.g. `"21-30"` or `"81+"`.
    pub fn label(self) -> &'static str {
        // ---
        match self {
            AgeBracket::UpTo10 => "0-10",
            AgeBracket::From11To20 => "11-20",
            AgeBracket::From21To30 => "21-30",
            AgeBracket::From31To40 => "31-40",
            AgeBracket::From41To50 => "41-50",
            AgeBracket::From51To60 => "51-60",
            AgeBracket::From61To70 => "61-70",
            AgeBracket::From71To80 => "71-80",
            AgeBracket::Over80 => "81+",
        }
    }

    /// Position of this bracket in [`AgeBracket::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
