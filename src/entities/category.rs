// 🏷️ Category - closed set of client classification labels
//
// Every client carries exactly one of these. There is no "missing" category:
// a client that was never classified is `Unassigned`.

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// Occasional customer
    Regular,

    /// Repeat customer
    Frequent,

    /// Fixed for VIP clients
    #[serde(rename = "VIP")]
    Vip,

    /// Not classified yet
    #[default]
    Unassigned,
}

impl Category {
    /// All members, in declaration order
    pub const ALL: [Category; 4] = [
        Category::Regular,
        Category::Frequent,
        Category::Vip,
        Category::Unassigned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Regular => "Regular",
            Category::Frequent => "Frequent",
            Category::Vip => "VIP",
            Category::Unassigned => "Unassigned",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RegistryError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let trimmed = label.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RegistryError::InvalidCategory {
                label: trimmed.to_string(),
            })
    }
}
