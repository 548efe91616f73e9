use serde::{Deserialize, Serialize};

/// Per-item completion status, cycled by explicit user action only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistStatus {
    /// Not yet answered.
    #[default]
    Select,
    Yes,
    Partially,
    No,
}

impl ChecklistStatus {
    /// Advances to the next status in the fixed cycle:
    /// select → yes → partially → no → select.
    pub fn cycle(self) -> Self {
        match self {
            Self::Select => Self::Yes,
            Self::Yes => Self::Partially,
            Self::Partially => Self::No,
            Self::No => Self::Select,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Yes => "yes",
            Self::Partially => "partially",
            Self::No => "no",
        }
    }
}

/// Explicit category tag on every item.
///
/// Items carry their category as data; nothing is inferred from the item
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistCategory {
    EmergencyFund,
    Insurance,
    TaxPlanning,
    Investing,
    Retirement,
    Estate,
    Custom,
}

/// Whether an item was seeded with the checklist or added by the user.
/// Default items can be re-statused but never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemOrigin {
    Default,
    Custom,
}

/// One checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: u32,
    pub text: String,
    pub category: ChecklistCategory,
    pub status: ChecklistStatus,
    pub origin: ItemOrigin,
}
