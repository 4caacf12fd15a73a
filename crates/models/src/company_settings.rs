use serde::{Deserialize, Serialize};

/// Per-unit company settings record.
///
/// Wire names are camelCase (`unitId`, `settingName`, `settingValue`,
/// `displayValue`) for compatibility with existing clients. The unit id is
/// the logical key; uniqueness is not enforced by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettings {
    pub unit_id: String,
    pub setting_name: String,
    pub setting_value: String,
    /// Derived display form; clients may omit it.
    #[serde(default)]
    pub display_value: String,
}
