use models::company_settings::CompanySettings;
use tracing::info;

/// Synthetic defaults returned for every settings lookup.
const DEFAULT_SETTING_NAME: &str = "timezone";
const DEFAULT_SETTING_VALUE: &str = "UTC";

/// Stub settings store.
///
/// Reads return a fixed synthetic record for the requested unit; writes
/// are logged and discarded. This mirrors the documented observable
/// contract of the settings resource; a real backend can replace this
/// struct without changing the service or route layers.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompanySettingsStore;

impl CompanySettingsStore {
    pub fn new() -> Self {
        Self
    }

    /// Always succeeds: the returned record carries the requested unit id
    /// and fixed defaults for the remaining fields, irrespective of any
    /// prior `save` calls.
    pub fn get_by_unit_id(&self, unit_id: &str) -> CompanySettings {
        CompanySettings {
            unit_id: unit_id.to_string(),
            setting_name: DEFAULT_SETTING_NAME.to_string(),
            setting_value: DEFAULT_SETTING_VALUE.to_string(),
            display_value: String::new(),
        }
    }

    /// Records the write as a log line only; the payload is not retained.
    pub fn save(&self, settings: &CompanySettings) {
        info!(unit_id = %settings.unit_id, "saved settings");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_synthetic_record_for_any_unit() {
        let store = CompanySettingsStore::new();
        let s = store.get_by_unit_id("store-42");
        assert_eq!(s.unit_id, "store-42");
        assert_eq!(s.setting_name, "timezone");
        assert_eq!(s.setting_value, "UTC");
        assert_eq!(s.display_value, "");
    }

    #[test]
    fn save_does_not_affect_later_reads() {
        let store = CompanySettingsStore::new();
        let written = CompanySettings {
            unit_id: "store-42".into(),
            setting_name: "locale".into(),
            setting_value: "en_GB".into(),
            display_value: "English (UK)".into(),
        };
        store.save(&written);

        let read = store.get_by_unit_id("store-42");
        assert_eq!(read.setting_name, "timezone");
        assert_eq!(read.setting_value, "UTC");
    }
}
