use models::company_settings::CompanySettings;

use crate::stores::company_settings_store::CompanySettingsStore;

/// Pass-through orchestration over [`CompanySettingsStore`].
#[derive(Clone)]
pub struct CompanySettingsService {
    store: CompanySettingsStore,
}

impl CompanySettingsService {
    pub fn new(store: CompanySettingsStore) -> Self {
        Self { store }
    }

    pub fn get_settings_by_unit_id(&self, unit_id: &str) -> CompanySettings {
        self.store.get_by_unit_id(unit_id)
    }

    pub fn save_settings(&self, settings: &CompanySettings) {
        self.store.save(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_forwards_lookup_and_save() {
        let service = CompanySettingsService::new(CompanySettingsStore::new());
        let s = service.get_settings_by_unit_id("unit-7");
        assert_eq!(s.unit_id, "unit-7");
        assert_eq!(s.setting_value, "UTC");
        // save never fails and never persists
        service.save_settings(&s);
        assert_eq!(service.get_settings_by_unit_id("unit-7").setting_name, "timezone");
    }
}
