pub mod company_settings_store;
pub mod user_store;
