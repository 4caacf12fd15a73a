pub mod company_settings_service;
pub mod user_service;
