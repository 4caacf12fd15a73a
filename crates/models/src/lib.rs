pub mod company_settings;
pub mod user;
