pub mod services;
pub mod storage;
pub mod stores;
