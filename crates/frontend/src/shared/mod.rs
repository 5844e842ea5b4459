pub mod api_utils;
pub mod cache;
pub mod config;
pub mod date_utils;
pub mod error;
pub mod i18n;
pub mod icons;
pub mod keyboard;
pub mod preferences;
pub mod storage;
pub mod theme;
