pub mod app_config;
pub mod gemini_config;
