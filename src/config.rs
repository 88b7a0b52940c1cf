//! Build-Time Configuration
//!
//! UI text and the API base path are baked in at compile time via
//! environment variables, each with a fixed default when unset.

/// Application configuration resolved at compile time
pub struct AppConfig {
    pub api_path: &'static str,
    pub title: &'static str,
    pub heading: &'static str,
    pub add_button: &'static str,
    pub placeholder: &'static str,
    pub empty_message: &'static str,
}

const fn env_or(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(v) => v,
        None => default,
    }
}

pub const CONFIG: AppConfig = AppConfig {
    api_path: env_or(option_env!("APP_API_PATH"), "/api/projects"),
    title: env_or(option_env!("APP_TITLE"), "Idea Garden"),
    heading: env_or(option_env!("APP_HEADING"), "🌱 Idea Garden"),
    add_button: env_or(option_env!("APP_ADD_BUTTON"), "Add Idea"),
    placeholder: env_or(option_env!("APP_PLACEHOLDER"), "Plant a new idea..."),
    empty_message: env_or(
        option_env!("APP_EMPTY_MESSAGE"),
        "No ideas planted yet. Plant your first idea above!",
    ),
};
