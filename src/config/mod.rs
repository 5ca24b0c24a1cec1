pub mod cache;
pub mod keys;
pub mod mask;
pub mod settings;

pub use cache::ConfigCache;
pub use mask::mask;
pub use settings::{Settings, SettingsError, WebhookContentType, WebhookMethod};
