pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{ServerSettings, Settings, StorageSettings, TranslationSettings};
pub use router::create_router;
pub use state::AppState;
