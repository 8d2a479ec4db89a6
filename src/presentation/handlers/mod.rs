mod download;
mod health;
mod progress;
mod upload;

pub use download::download_handler;
pub use health::health_handler;
pub use progress::progress_handler;
pub use upload::upload_handler;
