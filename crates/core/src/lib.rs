pub mod config;
pub mod error;
pub mod logging;
pub mod message;
pub mod store;

pub use config::{Config, ScrollBehavior, ThemeName, UiConfig};
pub use error::{Error, Result, TranscriptError};
pub use message::{Message, Role};
pub use store::TranscriptStore;
