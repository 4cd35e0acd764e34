pub mod builder;
pub mod config;

pub use builder::{PresentationBuilder, SavedDeck};
pub use config::{PresentationConfig, Spelling, Style};
