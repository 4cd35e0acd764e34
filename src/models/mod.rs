pub mod deck;
pub mod dispatch;
pub mod error;
pub mod layout;
pub mod presentation;
pub mod slide;
pub mod theme;
