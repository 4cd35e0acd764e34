pub mod files;
pub mod generate;
pub mod meta;

pub use files::{cleanup, delete, download, list};
pub use generate::generate;
pub use meta::{health, templates};
