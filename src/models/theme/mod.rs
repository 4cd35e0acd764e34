pub mod brands;
pub mod types;

pub use brands::*;
pub use types::*;
