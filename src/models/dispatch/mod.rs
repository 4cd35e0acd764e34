pub mod generate;
pub mod params;
pub mod registry;

pub use generate::{DispatchPolicy, DispatchWarning, Generated, Instruction, dispatch, generate};
pub use registry::{REGISTRY, SlideMethod, list_available_slide_methods, lookup, lookup_for, methods_for};
