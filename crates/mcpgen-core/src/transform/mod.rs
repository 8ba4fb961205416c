pub mod enumerate;
pub mod sanitizer;
pub mod spec_to_ir;

pub use enumerate::iter_operations;
pub use sanitizer::sanitize;
pub use spec_to_ir::{TransformOptions, transform, transform_with_options};
