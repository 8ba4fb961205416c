pub mod operations;
pub mod path_template;
pub mod types;

pub use operations::*;
pub use path_template::{PathTemplate, Segment};
pub use types::{IrInfo, IrSpec};
