pub mod emitters;
pub mod error;
pub mod generator;
pub mod python;

pub use error::GeneratorError;
pub use generator::FastapiProxyGenerator;
