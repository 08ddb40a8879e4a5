pub mod demo;
pub mod optional;
pub mod value;

pub use demo::*;
pub use optional::*;
pub use value::*;
