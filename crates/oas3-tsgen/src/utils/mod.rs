pub mod spec;

pub use spec::{SpecFormat, SpecLoader};
