//! Domain logic - pure value types with no I/O

pub mod increment;
pub mod version;

pub use increment::IncrementKind;
pub use version::{Version, INITIAL_TAG};
