//! Module containing all algorithms implementations.

pub mod msbfs;

/// Traits used to interact with the implemented algorithms.
pub mod traits {
    use super::*;

    pub use msbfs::{Parallel, Sequential};
}
