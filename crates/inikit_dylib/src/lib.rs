//! Dynamic library wrapper used by the `dynamic_linking` feature of `inikit`.

pub use inikit_internal::*;
