//! Integration tests for `inikit`

mod files;
mod properties;
