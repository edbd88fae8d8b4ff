//! Core library components.
//!
//! The envelope codec, key material handling and the entry store, plus
//! the configuration that ties them to paths on disk.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod keys;
pub mod store;
pub mod validation;
