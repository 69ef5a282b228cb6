//! Caches held for the lifetime of the process.

pub mod icons;

pub use icons::IconCache;
