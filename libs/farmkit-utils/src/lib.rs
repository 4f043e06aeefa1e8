#![forbid(unsafe_code)]

//! Small helpers shared by the console crates.

pub mod currency;
pub mod humantime_serde;
mod secret_string;

pub use currency::format_rupiah;
pub use secret_string::SecretString;
