#![forbid(unsafe_code)]

//! `aqs-seed` — REST client and seeding routines for populating an
//! AQUARIUS Samples tenant with connector demonstration data.

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod seed;
pub mod transport;

pub use client::SamplesClient;
pub use config::AppConfig;
pub use errors::{AppError, Result};
