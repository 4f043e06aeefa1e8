//! Landing page content.
//!
//! The public site is driven by a single `data.json` document: branding,
//! contact details, social links, feature cards and the product price list.
//! This crate types that document and loads it from disk or over HTTP.

#![forbid(unsafe_code)]

mod error;
mod loader;
mod model;

pub use error::LandingError;
pub use model::{
    Contact, DEFAULT_CONTACT_ADDRESS, DEFAULT_CONTACT_EMAIL, DEFAULT_CONTACT_PHONE, Feature,
    LandingContent, PriceTag, Product, SocialLink,
};
