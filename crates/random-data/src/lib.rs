//! Deterministic, seedable generation of format-valid test data.
//!
//! Everything starts from a [`RandomSource`]: a seeded pseudo-random
//! generator behind a mutex that can be shared between threads. The source
//! produces digits, letters, postal codes for about 150 countries,
//! network identifiers and dates. A [`DataGenerator`] adds an embedded
//! [`Lexicon`] of names and places on top, and assembles complete
//! [`Profile`]s.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Reproducible output from a 64-bit seed
//! - Country-specific postal codes with fixed per-country shape
//! - Names, addresses, emails and phone numbers from a validated lexicon
//! - JSON profiles with hashed login credentials
//! - A small command-line front end in [`cli`]
//!
//! # Example
//!
//! ```
//! use random_data::{DataGenerator, RandomSource};
//!
//! let source = RandomSource::from_seed(1234);
//! assert_eq!(source.postal_code("GB").len(), 7);
//! assert_eq!(source.postal_code("XX"), "");
//!
//! let generator = DataGenerator::from_seed(1234).expect("embedded lexicon");
//! let profile = generator.profile(None);
//! assert_eq!(profile.location.postcode.len(), 5);
//! ```

pub mod cli;
mod error;
mod generator;
mod hashing;
mod lexicon;
mod network;
mod postal;
mod primitives;
mod profile;
mod source;
mod temporal;

pub use error::{LexiconError, RandomError};
pub use generator::{CountryStyle, DataGenerator, Gender, StateFormat};
pub use hashing::{md5_hex, sha1_base64url, sha256_base64url};
pub use lexicon::{Lexicon, LexiconList};
pub use postal::{PostalFormat, Segment, supported_country_codes};
pub use primitives::ALPHANUMERIC;
pub use profile::{Identifier, Location, Login, PersonName, Picture, Profile};
pub use source::{
    RandomSource, bounded_digits, default_source, digits, letters, postal_code,
};
pub use temporal::{
    DATE_INPUT_FORMAT, DATE_OUTPUT_FORMAT, DateBounds, format_date, parse_date,
};
