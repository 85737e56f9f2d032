//! Command-line front end.
//!
//! The `random-data` binary loads [`GeneratorSettings`] and delegates to
//! [`run`], which writes records to any [`Write`] sink so the whole flow can
//! be exercised in tests without spawning a process.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use rand::RngCore;

use crate::generator::DataGenerator;

mod error;
mod settings;

pub use error::CliError;
pub use settings::GeneratorSettings;

/// Kind of record emitted by [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// A JSON [`Profile`](crate::Profile).
    Profile,
    /// A postal code for the configured country.
    PostalCode,
    /// A two-line US address.
    Address,
    /// A full name.
    Name,
    /// An email address.
    Email,
    /// An international phone number.
    Phone,
    /// An IPv4 address.
    Ipv4,
    /// An IPv6 address.
    Ipv6,
    /// A MAC address.
    Mac,
    /// A date in the current year.
    Date,
}

impl OutputKind {
    /// Every kind, in the order of [`OutputKind::NAMES`].
    pub const ALL: [Self; 10] = [
        Self::Profile,
        Self::PostalCode,
        Self::Address,
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Ipv4,
        Self::Ipv6,
        Self::Mac,
        Self::Date,
    ];

    /// Accepted spellings, one per kind.
    pub const NAMES: [&'static str; 10] = [
        "profile",
        "postal-code",
        "address",
        "name",
        "email",
        "phone",
        "ipv4",
        "ipv6",
        "mac",
        "date",
    ];

    /// Returns the accepted spelling of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::PostalCode => "postal-code",
            Self::Address => "address",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::Mac => "mac",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputKind {
    type Err = CliError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| CliError::UnknownKind {
                value: value.to_owned(),
            })
    }
}

/// Generates the batch described by `settings` and writes one record per
/// line to `writer`.
///
/// # Errors
///
/// Returns [`CliError`] when the kind is unknown, the lexicon cannot be
/// loaded, or a record cannot be serialised or written.
///
/// # Example
///
/// ```
/// use random_data::cli::{GeneratorSettings, run};
///
/// let settings = GeneratorSettings {
///     seed: Some(1234),
///     kind: Some("postal-code".to_owned()),
///     count: Some(3),
///     country: Some("JP".to_owned()),
///     pretty: false,
/// };
/// let mut out = Vec::new();
/// run(&settings, &mut out).expect("generation succeeds");
///
/// let text = String::from_utf8(out).expect("utf-8 output");
/// assert_eq!(text.lines().count(), 3);
/// assert!(text.lines().all(|line| line.len() == 8));
/// ```
pub fn run<W: Write>(settings: &GeneratorSettings, mut writer: W) -> Result<(), CliError> {
    let kind = settings.kind()?;
    let generator = match settings.seed {
        Some(seed) => DataGenerator::from_seed(seed)?,
        None => DataGenerator::from_entropy()?,
    };

    for _ in 0..settings.count() {
        let record = render(&generator, kind, settings)?;
        writeln!(writer, "{record}").map_err(|e| CliError::Write {
            message: e.to_string(),
        })?;
    }
    writer.flush().map_err(|e| CliError::Write {
        message: e.to_string(),
    })
}

fn render<R: RngCore>(
    generator: &DataGenerator<R>,
    kind: OutputKind,
    settings: &GeneratorSettings,
) -> Result<String, CliError> {
    let source = generator.source();
    let record = match kind {
        OutputKind::Profile => {
            let profile = generator.profile(None);
            let json = if settings.pretty {
                serde_json::to_string_pretty(&profile)
            } else {
                serde_json::to_string(&profile)
            };
            json.map_err(|e| CliError::Serialize {
                message: e.to_string(),
            })?
        }
        OutputKind::PostalCode => source.postal_code(settings.country()),
        OutputKind::Address => generator.address(),
        OutputKind::Name => generator.full_name(None),
        OutputKind::Email => generator.email(),
        OutputKind::Phone => generator.phone_number(),
        OutputKind::Ipv4 => source.ipv4_address().to_string(),
        OutputKind::Ipv6 => source.ipv6_address().to_string(),
        OutputKind::Mac => source.mac_address(),
        OutputKind::Date => source.full_date(),
    };
    Ok(record)
}
