//! Postal code formats keyed by two-letter country code.
//!
//! Each format is a fixed sequence of [`Segment`]s, so the length and shape of
//! a generated code depend only on the country, never on the draw. Codes are
//! plausible rather than real: they follow each country's letter/digit grammar
//! and, where one is known, its valid numeric range.
//!
//! Formats follow the GeoPostcodes postal code format reference.

use rand::RngCore;
use tracing::debug;

use crate::source::RandomSource;

/// One piece of a postal code format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Text copied verbatim, such as a prefix or separator.
    Literal(&'static str),
    /// A zero-padded run of uniform digits.
    Digits(usize),
    /// A zero-padded run of digits whose value lies in `[low, high]`.
    BoundedDigits {
        /// Number of digits.
        width: usize,
        /// Smallest allowed value.
        low: u64,
        /// Largest allowed value.
        high: u64,
    },
    /// A run of uniform uppercase letters.
    Letters(usize),
    /// One of several equal-length alternatives, chosen uniformly.
    OneOf(&'static [&'static str]),
}

impl Segment {
    /// Number of characters the segment always produces.
    #[must_use]
    pub fn len(&self) -> usize {
        match *self {
            Self::Literal(text) => text.len(),
            Self::Digits(width) | Self::BoundedDigits { width, .. } | Self::Letters(width) => {
                width
            }
            Self::OneOf(choices) => choices.first().map_or(0, |choice| choice.len()),
        }
    }

    /// Returns `true` when the segment produces no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn render<R: RngCore>(&self, source: &RandomSource<R>, out: &mut String) {
        match *self {
            Self::Literal(text) => out.push_str(text),
            Self::Digits(width) => out.push_str(&source.digits(width)),
            Self::BoundedDigits { width, low, high } => {
                out.push_str(&source.bounded_digits(width, low, high));
            }
            Self::Letters(count) => out.push_str(&source.letters(count)),
            Self::OneOf(choices) => {
                if let Some(choice) = source.index(choices.len()).and_then(|i| choices.get(i)) {
                    out.push_str(choice);
                }
            }
        }
    }
}

/// The postal code grammar for one or more countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostalFormat {
    segments: &'static [Segment],
}

impl PostalFormat {
    /// Looks up the format for a two-letter country code, ignoring case.
    ///
    /// Returns `None` for codes without a known format.
    ///
    /// # Example
    ///
    /// ```
    /// use random_data::PostalFormat;
    ///
    /// assert_eq!(PostalFormat::for_country("jp").map(|f| f.len()), Some(8));
    /// assert!(PostalFormat::for_country("ZZ").is_none());
    /// ```
    #[must_use]
    pub fn for_country(country_code: &str) -> Option<Self> {
        let code = country_code.to_ascii_uppercase();
        POSTAL_FORMATS
            .iter()
            .find(|(codes, _)| codes.contains(&code.as_str()))
            .map(|&(_, segments)| Self { segments })
    }

    /// Returns the segments making up the format.
    #[must_use]
    pub const fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// Total length of every code produced by this format.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.iter().map(Segment::len).sum()
    }

    /// Returns `true` when the format produces empty codes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Generates one code in this format.
    pub fn generate<R: RngCore>(&self, source: &RandomSource<R>) -> String {
        let mut out = String::with_capacity(self.len());
        for segment in self.segments {
            segment.render(source, &mut out);
        }
        out
    }
}

/// Returns every country code with a known postal format, in table order.
pub fn supported_country_codes() -> impl Iterator<Item = &'static str> {
    POSTAL_FORMATS
        .iter()
        .flat_map(|(codes, _)| codes.iter().copied())
}

impl<R: RngCore> RandomSource<R> {
    /// Returns a random postal code for a two-letter country code.
    ///
    /// Matching is exact on the uppercased code. Unknown codes yield an empty
    /// string rather than an error; callers that need a value must check.
    ///
    /// # Example
    ///
    /// ```
    /// use random_data::RandomSource;
    ///
    /// let source = RandomSource::from_seed(1234);
    ///
    /// assert!(source.postal_code("fo").starts_with("FO "));
    /// assert_eq!(source.postal_code("CA").len(), 6);
    /// assert_eq!(source.postal_code("ZZ"), "");
    /// ```
    pub fn postal_code(&self, country_code: &str) -> String {
        match PostalFormat::for_country(country_code) {
            Some(format) => format.generate(self),
            None => {
                debug!(country_code, "no postal code format for country");
                String::new()
            }
        }
    }
}

use Segment::{BoundedDigits, Digits, Letters, Literal, OneOf};

const fn bounded(width: usize, low: u64, high: u64) -> Segment {
    BoundedDigits { width, low, high }
}

/// Country groups and their formats. A code appears in exactly one group.
static POSTAL_FORMATS: &[(&[&str], &[Segment])] = &[
    (&["LS", "MG", "IS", "OM", "PG"], &[Digits(3)]),
    (
        &[
            "AM", "GE", "NZ", "NE", "NO", "PY", "ZA", "MZ", "SJ", "LI", "AL", "BD", "CV", "GL",
        ],
        &[Digits(4)],
    ),
    (
        &[
            "DZ", "BA", "KH", "DO", "EG", "EE", "GP", "GT", "ID", "IL", "JO", "KW", "MQ", "MX",
            "LK", "SD", "TR", "UA", "US", "CR", "IQ", "KV", "MY", "MN", "ME", "PK", "SM", "MA",
            "UY", "EH", "ZM", "SE", "TW",
        ],
        &[Digits(5)],
    ),
    (
        &[
            "BY", "CN", "IN", "KZ", "KG", "NG", "RO", "RU", "SG", "TJ", "TM", "UZ", "VN",
        ],
        &[Digits(6)],
    ),
    (&["CL"], &[Digits(7)]),
    (&["IR"], &[Digits(10)]),
    (&["FO"], &[Literal("FO "), Digits(3)]),
    (&["AF"], &[bounded(2, 10, 43), bounded(2, 1, 99)]),
    (
        &[
            "AU", "AT", "BE", "BG", "CY", "DK", "ET", "GW", "HU", "LR", "MK", "PH", "CH", "TN",
            "VE",
        ],
        &[bounded(4, 1000, 9999)],
    ),
    (&["SV"], &[Literal("CP "), bounded(4, 1000, 9999)]),
    (&["HT"], &[Literal("HT"), Digits(4)]),
    (&["LB"], &[Digits(4), Literal(" "), Digits(4)]),
    (&["LU"], &[bounded(4, 6600, 6999)]),
    (&["MD"], &[Literal("MD-"), bounded(4, 1000, 9999)]),
    (&["HR"], &[Literal("HR-"), Digits(5)]),
    (&["CU"], &[Literal("CP "), bounded(5, 10000, 99999)]),
    // Final digit is 0, 1 or 5 with equal odds.
    (&["FI"], &[Digits(4), OneOf(&["0", "1", "5"])]),
    (
        &[
            "FR", "GF", "PF", "YT", "MC", "RE", "BL", "MF", "PM", "RS", "TH",
        ],
        &[bounded(5, 10000, 99999)],
    ),
    (&["DE", "LA"], &[bounded(5, 1000, 99999)]),
    (&["GR"], &[bounded(3, 100, 999), Literal(" "), Digits(2)]),
    (&["HN"], &[Literal("CM"), Digits(4)]),
    (&["IT", "VA"], &[bounded(5, 10, 99999)]),
    (&["KE"], &[bounded(5, 100, 99999)]),
    (&["MH"], &[bounded(5, 96960, 96970)]),
    (&["FM"], &[Literal("FM"), bounded(5, 96941, 96944)]),
    (&["MM"], &[bounded(2, 1, 14), Digits(3)]),
    (&["NP"], &[bounded(5, 10700, 56311)]),
    (&["NC"], &[Literal("98"), Digits(3)]),
    (&["PW"], &[Literal("PW96940")]),
    (&["PR"], &[Literal("PR "), Digits(5)]),
    (
        &["SA"],
        &[bounded(5, 10000, 99999), Literal("-"), bounded(4, 1000, 9999)],
    ),
    (&["ES"], &[bounded(2, 1, 52), bounded(3, 100, 999)]),
    (&["WF"], &[Literal("986"), Digits(2)]),
    (&["SZ"], &[Letters(1), Digits(3)]),
    (&["BM"], &[Letters(2), Digits(2)]),
    (&["AD"], &[Letters(2), Digits(3)]),
    (&["BN", "AZ", "VG", "PE"], &[Letters(2), Digits(4)]),
    (&["BB"], &[Letters(2), Digits(5)]),
    (&["EC"], &[Letters(2), Digits(6)]),
    (&["MT"], &[Letters(3), Digits(4)]),
    (&["JM"], &[Literal("JM"), Letters(3), Digits(2)]),
    (&["AR"], &[Letters(1), Digits(4), Letters(3)]),
    (
        &["CA"],
        &[
            Letters(1),
            Digits(1),
            Letters(1),
            Digits(1),
            Letters(1),
            Digits(1),
        ],
    ),
    (&["FK", "TC"], &[Letters(4), Digits(1), Letters(2)]),
    (&["GG", "IM", "JE"], &[Letters(2), Digits(2), Letters(2)]),
    (
        &["GB"],
        &[Letters(2), Digits(1), Literal(" "), Digits(1), Letters(2)],
    ),
    (&["KY"], &[Letters(2), Digits(1), Literal("-"), Digits(4)]),
    (&["JP"], &[Digits(3), Literal("-"), Digits(4)]),
    (&["LV", "SI"], &[Letters(2), Literal("-"), Digits(4)]),
    (&["LT"], &[Letters(2), Literal("-"), Digits(5)]),
    (&["MV"], &[Digits(2), Literal("-"), Digits(2)]),
    (&["PL"], &[Digits(2), Literal("-"), Digits(3)]),
    (
        &["NI"],
        &[Digits(3), Literal("-"), Digits(3), Literal("-"), Digits(1)],
    ),
    (&["KR"], &[Digits(3), Literal("-"), Digits(3)]),
    (&["PT"], &[Digits(4), Literal("-"), Digits(3)]),
    (&["NL"], &[Digits(4), Letters(2)]),
    (&["BR"], &[Digits(5), Literal("-"), Digits(3)]),
];
