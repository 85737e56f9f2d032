//! Lexicon-backed generators for names, places and other descriptive data.
//!
//! A [`DataGenerator`] pairs a [`RandomSource`] with a [`Lexicon`]. Every
//! method draws from the source, so two generators built from the same seed
//! and lexicon produce identical output for identical call sequences.

use std::sync::Arc;

use rand::{Rng, RngCore};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::LexiconError;
use crate::lexicon::{Lexicon, LexiconList};
use crate::source::RandomSource;

/// Longest phone number, counting digits only.
const PHONE_MAX_DIGITS: usize = 15;

/// Gender used to select titles, given names and portraits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male names and titles.
    Male,
    /// Female names and titles.
    Female,
}

/// Rendering of a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryStyle {
    /// Full English name, e.g. `Sweden`.
    Full,
    /// ISO 3166-1 alpha-2 code, e.g. `SE`.
    TwoChar,
    /// ISO 3166-1 alpha-3 code, e.g. `SWE`.
    ThreeChar,
}

/// Rendering of a US state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFormat {
    /// Two-letter postal abbreviation, e.g. `NY`.
    Abbreviated,
    /// Full name, e.g. `New York`.
    Full,
}

/// Generates descriptive test data from a random source and a lexicon.
///
/// # Example
///
/// ```
/// use random_data::{DataGenerator, Gender};
///
/// let first = DataGenerator::from_seed(42).expect("embedded lexicon");
/// let second = DataGenerator::from_seed(42).expect("embedded lexicon");
///
/// assert_eq!(
///     first.full_name(Some(Gender::Female)),
///     second.full_name(Some(Gender::Female))
/// );
/// ```
#[derive(Debug)]
pub struct DataGenerator<R = ChaCha8Rng> {
    source: RandomSource<R>,
    lexicon: Arc<Lexicon>,
}

impl DataGenerator<ChaCha8Rng> {
    /// Creates a reproducible generator over the embedded lexicon.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError`] if the embedded lexicon is invalid.
    pub fn from_seed(seed: u64) -> Result<Self, LexiconError> {
        Ok(Self::new(RandomSource::from_seed(seed), Lexicon::embedded()?))
    }

    /// Creates an entropy-seeded generator over the embedded lexicon.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError`] if the embedded lexicon is invalid.
    pub fn from_entropy() -> Result<Self, LexiconError> {
        Ok(Self::new(RandomSource::from_entropy(), Lexicon::embedded()?))
    }
}

impl<R: RngCore> DataGenerator<R> {
    /// Pairs `source` with `lexicon`.
    pub const fn new(source: RandomSource<R>, lexicon: Arc<Lexicon>) -> Self {
        Self { source, lexicon }
    }

    /// Returns the underlying random source.
    pub const fn source(&self) -> &RandomSource<R> {
        &self.source
    }

    /// Returns the lexicon in use.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Returns `gender`, or a uniformly drawn one when `None`.
    pub fn resolve_gender(&self, gender: Option<Gender>) -> Gender {
        gender.unwrap_or_else(|| {
            if self.source.boolean() {
                Gender::Male
            } else {
                Gender::Female
            }
        })
    }

    /// Returns an honorific such as `Mr.` or `Ms.`.
    pub fn title(&self, gender: Option<Gender>) -> String {
        match self.resolve_gender(gender) {
            Gender::Male => self.pick(LexiconList::MaleTitles),
            Gender::Female => self.pick(LexiconList::FemaleTitles),
        }
    }

    /// Returns a given name.
    pub fn first_name(&self, gender: Option<Gender>) -> String {
        match self.resolve_gender(gender) {
            Gender::Male => self.pick(LexiconList::FirstNamesMale),
            Gender::Female => self.pick(LexiconList::FirstNamesFemale),
        }
    }

    /// Returns a family name.
    pub fn last_name(&self) -> String {
        self.pick(LexiconList::LastNames)
    }

    /// Returns `"{first} {last}"`.
    pub fn full_name(&self, gender: Option<Gender>) -> String {
        let first = self.first_name(gender);
        format!("{first} {}", self.last_name())
    }

    /// Returns an address such as `emma.jones042@example.com`.
    pub fn email(&self) -> String {
        let first = self.first_name(None);
        let last = self.last_name();
        self.email_for(&first, &last)
    }

    /// Builds an address for the named person.
    pub fn email_for(&self, first: &str, last: &str) -> String {
        let local = format!("{first}.{last}").to_lowercase();
        let suffix = self.source.digits(3);
        format!("{local}{suffix}@{}", self.pick(LexiconList::Domains))
    }

    /// Returns a country in the requested style.
    pub fn country(&self, style: CountryStyle) -> String {
        self.pick(match style {
            CountryStyle::Full => LexiconList::Countries,
            CountryStyle::TwoChar => LexiconList::CountriesTwoChars,
            CountryStyle::ThreeChar => LexiconList::CountriesThreeChars,
        })
    }

    /// Returns an ISO 4217 currency code.
    pub fn currency(&self) -> String {
        self.pick(LexiconList::Currencies)
    }

    /// Returns a city name.
    pub fn city(&self) -> String {
        self.pick(LexiconList::Cities)
    }

    /// Returns a US state.
    pub fn state(&self, format: StateFormat) -> String {
        self.pick(match format {
            StateFormat::Abbreviated => LexiconList::StatesSmall,
            StateFormat::Full => LexiconList::States,
        })
    }

    /// Returns a first-level subdivision of `country_code` (`US` or `GB`),
    /// or `""` for any other code.
    pub fn province_for_country(&self, country_code: &str) -> String {
        match country_code {
            "US" => self.pick(LexiconList::States),
            "GB" => self.pick(LexiconList::ProvincesGb),
            _ => String::new(),
        }
    }

    /// Returns a US-style street name such as `Lincoln Avenue`.
    pub fn street(&self) -> String {
        let person = self.pick(LexiconList::People);
        format!("{person} {}", self.pick(LexiconList::StreetTypes))
    }

    /// Returns a street name typical of `country_code` (`US` or `GB`), or
    /// `""` for any other code.
    pub fn street_for_country(&self, country_code: &str) -> String {
        match country_code {
            "US" => self.street(),
            "GB" => {
                let stem = self.pick(LexiconList::StreetNameGb);
                format!("{stem} {}", self.pick(LexiconList::StreetTypesGb))
            }
            _ => String::new(),
        }
    }

    /// Returns a two-line US address ending in a ZIP code.
    ///
    /// # Example
    ///
    /// ```
    /// use random_data::DataGenerator;
    ///
    /// let generator = DataGenerator::from_seed(7).expect("embedded lexicon");
    /// let address = generator.address();
    ///
    /// assert_eq!(address.lines().count(), 2);
    /// ```
    pub fn address(&self) -> String {
        let number = self.source.uniform_inclusive(0, 99);
        let street = self.street();
        let city = self.city();
        let state = self.state(StateFormat::Abbreviated);
        let postal = self.source.postal_code("US");
        format!("{number} {street},\n{city}, {state}, {postal}")
    }

    /// Returns a filler paragraph.
    pub fn paragraph(&self) -> String {
        self.pick(LexiconList::Paragraphs)
    }

    /// Returns a noun.
    pub fn noun(&self) -> String {
        self.pick(LexiconList::Nouns)
    }

    /// Returns an adjective.
    pub fn adjective(&self) -> String {
        self.pick(LexiconList::Adjectives)
    }

    /// Returns a capitalised noun followed by an adjective, e.g.
    /// `OtterBrave`.
    pub fn silly_name(&self) -> String {
        let noun = self.noun();
        let mut chars = noun.chars();
        let mut name: String = chars
            .next()
            .map(|first| first.to_uppercase().chain(chars).collect())
            .unwrap_or_default();
        name.push_str(&self.adjective());
        name
    }

    /// Returns a weekday name.
    pub fn day(&self) -> String {
        self.pick(LexiconList::Days)
    }

    /// Returns a month name.
    pub fn month(&self) -> String {
        self.pick(LexiconList::Months)
    }

    /// Returns an IANA time zone name.
    pub fn timezone(&self) -> String {
        self.pick(LexiconList::Timezones)
    }

    /// Returns a BCP 47 locale tag.
    pub fn locale(&self) -> String {
        self.pick(LexiconList::Locales)
    }

    /// Returns a browser user-agent string.
    pub fn user_agent(&self) -> String {
        self.pick(LexiconList::UserAgents)
    }

    /// Returns an international phone number such as `+44 20 7946 0958`.
    ///
    /// The calling code is followed by digit groups of random length until
    /// the number holds at most 15 digits.
    pub fn phone_number(&self) -> String {
        let code = self.pick(LexiconList::CountryCallingCodes);
        let mut used = code.len();
        let mut number = format!("+{code}");
        let mut width = self.source.with_rng(|rng| rng.random_range(1..=3_usize));
        loop {
            number.push(' ');
            number.push_str(&self.source.digits(width));
            used += width;

            let remaining = PHONE_MAX_DIGITS.saturating_sub(used);
            if remaining < 2 {
                return number;
            }
            width = self.source.with_rng(|rng| rng.random_range(1..remaining));
        }
    }

    /// Returns a postal code for `country_code`; see
    /// [`RandomSource::postal_code`].
    pub fn postal_code(&self, country_code: &str) -> String {
        self.source.postal_code(country_code)
    }

    pub(crate) fn pick(&self, list: LexiconList) -> String {
        self.source.pick(self.lexicon.list(list)).to_owned()
    }
}
