//! Word lists backing the lexicon-driven generators.
//!
//! A lexicon is a JSON object of named string lists (first names, cities,
//! user agents, and so on). One lexicon ships inside the crate and is parsed
//! once per process; callers may also supply their own through
//! [`Lexicon::from_json`], which applies the same validation.

use std::sync::{Arc, LazyLock};

use serde::Deserialize;
use tracing::{debug, error};

use crate::error::LexiconError;

const EMBEDDED_JSON: &str = include_str!("../data/lexicon.json");

static EMBEDDED: LazyLock<Result<Arc<Lexicon>, LexiconError>> = LazyLock::new(|| {
    Lexicon::from_json(EMBEDDED_JSON)
        .map(Arc::new)
        .inspect_err(|err| error!(error = %err, "embedded lexicon failed to parse"))
});

/// Names every list a lexicon must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexiconList {
    /// Adjectives for silly names.
    Adjectives,
    /// Nouns for silly names.
    Nouns,
    /// Female given names.
    FirstNamesFemale,
    /// Male given names.
    FirstNamesMale,
    /// Family names.
    LastNames,
    /// Email domains.
    Domains,
    /// Surnames used to name streets.
    People,
    /// US street suffixes.
    StreetTypes,
    /// Filler paragraphs.
    Paragraphs,
    /// Full country names.
    Countries,
    /// ISO 3166-1 alpha-3 codes.
    CountriesThreeChars,
    /// ISO 3166-1 alpha-2 codes.
    CountriesTwoChars,
    /// ISO 4217 currency codes.
    Currencies,
    /// City names.
    Cities,
    /// Full US state names.
    States,
    /// Two-letter US state abbreviations.
    StatesSmall,
    /// Weekday names.
    Days,
    /// Month names.
    Months,
    /// Honorifics for women.
    FemaleTitles,
    /// Honorifics for men.
    MaleTitles,
    /// IANA time zone names.
    Timezones,
    /// BCP 47 locale tags.
    Locales,
    /// Browser user-agent strings.
    UserAgents,
    /// International dialling prefixes, digits only.
    CountryCallingCodes,
    /// Counties of Great Britain.
    ProvincesGb,
    /// Street name stems used in Great Britain.
    StreetNameGb,
    /// Street suffixes used in Great Britain.
    StreetTypesGb,
}

impl LexiconList {
    /// Every list, in JSON declaration order.
    pub const ALL: [Self; 27] = [
        Self::Adjectives,
        Self::Nouns,
        Self::FirstNamesFemale,
        Self::FirstNamesMale,
        Self::LastNames,
        Self::Domains,
        Self::People,
        Self::StreetTypes,
        Self::Paragraphs,
        Self::Countries,
        Self::CountriesThreeChars,
        Self::CountriesTwoChars,
        Self::Currencies,
        Self::Cities,
        Self::States,
        Self::StatesSmall,
        Self::Days,
        Self::Months,
        Self::FemaleTitles,
        Self::MaleTitles,
        Self::Timezones,
        Self::Locales,
        Self::UserAgents,
        Self::CountryCallingCodes,
        Self::ProvincesGb,
        Self::StreetNameGb,
        Self::StreetTypesGb,
    ];

    /// Returns the list's JSON key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Adjectives => "adjectives",
            Self::Nouns => "nouns",
            Self::FirstNamesFemale => "firstNamesFemale",
            Self::FirstNamesMale => "firstNamesMale",
            Self::LastNames => "lastNames",
            Self::Domains => "domains",
            Self::People => "people",
            Self::StreetTypes => "streetTypes",
            Self::Paragraphs => "paragraphs",
            Self::Countries => "countries",
            Self::CountriesThreeChars => "countriesThreeChars",
            Self::CountriesTwoChars => "countriesTwoChars",
            Self::Currencies => "currencies",
            Self::Cities => "cities",
            Self::States => "states",
            Self::StatesSmall => "statesSmall",
            Self::Days => "days",
            Self::Months => "months",
            Self::FemaleTitles => "femaleTitles",
            Self::MaleTitles => "maleTitles",
            Self::Timezones => "timezones",
            Self::Locales => "locales",
            Self::UserAgents => "userAgents",
            Self::CountryCallingCodes => "countryCallingCodes",
            Self::ProvincesGb => "provincesGB",
            Self::StreetNameGb => "streetNameGB",
            Self::StreetTypesGb => "streetTypesGB",
        }
    }
}

/// A validated set of word lists.
///
/// # Example
///
/// ```
/// use random_data::{Lexicon, LexiconList};
///
/// let lexicon = Lexicon::embedded().expect("embedded lexicon");
/// assert_eq!(lexicon.list(LexiconList::Days).len(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lexicon {
    adjectives: Vec<String>,
    nouns: Vec<String>,
    first_names_female: Vec<String>,
    first_names_male: Vec<String>,
    last_names: Vec<String>,
    domains: Vec<String>,
    people: Vec<String>,
    street_types: Vec<String>,
    paragraphs: Vec<String>,
    countries: Vec<String>,
    countries_three_chars: Vec<String>,
    countries_two_chars: Vec<String>,
    currencies: Vec<String>,
    cities: Vec<String>,
    states: Vec<String>,
    states_small: Vec<String>,
    days: Vec<String>,
    months: Vec<String>,
    female_titles: Vec<String>,
    male_titles: Vec<String>,
    timezones: Vec<String>,
    locales: Vec<String>,
    user_agents: Vec<String>,
    country_calling_codes: Vec<String>,
    #[serde(rename = "provincesGB")]
    provinces_gb: Vec<String>,
    #[serde(rename = "streetNameGB")]
    street_name_gb: Vec<String>,
    #[serde(rename = "streetTypesGB")]
    street_types_gb: Vec<String>,
}

impl Lexicon {
    /// Parses and validates a lexicon from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::ParseError`] if the JSON is malformed or a list
    /// is missing, and [`LexiconError::EmptyList`] if any list is empty.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let lexicon: Self = serde_json::from_str(json).map_err(|e| LexiconError::ParseError {
            message: e.to_string(),
        })?;

        if let Some(empty) = LexiconList::ALL
            .into_iter()
            .find(|&list| lexicon.list(list).is_empty())
        {
            return Err(LexiconError::EmptyList { list: empty.name() });
        }

        debug!(
            lists = LexiconList::ALL.len(),
            entries = lexicon.entry_count(),
            "lexicon parsed"
        );
        Ok(lexicon)
    }

    /// Returns the lexicon compiled into the crate, parsing it on first use.
    ///
    /// # Errors
    ///
    /// Returns the [`LexiconError`] raised by the first parse; the result is
    /// cached, so every later call reports the same error.
    pub fn embedded() -> Result<Arc<Self>, LexiconError> {
        LazyLock::force(&EMBEDDED).clone()
    }

    /// Returns the entries of `list`.
    #[must_use]
    pub fn list(&self, list: LexiconList) -> &[String] {
        match list {
            LexiconList::Adjectives => &self.adjectives,
            LexiconList::Nouns => &self.nouns,
            LexiconList::FirstNamesFemale => &self.first_names_female,
            LexiconList::FirstNamesMale => &self.first_names_male,
            LexiconList::LastNames => &self.last_names,
            LexiconList::Domains => &self.domains,
            LexiconList::People => &self.people,
            LexiconList::StreetTypes => &self.street_types,
            LexiconList::Paragraphs => &self.paragraphs,
            LexiconList::Countries => &self.countries,
            LexiconList::CountriesThreeChars => &self.countries_three_chars,
            LexiconList::CountriesTwoChars => &self.countries_two_chars,
            LexiconList::Currencies => &self.currencies,
            LexiconList::Cities => &self.cities,
            LexiconList::States => &self.states,
            LexiconList::StatesSmall => &self.states_small,
            LexiconList::Days => &self.days,
            LexiconList::Months => &self.months,
            LexiconList::FemaleTitles => &self.female_titles,
            LexiconList::MaleTitles => &self.male_titles,
            LexiconList::Timezones => &self.timezones,
            LexiconList::Locales => &self.locales,
            LexiconList::UserAgents => &self.user_agents,
            LexiconList::CountryCallingCodes => &self.country_calling_codes,
            LexiconList::ProvincesGb => &self.provinces_gb,
            LexiconList::StreetNameGb => &self.street_name_gb,
            LexiconList::StreetTypesGb => &self.street_types_gb,
        }
    }

    fn entry_count(&self) -> usize {
        LexiconList::ALL
            .into_iter()
            .map(|list| self.list(list).len())
            .sum()
    }
}
