//! Complete person profiles.
//!
//! A profile ties a name, a US location, login credentials with derived
//! digests, contact numbers and portrait links into one serialisable record.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generator::{DataGenerator, Gender, StateFormat};
use crate::hashing::{md5_hex, sha1_base64url, sha256_base64url};

const PORTRAIT_BASE: &str = "https://randomuser.me/api/portraits";

/// Number of portraits available per gender.
const PORTRAIT_COUNT: u64 = 35;

const SALT_LEN: usize = 16;

/// A generated person.
///
/// # Example
///
/// ```
/// use random_data::{DataGenerator, Gender};
///
/// let generator = DataGenerator::from_seed(11).expect("embedded lexicon");
/// let profile = generator.profile(Some(Gender::Female));
///
/// assert_eq!(profile.gender, Gender::Female);
/// assert_eq!(profile.nat, "US");
/// assert!(profile.picture.large.contains("/women/"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Gender used for the title, given name and portrait.
    pub gender: Gender,
    /// Personal name.
    pub name: PersonName,
    /// Postal location.
    pub location: Location,
    /// Email address derived from the name.
    pub email: String,
    /// Login credentials.
    pub login: Login,
    /// Date of birth, rendered as `Monday 2 Jan 2006`.
    pub dob: String,
    /// Registration date, rendered like `dob`.
    pub registered: String,
    /// Landline number.
    pub phone: String,
    /// Mobile number.
    pub cell: String,
    /// National identifier.
    pub id: Identifier,
    /// Portrait links.
    pub picture: Picture,
    /// Nationality as an ISO 3166-1 alpha-2 code.
    pub nat: String,
}

/// Title, given name and family name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    /// Given name.
    pub first: String,
    /// Family name.
    pub last: String,
    /// Honorific.
    pub title: String,
}

/// A US street address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// House number and street.
    pub street: String,
    /// City name.
    pub city: String,
    /// Full state name.
    pub state: String,
    /// Five-digit ZIP code.
    pub postcode: String,
}

/// Credentials with digests of `password + salt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    /// Account name.
    pub username: String,
    /// Clear-text password.
    pub password: String,
    /// Alphanumeric salt.
    pub salt: String,
    /// Hex MD5.
    pub md5: String,
    /// URL-safe base64 SHA-1.
    pub sha1: String,
    /// URL-safe base64 SHA-256.
    pub sha256: String,
}

/// A named identifier such as a social security number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    /// Identifier scheme.
    pub name: String,
    /// Identifier value.
    pub value: String,
}

/// Portrait links in three sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    /// Full-size portrait.
    pub large: String,
    /// Medium portrait.
    pub medium: String,
    /// Thumbnail portrait.
    pub thumbnail: String,
}

impl Picture {
    fn portrait(gender: Gender, index: u64) -> Self {
        let dir = match gender {
            Gender::Male => "men",
            Gender::Female => "women",
        };
        Self {
            large: format!("{PORTRAIT_BASE}/{dir}/{index}.jpg"),
            medium: format!("{PORTRAIT_BASE}/med/{dir}/{index}.jpg"),
            thumbnail: format!("{PORTRAIT_BASE}/thumb/{dir}/{index}.jpg"),
        }
    }
}

impl<R: RngCore> DataGenerator<R> {
    /// Assembles a US profile; `None` draws the gender.
    pub fn profile(&self, requested: Option<Gender>) -> Profile {
        let gender = self.resolve_gender(requested);
        let source = self.source();

        let name = PersonName {
            title: self.title(Some(gender)),
            first: self.first_name(Some(gender)),
            last: self.last_name(),
        };
        let id = Identifier {
            name: "SSN".to_owned(),
            value: format!(
                "{}-{}-{}",
                source.uniform_inclusive(101, 998),
                source.uniform_inclusive(1, 98),
                source.uniform_inclusive(100, 9998),
            ),
        };
        let email = self.email_for(&name.first, &name.last);
        let cell = self.phone_number();
        let phone = self.phone_number();
        let dob = source.full_date();
        let registered = source.full_date();

        let location = Location {
            city: self.city(),
            postcode: source.postal_code("US"),
            state: self.state(StateFormat::Full),
            street: format!("{} {}", source.string_number(1, ""), self.street()),
        };

        let login = self.login();
        let picture = Picture::portrait(gender, source.uniform_inclusive(0, PORTRAIT_COUNT - 1));

        debug!(
            gender = ?gender,
            username = %login.username,
            "profile assembled"
        );

        Profile {
            gender,
            name,
            location,
            email,
            login,
            dob,
            registered,
            phone,
            cell,
            id,
            picture,
            nat: "US".to_owned(),
        }
    }

    fn login(&self) -> Login {
        let username = self.silly_name();
        let password = self.silly_name();
        let salt = self.source().alphanumeric(SALT_LEN);
        let salted = format!("{password}{salt}");
        Login {
            md5: md5_hex(&salted),
            sha1: sha1_base64url(&salted),
            sha256: sha256_base64url(&salted),
            username,
            password,
            salt,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn generator() -> DataGenerator {
        DataGenerator::from_seed(2024).expect("embedded lexicon")
    }

    #[rstest]
    #[case(Gender::Male, "/men/")]
    #[case(Gender::Female, "/women/")]
    fn portraits_follow_gender(
        generator: DataGenerator,
        #[case] gender: Gender,
        #[case] dir: &str,
    ) {
        let profile = generator.profile(Some(gender));
        assert_eq!(profile.gender, gender);
        assert!(profile.picture.large.contains(dir));
        assert!(profile.picture.medium.contains(&format!("/med{dir}")));
        assert!(profile.picture.thumbnail.contains(&format!("/thumb{dir}")));
    }

    #[rstest]
    fn login_digests_cover_password_and_salt(generator: DataGenerator) {
        let login = generator.profile(None).login;
        let salted = format!("{}{}", login.password, login.salt);

        assert_eq!(login.salt.len(), SALT_LEN);
        assert_eq!(login.md5, md5_hex(&salted));
        assert_eq!(login.sha1, sha1_base64url(&salted));
        assert_eq!(login.sha256, sha256_base64url(&salted));
    }

    #[rstest]
    fn ssn_parts_are_in_range(generator: DataGenerator) {
        for _ in 0..50 {
            let id = generator.profile(None).id;
            assert_eq!(id.name, "SSN");
            let parts: Vec<u32> = id
                .value
                .split('-')
                .map(|part| part.parse().expect("numeric part"))
                .collect();
            let [area, group, serial] = parts.as_slice() else {
                panic!("three parts expected: {}", id.value);
            };
            assert!((101..999).contains(area));
            assert!((1..99).contains(group));
            assert!((100..9999).contains(serial));
        }
    }

    #[rstest]
    fn location_is_american(generator: DataGenerator) {
        let profile = generator.profile(None);
        assert_eq!(profile.nat, "US");
        assert_eq!(profile.location.postcode.len(), 5);
        let (number, _) = profile
            .location
            .street
            .split_once(' ')
            .expect("number then street");
        assert_eq!(number.len(), 2);
    }

    #[test]
    fn gender_serialises_lowercase() {
        let profile = DataGenerator::from_seed(1)
            .expect("embedded lexicon")
            .profile(Some(Gender::Female));
        let json = serde_json::to_value(&profile).expect("serialise");
        assert_eq!(json["gender"], "female");
        assert!(json["login"]["sha256"].is_string());
    }

    #[test]
    fn same_seed_same_profile() {
        let first = DataGenerator::from_seed(8).expect("embedded lexicon");
        let second = DataGenerator::from_seed(8).expect("embedded lexicon");
        let left = first.profile(Some(Gender::Male));
        let right = second.profile(Some(Gender::Male));
        assert_eq!(left, right);
    }
}
