//! Integration tests for profile assembly.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use random_data::{DataGenerator, Gender, Lexicon, LexiconList, Profile};
use regex::Regex;
use rstest::{fixture, rstest};

#[fixture]
fn generator() -> DataGenerator {
    DataGenerator::from_seed(1234).expect("embedded lexicon")
}

fn in_list(list: LexiconList, value: &str) -> bool {
    Lexicon::embedded()
        .expect("embedded lexicon")
        .list(list)
        .iter()
        .any(|entry| entry == value)
}

#[rstest]
fn profiles_serialise_with_the_expected_keys(generator: DataGenerator) {
    let profile = generator.profile(None);
    let json = serde_json::to_value(&profile).expect("serialise profile");

    for key in [
        "gender", "name", "location", "email", "login", "dob", "registered", "phone", "cell",
        "id", "picture", "nat",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }

    let round_trip: Profile = serde_json::from_value(json).expect("deserialise profile");
    assert_eq!(round_trip, profile);
}

#[rstest]
fn names_match_the_profile_gender(generator: DataGenerator, #[values(Gender::Male, Gender::Female)] gender: Gender) {
    let (names, titles) = match gender {
        Gender::Male => (LexiconList::FirstNamesMale, LexiconList::MaleTitles),
        Gender::Female => (LexiconList::FirstNamesFemale, LexiconList::FemaleTitles),
    };
    for _ in 0..20 {
        let profile = generator.profile(Some(gender));
        assert!(in_list(names, &profile.name.first), "{}", profile.name.first);
        assert!(in_list(titles, &profile.name.title), "{}", profile.name.title);
        assert!(in_list(LexiconList::LastNames, &profile.name.last));
    }
}

#[rstest]
fn email_is_derived_from_the_name(generator: DataGenerator) {
    let profile = generator.profile(None);
    let prefix = format!("{}.{}", profile.name.first, profile.name.last).to_lowercase();
    assert!(profile.email.starts_with(&prefix), "{}", profile.email);
}

#[rstest]
fn location_uses_full_state_names(generator: DataGenerator) {
    let profile = generator.profile(None);
    assert!(in_list(LexiconList::States, &profile.location.state));
    assert!(in_list(LexiconList::Cities, &profile.location.city));
    assert!(profile.location.postcode.chars().all(|c| c.is_ascii_digit()));
}

#[rstest]
fn phones_and_dates_are_well_formed(generator: DataGenerator) {
    let phone = Regex::new(r"^\+\d{1,3}( \d+)+$").expect("valid regex");
    let date = Regex::new(r"^[A-Z][a-z]+day \d{1,2} [A-Z][a-z]{2} \d{4}$").expect("valid regex");

    for _ in 0..20 {
        let profile = generator.profile(None);
        assert!(phone.is_match(&profile.phone), "{}", profile.phone);
        assert!(phone.is_match(&profile.cell), "{}", profile.cell);
        assert!(date.is_match(&profile.dob), "{}", profile.dob);
        assert!(date.is_match(&profile.registered), "{}", profile.registered);
    }
}

#[rstest]
fn portrait_index_is_shared_across_sizes(generator: DataGenerator) {
    let picture = generator.profile(None).picture;
    let index = |url: &str| {
        url.rsplit('/')
            .next()
            .and_then(|file| file.strip_suffix(".jpg"))
            .and_then(|n| n.parse::<u32>().ok())
            .expect("numeric portrait")
    };
    let large = index(&picture.large);
    assert!(large < 35);
    assert_eq!(large, index(&picture.medium));
    assert_eq!(large, index(&picture.thumbnail));
}

#[test]
fn user_agents_look_like_browsers() {
    let pattern = Regex::new(r"^[a-zA-Z]+/[0-9]+.[0-9]+ \(.*\).*$").expect("valid regex");
    let lexicon = Lexicon::embedded().expect("embedded lexicon");
    for agent in lexicon.list(LexiconList::UserAgents) {
        assert!(pattern.is_match(agent), "{agent}");
    }
}
