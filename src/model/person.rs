//! Patient records

use crate::model::fields::{Address, Email, Name, Nric, Phone, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A checked-in patient
///
/// Two persons are the *same person* when their NRICs match; every other field may
/// differ. Full equality (`==`) compares all fields and is used for snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    nric: Nric,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        nric: Nric,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            nric,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn nric(&self) -> &Nric {
        &self.nric
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn is_same_person(&self, other: &Person) -> bool {
        self.nric == other.nric
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Address: {} NRIC: {} Tags: ",
            self.name, self.phone, self.email, self.address, self.nric
        )?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        Ok(())
    }
}

/// Optional replacement values for an edit; `None` keeps the existing value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonChanges {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub nric: Option<Nric>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl PersonChanges {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.nric.is_some()
            || self.tags.is_some()
    }

    /// Build the edited copy of `person`
    pub fn apply_to(&self, person: &Person) -> Person {
        Person {
            name: self.name.clone().unwrap_or_else(|| person.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| person.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| person.email.clone()),
            address: self.address.clone().unwrap_or_else(|| person.address.clone()),
            nric: self.nric.clone().unwrap_or_else(|| person.nric.clone()),
            tags: self.tags.clone().unwrap_or_else(|| person.tags.clone()),
        }
    }
}

/// Which persons the list view shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
    #[default]
    All,
    /// Name contains any of the keywords as a whole word, ignoring case
    NameKeywords(Vec<String>),
}

impl PersonFilter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            PersonFilter::All => true,
            PersonFilter::NameKeywords(keywords) => keywords
                .iter()
                .any(|keyword| contains_word_ignore_case(person.name().as_str(), keyword)),
        }
    }
}

fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let word = word.trim();
    if word.is_empty() {
        return false;
    }
    let word = word.to_lowercase();
    sentence
        .split_whitespace()
        .any(|candidate| candidate.to_lowercase() == word)
}
