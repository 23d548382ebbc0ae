//! People directory: record types, the HTTP source, demo decoration and ordering.
//!
//! Records arrive as a JSON array in the `jsonplaceholder` user shape. Fields the
//! picker never reads are still modelled so the details pane can show them, and
//! all of them default when missing on the wire.

pub mod client;
pub mod enrich;
pub mod order;

use serde::{Deserialize, Serialize};

use crate::format::Named;

pub use client::{DEFAULT_ENDPOINT, FetchError, HttpPeopleSource, PeopleSource};
pub use enrich::{DemoExtras, Enrich, NoExtras};
pub use order::LastNameOrder;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lng: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub geo: Geo,
}

impl Address {
    /// `street, suite` line of the address panel.
    pub fn street_line(&self) -> String {
        format!("{}, {}", self.street, self.suite)
    }

    /// `city, zipcode` line of the address panel.
    pub fn city_line(&self) -> String {
        format!("{}, {}", self.city, self.zipcode)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "catchPhrase")]
    pub catch_phrase: String,
    #[serde(default)]
    pub bs: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Person {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub company: Company,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Person {
    /// Label shown in the picker list.
    pub fn label(&self) -> String {
        crate::format::format_label(self)
    }

    /// Last whitespace-delimited token of `name`, the sort key.
    pub fn last_name_key(&self) -> &str {
        self.name.split_whitespace().next_back().unwrap_or("")
    }
}

// Options compare by id only.
impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl Named for Person {
    fn name(&self) -> &str {
        &self.name
    }

    fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Decorate then sort freshly fetched records; the result is never mutated again.
pub fn prepare(mut people: Vec<Person>, enrich: &dyn Enrich, order: &LastNameOrder) -> Vec<Person> {
    enrich.apply(&mut people);
    order.sort(&mut people);
    people
}
