use serde::{Deserialize, Serialize};

/// One directory entry as returned by the listing endpoint.
///
/// Records are immutable once fetched; the `id` is stable across fetches but
/// overlapping pages may return the same id twice (see [`User::row_key`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    /// Avatar URL. Renderers fall back to initials when absent.
    #[serde(default)]
    pub image: Option<String>,
}

impl User {
    /// Display name as rendered in the list: "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Initials for the avatar placeholder, e.g. "AL" for Ann Lee.
    pub fn initials(&self) -> String {
        let mut s = String::new();
        if let Some(c) = self.first_name.chars().next() {
            s.extend(c.to_uppercase());
        }
        if let Some(c) = self.last_name.chars().next() {
            s.extend(c.to_uppercase());
        }
        s
    }

    /// Compound key for list rows. Duplicate ids across overlapping pages are
    /// tolerated rather than de-duplicated, so the position is part of the key.
    pub fn row_key(&self, index: usize) -> String {
        format!("{}_{}", self.id, index)
    }
}

/// One batch of users returned by a single page fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPage {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub skip: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

impl UserPage {
    /// Number of records actually returned; a zero here is the end-of-data
    /// signal, not an error.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Full record returned by the one-shot single-user endpoint.
///
/// The detail view shows more than the list does; everything beyond the core
/// identity fields is optional because the service omits fields freely.
#[derive(Debug, Clone, Deserialize)]
pub struct UserDetail {
    pub id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub company: Option<Company>,
}

impl UserDetail {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(rename = "postalCode", default)]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}
