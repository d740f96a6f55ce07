use serde::{Deserialize, Serialize};

pub mod locator;
pub mod store;

/// A named git identity.
///
/// `name` is the identity key: two profiles with the same name are the same
/// profile as far as the store and the selector are concerned.
#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub user: String,
    pub email: String,
    #[serde(default)]
    pub signing_key: String,
    #[serde(default)]
    pub description: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, user: impl Into<String>, email: impl Into<String>) -> Self {
        Profile {
            name: name.into(),
            user: user.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_signing_key(mut self, signing_key: impl Into<String>) -> Self {
        self.signing_key = signing_key.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Name of the first required field that is empty, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("user", &self.user),
            ("email", &self.email),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    pub fn has_signing_key(&self) -> bool {
        !self.signing_key.is_empty()
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}
