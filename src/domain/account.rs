//! Account domain types.

use serde::{Deserialize, Serialize};

/// Data needed to create an account.
///
/// `password` is plaintext when produced by the controller and holds the
/// hash by the time it reaches a repository.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AddAccountInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

// Don't expose the password in debug output
impl std::fmt::Debug for AddAccountInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddAccountInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl AddAccountInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Replace the password with its hashed form.
    pub fn with_hashed_password(self, hashed_password: String) -> Self {
        Self {
            password: hashed_password,
            ..self
        }
    }
}

/// A stored account, as returned by the persistence port.
///
/// `password` always holds the hashed value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AccountRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl AccountRecord {
    /// Build a record from a hashed input and the id assigned by storage.
    pub fn from_input(id: impl Into<String>, input: AddAccountInput) -> Self {
        Self {
            id: id.into(),
            name: input.name,
            email: input.email,
            password: input.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_hashed_password_keeps_other_fields() {
        let input = AddAccountInput::new("any_name", "any@mail.com", "plain")
            .with_hashed_password("hashed".to_string());

        assert_eq!(input, AddAccountInput::new("any_name", "any@mail.com", "hashed"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let input = AddAccountInput::new("any_name", "any@mail.com", "secret_value");
        let record = AccountRecord::from_input("id", input.clone());

        assert!(!format!("{:?}", input).contains("secret_value"));
        assert!(!format!("{:?}", record).contains("secret_value"));
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = AccountRecord::from_input(
            "valid_id",
            AddAccountInput::new("valid", "valid@mail.com", "123123123"),
        );

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({
                "id": "valid_id",
                "name": "valid",
                "email": "valid@mail.com",
                "password": "123123123"
            })
        );
    }
}
