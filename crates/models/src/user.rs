use serde::{Deserialize, Serialize};

/// User record as carried on the wire.
///
/// The identifier is assigned by the caller on creation, never generated
/// server-side, and doubles as the storage key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), email: email.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_field_names_are_stable() {
        let u = User::new("1", "Alice", "alice@example.com");
        let json = serde_json::to_value(&u).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["email"], "alice@example.com");
    }

    #[test]
    fn deserializes_from_client_payload() {
        let u: User =
            serde_json::from_str(r#"{"id":"7","name":"Carol","email":"carol@example.com"}"#)
                .unwrap();
        assert_eq!(u, User::new("7", "Carol", "carol@example.com"));
    }
}
