use super::UserId;
use serde::{Deserialize, Serialize};

/// A registered account. Suppliers and buyers share one collection; a user
/// becomes a supplier by listing products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    /// The name shown on orders: the profile name when set, the email
    /// address otherwise.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_email() {
        let named = User {
            id: UserId(1),
            name: "Carla".to_string(),
            email: "carla@example.cl".to_string(),
        };
        assert_eq!(named.display_name(), "Carla");

        let anonymous = User {
            id: UserId(2),
            name: String::new(),
            email: "x@example.cl".to_string(),
        };
        assert_eq!(anonymous.display_name(), "x@example.cl");
    }
}
