use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Stored as given. Never leaves the process: responses use `PublicUser`.
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
}

/// A `User` with the password stripped, as returned by `GET /api/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_never_serialized() {
        let user = User {
            id: 1,
            username: "alex".to_string(),
            password: "password123".to_string(),
            name: "Alex Johnson".to_string(),
            email: "alex@example.com".to_string(),
        };
        let raw = serde_json::to_string(&user).unwrap();
        assert!(!raw.contains("password"));

        let public = serde_json::to_value(PublicUser::from(user)).unwrap();
        assert_eq!(public["username"], "alex");
        assert!(public.get("password").is_none());
    }
}
