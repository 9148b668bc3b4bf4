//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Register / Login
// ============================================================================

/// Register request. Required fields are options so that missing values
/// reach the use case (which answers with the proper 400) instead of
/// failing deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub age: Option<i32>,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Authenticated user plus its bearer token
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    pub user: UserDto,
    pub token: String,
}

// ============================================================================
// Profile
// ============================================================================

/// Profile update request.
///
/// `age` distinguishes "absent" from "explicit null": omitted leaves the
/// stored value, `"age": null` clears it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub age: Option<Option<i32>>,
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

// ============================================================================
// User view
// ============================================================================

/// User as exposed by the API. The password hash has no field here, so it
/// can never serialize.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id.to_string(),
            full_name: user.full_name.clone(),
            email: user.email.to_string(),
            role: user.role.code().to_string(),
            age: user.age,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_age_variants() {
        let absent: UpdateProfileRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(absent.age, None);

        let cleared: UpdateProfileRequest = serde_json::from_str(r#"{"age": null}"#).unwrap();
        assert_eq!(cleared.age, Some(None));

        let set: UpdateProfileRequest = serde_json::from_str(r#"{"age": 28}"#).unwrap();
        assert_eq!(set.age, Some(Some(28)));
    }

    #[test]
    fn test_user_dto_has_no_password_field() {
        use crate::domain::value_object::email::Email;
        use platform::password::PlainPassword;

        let hash = PlainPassword::new("some password").unwrap().hash().unwrap();
        let user = User::new("Jane Doe", Email::new("jane@example.com").unwrap(), hash);

        let json = serde_json::to_value(UserDto::from(&user)).unwrap();
        assert_eq!(json["fullName"], "Jane Doe");
        assert_eq!(json["role"], "user");
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
    }
}
