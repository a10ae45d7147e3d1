use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{validate_email, validate_password};

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct LoginRequest {
    #[validate(custom = "validate_email")]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 80))]
    pub business_name: String,
    #[validate(custom = "validate_email")]
    pub email: String,
    #[validate(custom = "validate_password")]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(alias = "_id", alias = "id")]
    pub user_id: String,
}

/// Error body the backend returns on non-2xx responses.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiErrorBody {
    #[serde(alias = "message")]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_validation() {
        let mut request = SignupRequest {
            business_name: "Chez Paul".to_string(),
            email: "paul@chez.fr".to_string(),
            password: "Croissant1".to_string(),
        };
        assert!(request.validate().is_ok());

        request.password = "weak".to_string();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_auth_response_accepts_id_aliases() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"token": "t", "_id": "u1"}"#).unwrap();
        assert_eq!(response.user_id, "u1");
        let response: AuthResponse =
            serde_json::from_str(r#"{"token": "t", "userId": "u2"}"#).unwrap();
        assert_eq!(response.user_id, "u2");
    }

    #[test]
    fn test_error_body_accepts_message_field() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message": "bad"}"#).unwrap();
        assert_eq!(body.error, "bad");
    }
}
