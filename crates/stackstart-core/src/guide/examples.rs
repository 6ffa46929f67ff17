//! Illustrative API payloads for a registration endpoint

use super::Role;
use crate::catalog::AuthMethod;
use crate::error::Result;
use serde::Serialize;
use serde_json::{json, Map, Value};

const ENDPOINT: &str = "/api/auth/register";
const SAMPLE_USER_ID: &str = "550e8400-e29b-41d4-a716-446655440000";
const SAMPLE_CREATED_AT: &str = "2026-02-07T10:30:00Z";
const SAMPLE_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJ1c2VySWQiOiI1NTBlODQwMC1lMjliLTQxZDQtYTcxNi00NDY2NTU0NDAwMDAifQ.xxx";

/// Pretty-printed JSON examples for one auth method and role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiExamples {
    /// Full request: method, endpoint, headers and body
    pub request: String,
    /// Request body only
    pub payload: String,
    pub success_response: String,
    pub error_response: String,
}

/// Sample value for a registration field
fn sample_value(field: &str) -> Value {
    match field {
        "email" => json!("developer@example.com"),
        "password" => json!("SecurePassword123!"),
        "username" => json!("devbuilder"),
        "department" => json!("Engineering"),
        "permissions" => json!(["read", "write", "delete"]),
        "profile_url" => json!("https://example.com/profile"),
        "bio" => json!("Building awesome apps"),
        _ => Value::Null,
    }
}

fn request_body(role: Role) -> Value {
    let body: Map<String, Value> = role
        .required_fields()
        .into_iter()
        .map(|field| (field.to_string(), sample_value(field)))
        .collect();
    Value::Object(body)
}

/// Build the request, payload and response examples
pub fn api_examples(auth: AuthMethod, role: Role) -> Result<ApiExamples> {
    let body = request_body(role);

    let request = json!({
        "method": "POST",
        "endpoint": ENDPOINT,
        "headers": {
            "Content-Type": "application/json",
            "X-Auth-Method": auth.display_name(),
        },
        "body": body.clone(),
    });

    let success = json!({
        "success": true,
        "user": {
            "id": SAMPLE_USER_ID,
            "email": sample_value("email"),
            "username": sample_value("username"),
            "role": role.to_string(),
            "createdAt": SAMPLE_CREATED_AT,
        },
        "token": SAMPLE_TOKEN,
    });

    let error = json!({
        "success": false,
        "error": {
            "code": "INVALID_CREDENTIALS",
            "message": "Email or password is incorrect",
            "details": "User with this email does not exist",
        },
    });

    Ok(ApiExamples {
        request: serde_json::to_string_pretty(&request)?,
        payload: serde_json::to_string_pretty(&body)?,
        success_response: serde_json::to_string_pretty(&success)?,
        error_response: serde_json::to_string_pretty(&error)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_payload_fields_follow_required_order() {
        for role in Role::iter() {
            let examples = api_examples(AuthMethod::Jwt, role).unwrap();
            let payload: Value = serde_json::from_str(&examples.payload).unwrap();
            let keys: Vec<_> = payload.as_object().unwrap().keys().cloned().collect();
            let expected: Vec<_> = role.required_fields().iter().map(|f| f.to_string()).collect();
            assert_eq!(keys, expected, "{}", role);
        }
        let viewer = api_examples(AuthMethod::Jwt, Role::Viewer).unwrap();
        assert!(viewer.payload.starts_with("{\n  \"email\""));
    }

    #[test]
    fn test_request_keys_keep_http_order() {
        let examples = api_examples(AuthMethod::Jwt, Role::User).unwrap();
        let request: Value = serde_json::from_str(&examples.request).unwrap();
        let keys: Vec<_> = request.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["method", "endpoint", "headers", "body"]);
        assert!(examples.request.starts_with("{\n  \"method\": \"POST\""));

        let success: Value = serde_json::from_str(&examples.success_response).unwrap();
        let keys: Vec<_> = success.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["success", "user", "token"]);
    }

    #[test]
    fn test_request_carries_auth_header() {
        let examples = api_examples(AuthMethod::MagicLink, Role::Viewer).unwrap();
        let request: Value = serde_json::from_str(&examples.request).unwrap();
        assert_eq!(request["method"], "POST");
        assert_eq!(request["endpoint"], ENDPOINT);
        assert_eq!(request["headers"]["X-Auth-Method"], "Magic Link");
        assert_eq!(request["body"]["username"], "devbuilder");
    }

    #[test]
    fn test_success_response_names_role() {
        let examples = api_examples(AuthMethod::OAuth, Role::Admin).unwrap();
        let success: Value = serde_json::from_str(&examples.success_response).unwrap();
        assert_eq!(success["success"], true);
        assert_eq!(success["user"]["role"], "Admin");
        assert_eq!(success["user"]["id"], SAMPLE_USER_ID);
    }

    #[test]
    fn test_error_response_is_role_independent() {
        let a = api_examples(AuthMethod::Jwt, Role::Admin).unwrap();
        let b = api_examples(AuthMethod::Otp, Role::Viewer).unwrap();
        assert_eq!(a.error_response, b.error_response);
        assert!(a.error_response.contains("INVALID_CREDENTIALS"));
    }

    #[test]
    fn test_examples_are_deterministic() {
        assert_eq!(
            api_examples(AuthMethod::Clerk, Role::User).unwrap(),
            api_examples(AuthMethod::Clerk, Role::User).unwrap()
        );
    }
}
