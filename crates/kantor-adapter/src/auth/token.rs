/*
[INPUT]:  Raw /auth/login response payload
[OUTPUT]: Session token, if the payload carries one
[POS]:    Auth layer - token field probing
[UPDATE]: When the backend adds or renames token fields
*/

use serde_json::Value;

/// Field names probed for the session token, in order
pub const TOKEN_FIELDS: [&str; 4] = ["access_token", "token", "accessToken", "jwt"];

/// Find the session token in a login payload.
///
/// Probes [`TOKEN_FIELDS`] at the top level, then the same names under
/// `data`. The first non-empty string wins.
pub fn extract_session_token(payload: &Value) -> Option<String> {
    let nested = payload.get("data");
    [Some(payload), nested]
        .into_iter()
        .flatten()
        .flat_map(|level| TOKEN_FIELDS.into_iter().filter_map(move |field| level.get(field)))
        .filter_map(Value::as_str)
        .find(|token| !token.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({"access_token": "abc123"}), Some("abc123"))]
    #[case(json!({"token": "t"}), Some("t"))]
    #[case(json!({"accessToken": "camel"}), Some("camel"))]
    #[case(json!({"jwt": "j"}), Some("j"))]
    #[case(json!({"data": {"access_token": "nested"}}), Some("nested"))]
    #[case(json!({"data": {"jwt": "nested-jwt"}}), Some("nested-jwt"))]
    #[case(json!({"token": "top", "data": {"token": "nested"}}), Some("top"))]
    #[case(json!({"jwt": "last", "access_token": "first"}), Some("first"))]
    #[case(json!({"access_token": "", "token": "fallback"}), Some("fallback"))]
    #[case(json!({"access_token": null, "data": {"accessToken": "n"}}), Some("n"))]
    #[case(json!({}), None)]
    #[case(json!({"user": {"token": "too-deep"}}), None)]
    #[case(json!({"token": 42}), None)]
    #[case(json!("plain text"), None)]
    #[case(Value::Null, None)]
    fn test_extract_session_token(#[case] payload: Value, #[case] expected: Option<&str>) {
        assert_eq!(
            extract_session_token(&payload).as_deref(),
            expected
        );
    }
}
