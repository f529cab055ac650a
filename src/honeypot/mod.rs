//! Honeypot recruiting API client.
//!
//! Typed wrapper around the two endpoints the bot needs: sign-in
//! (`POST /api/v1/users/login`, form-encoded, success is exactly HTTP 201)
//! and talent search (`GET /api/v1/company/talents?keywords=...` with an
//! `Authorization: Token <token>` header).
//!
//! Response bodies are deserialized into explicit records at the API
//! boundary; a body that does not match the schema is a
//! [`BotError::MalformedResponse`], never a silent lookup miss.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::BotError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Sign-in endpoint path.
pub const LOGIN_PATH: &str = "/api/v1/users/login";

/// Talent search endpoint path.
pub const TALENTS_PATH: &str = "/api/v1/company/talents";

// ---------------------------------------------------------------------------
// Response records
// ---------------------------------------------------------------------------

/// The recruiter object nested under `user` in a sign-in response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecruiterProfile {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// First name, used in the login greeting.
    pub firstname: String,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of a successful (201) sign-in response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SignInResponse {
    pub user: RecruiterProfile,
}

/// One candidate record from the search endpoint.
///
/// `headline` is nullable server-side; a talent without one is rendered
/// as its profile URL alone.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Talent {
    pub id: u64,
    #[serde(default)]
    pub headline: Option<String>,
}

/// Result-count metadata attached to search responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Meta {
    pub total: u64,
}

/// Body of a talent search response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TalentsPage {
    pub talents: Vec<Talent>,
    /// Not every deployment returns the meta block.
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Body the API sends with 401 responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// An authenticated connection to the Honeypot API on behalf of one
/// recruiter.
///
/// Constructed by [`RecruiterClient::sign_in`]; the token obtained there is
/// attached to every subsequent request.
#[derive(Debug, Clone)]
pub struct RecruiterClient {
    base_url: String,
    token: String,
    profile: RecruiterProfile,
    http: reqwest::Client,
}

impl RecruiterClient {
    /// Sign in as a recruiter.
    ///
    /// Sends the form-encoded credentials to [`LOGIN_PATH`]. Any status
    /// other than 201 is [`BotError::AuthenticationFailed`].
    pub async fn sign_in(
        base_url: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, BotError> {
        let http = reqwest::Client::new();
        let endpoint = format!("{}{}", base_url, LOGIN_PATH);
        let form = [("user[email]", email), ("user[password]", password)];

        log::debug!("Signing in {} against {}", email, endpoint);

        let response = http.post(&endpoint).form(&form).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let parsed = parse_sign_in(status, &body)?;

        log::info!("Recruiter {} signed in", parsed.user.firstname);

        Ok(Self {
            base_url: base_url.to_string(),
            token: parsed.user.token.clone(),
            profile: parsed.user,
            http,
        })
    }

    /// Rebuild a client from a previously issued token, skipping the
    /// sign-in exchange.
    pub fn from_parts(
        base_url: impl Into<String>,
        token: impl Into<String>,
        profile: RecruiterProfile,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            profile,
            http: reqwest::Client::new(),
        }
    }

    /// Search talents for the given keywords.
    pub async fn find_talents(&self, keywords: &str) -> Result<TalentsPage, BotError> {
        let endpoint = format!("{}{}", self.base_url, TALENTS_PATH);

        log::debug!("Searching talents for {:?}", keywords);

        let response = self
            .http
            .get(&endpoint)
            .query(&[("keywords", keywords)])
            .header("Authorization", format!("Token {}", self.token))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        parse_talents(status, &body)
    }

    /// The API base URL this client was signed in against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Profile of the signed-in recruiter.
    pub fn profile(&self) -> &RecruiterProfile {
        &self.profile
    }
}

/// Public profile URL of a talent on the recruiting platform.
pub fn talent_url(base_url: &str, id: u64) -> String {
    format!("{}/company/talents/{}", base_url, id)
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parse a sign-in response.
///
/// Success is exactly HTTP 201; everything else is an authentication
/// failure. A 201 body that does not match the schema is malformed.
pub fn parse_sign_in(status: StatusCode, body: &str) -> Result<SignInResponse, BotError> {
    if status != StatusCode::CREATED {
        log::warn!("Sign-in rejected with status {}", status);
        return Err(BotError::AuthenticationFailed);
    }
    serde_json::from_str(body)
        .map_err(|e| BotError::MalformedResponse(format!("sign-in response: {}", e)))
}

/// Parse a talent search response.
///
/// A 401 carries an `{"error": ...}` body whose message is surfaced
/// verbatim; other non-success statuses are reported by code.
pub fn parse_talents(status: StatusCode, body: &str) -> Result<TalentsPage, BotError> {
    if status == StatusCode::UNAUTHORIZED {
        let rejection: ErrorResponse = serde_json::from_str(body)
            .map_err(|e| BotError::MalformedResponse(format!("error response: {}", e)))?;
        return Err(BotError::Api(rejection.error));
    }
    if !status.is_success() {
        return Err(BotError::Api(format!("talent search returned {}", status)));
    }
    serde_json::from_str(body)
        .map_err(|e| BotError::MalformedResponse(format!("talents response: {}", e)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_in_body() -> String {
        serde_json::json!({
            "user": {
                "id": 7,
                "email": "bearbot@example.com",
                "firstname": "Sam",
                "lastname": "Doe",
                "role": "recruiter",
                "token": "t1"
            }
        })
        .to_string()
    }

    #[test]
    fn test_parse_sign_in_created() {
        let parsed = parse_sign_in(StatusCode::CREATED, &sign_in_body()).unwrap();
        assert_eq!(parsed.user.token, "t1");
        assert_eq!(parsed.user.firstname, "Sam");
        assert_eq!(parsed.user.lastname.as_deref(), Some("Doe"));
    }

    #[test]
    fn test_parse_sign_in_ok_is_still_a_failure() {
        // Only 201 counts as success, even with a plausible body.
        let err = parse_sign_in(StatusCode::OK, &sign_in_body()).unwrap_err();
        assert!(matches!(err, BotError::AuthenticationFailed));
    }

    #[test]
    fn test_parse_sign_in_unauthorized() {
        let err = parse_sign_in(StatusCode::UNAUTHORIZED, "{}").unwrap_err();
        assert_eq!(err.to_string(), "Authentication failed.");
    }

    #[test]
    fn test_parse_sign_in_malformed_body() {
        let err = parse_sign_in(StatusCode::CREATED, r#"{"user": {"firstname": "Sam"}}"#)
            .unwrap_err();
        assert!(matches!(err, BotError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_talents() {
        let body = serde_json::json!({
            "talents": [
                { "id": 42, "headline": "FE Dev" },
                { "id": 43, "headline": null }
            ],
            "meta": { "total": 2 }
        })
        .to_string();

        let page = parse_talents(StatusCode::OK, &body).unwrap();
        assert_eq!(page.talents.len(), 2);
        assert_eq!(page.talents[0].headline.as_deref(), Some("FE Dev"));
        assert_eq!(page.talents[1].headline, None);
        assert_eq!(page.meta.map(|m| m.total), Some(2));
    }

    #[test]
    fn test_parse_talents_without_meta() {
        let body = r#"{"talents": [{"id": 42, "headline": "FE Dev"}]}"#;
        let page = parse_talents(StatusCode::OK, body).unwrap();
        assert_eq!(page.talents.len(), 1);
        assert_eq!(page.meta, None);
    }

    #[test]
    fn test_parse_talents_missing_key_is_malformed() {
        let err = parse_talents(StatusCode::OK, r#"{"results": []}"#).unwrap_err();
        assert!(matches!(err, BotError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_talents_unauthorized_surfaces_api_error() {
        let err = parse_talents(StatusCode::UNAUTHORIZED, r#"{"error": "token expired"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "token expired");
    }

    #[test]
    fn test_parse_talents_server_error() {
        let err = parse_talents(StatusCode::INTERNAL_SERVER_ERROR, "oops").unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_talent_url() {
        assert_eq!(
            talent_url("https://acme.example", 42),
            "https://acme.example/company/talents/42"
        );
    }

    #[test]
    fn test_from_parts_keeps_profile() {
        let profile = RecruiterProfile {
            token: "t1".to_string(),
            firstname: "Sam".to_string(),
            lastname: None,
            email: None,
        };
        let client = RecruiterClient::from_parts("https://acme.example", "t1", profile);
        assert_eq!(client.base_url(), "https://acme.example");
        assert_eq!(client.profile().firstname, "Sam");
    }

    /// Integration test — requires `URL`, `HONEYPOT_EMAIL` and
    /// `HONEYPOT_PASSWORD` pointing at a live deployment.
    #[tokio::test]
    #[ignore]
    async fn test_sign_in_real_call() {
        let url = std::env::var("URL").expect("URL not set");
        let email = std::env::var("HONEYPOT_EMAIL").expect("HONEYPOT_EMAIL not set");
        let password = std::env::var("HONEYPOT_PASSWORD").expect("HONEYPOT_PASSWORD not set");

        let client = RecruiterClient::sign_in(&url, &email, &password).await;
        assert!(client.is_ok(), "Failed: {:?}", client.err());
    }
}
