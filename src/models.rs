//! Frontend Models
//!
//! Data structures matching the backend wire format.

use serde::{Deserialize, Serialize};

/// Demo item (matches backend entity). The id is assigned server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demo {
    pub id: String,
}

/// Public runtime configuration, served without authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "logLevel")]
    pub log_level: String,
}

/// Identity of the current cookie session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub username: String,
}

/// RFC 7807 problem details, the server's structured error body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub problem_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    /// Synthetic problem for responses whose body is not a problem document.
    pub fn from_status(status: u16, reason: &str) -> Self {
        Self {
            title: Some(reason.to_string()),
            status: Some(status),
            ..Self::default()
        }
    }

    /// Best human-readable explanation the document carries.
    pub fn message(&self) -> &str {
        self.detail
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("Unknown error occurred")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_decodes_rfc7807_body() {
        let problem: Problem = serde_json::from_str(
            r#"{
                "type": "https://example.com/errors/demo",
                "title": "Demo Error",
                "status": 400,
                "detail": "This endpoint always fails",
                "instance": "/api/demo/error"
            }"#,
        )
        .unwrap();
        assert_eq!(problem.title.as_deref(), Some("Demo Error"));
        assert_eq!(problem.status, Some(400));
        assert_eq!(problem.message(), "This endpoint always fails");
    }

    #[test]
    fn problem_message_falls_back_to_title_then_generic() {
        let with_title = Problem {
            title: Some("Bad Request".into()),
            ..Problem::default()
        };
        assert_eq!(with_title.message(), "Bad Request");
        assert_eq!(Problem::default().message(), "Unknown error occurred");
    }

    #[test]
    fn config_uses_wire_field_name() {
        let config: Config = serde_json::from_str(r#"{"logLevel":"debug"}"#).unwrap();
        assert_eq!(config.log_level, "debug");
    }
}
