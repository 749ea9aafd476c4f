//! Job application models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Submitted job application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,

    pub name: String,

    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_link: Option<String>,

    pub cover_letter: String,

    pub job_id: String,

    pub created_at: DateTime<Utc>,
}

/// Body of `POST /applications`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_link: Option<String>,
    pub cover_letter: String,
    pub job_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_application_wire_format() {
        let body = NewApplication {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            cv_link: None,
            cover_letter: "Hello".to_string(),
            job_id: "job-1".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["jobId"], "job-1");
        assert_eq!(json["coverLetter"], "Hello");
        assert!(json.get("cvLink").is_none());
    }

    #[test]
    fn test_application_without_cv_link() {
        let app: Application = serde_json::from_str(
            r#"{
                "id": "a1",
                "name": "Ada",
                "email": "ada@example.com",
                "coverLetter": "Hello",
                "jobId": "j1",
                "createdAt": "2025-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert!(app.cv_link.is_none());
        assert_eq!(app.job_id, "j1");
    }
}
