//! Domain records shared across the leadflow pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sales lead as stored by the lead store
///
/// Read-only to the matcher: fields are only used to build the text block
/// that gets embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    /// Lead store identifier
    pub id: i64,

    pub company_name: String,

    pub contact_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Annual revenue, when the lead disclosed it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    /// Service the lead is asking for (e.g., "SEO")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,

    /// Free-text message from the intake conversation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A team member eligible for lead assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    /// Lead store identifier
    pub id: i64,

    pub name: String,

    pub email: String,

    /// Ordered skill list, joined with commas in the embedded text block
    #[serde(default)]
    pub skills: Vec<String>,

    pub role: String,

    #[serde(default)]
    pub expertise_summary: String,

    /// Members flagged here get notified regardless of match rank
    #[serde(default)]
    pub always_notify: bool,
}

/// Prior analysis narrative attached to a match request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisContext {
    /// Free-text analysis produced by the analyzer service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_analysis: Option<String>,

    /// Analyzer verdict ("Yes", "No", "Maybe")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_decision: Option<String>,
}

/// Request body for the match endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub analysis_context: Option<AnalysisContext>,
}

/// A ranked team member in a match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub team_member_id: i64,

    pub name: String,

    pub email: String,

    pub role: String,

    /// Cosine similarity against the lead, conceptually in [-1, 1]
    pub relevance_score: f64,

    /// Exactly 3 short justification strings
    pub matching_reasons: Vec<String>,
}

/// Result of matching one lead against the team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub lead_id: i64,

    /// Top matches, ranked by descending relevance (at most 3)
    pub matches: Vec<MatchCandidate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_request_accepts_empty_body() {
        let request: MatchRequest = serde_json::from_str("{}").unwrap();
        assert!(request.analysis_context.is_none());
    }

    #[test]
    fn team_member_defaults_optional_fields() {
        let member: TeamMember = serde_json::from_str(
            r#"{"id": 1, "name": "Dana", "email": "dana@example.com", "role": "Consultant"}"#,
        )
        .unwrap();
        assert!(member.skills.is_empty());
        assert_eq!(member.expertise_summary, "");
        assert!(!member.always_notify);
    }

    #[test]
    fn lead_roundtrips_without_optional_fields() {
        let lead: Lead = serde_json::from_str(
            r#"{"id": 7, "company_name": "Acme", "contact_name": "Jo", "email": "jo@acme.test"}"#,
        )
        .unwrap();
        assert_eq!(lead.id, 7);
        assert!(lead.service_type.is_none());

        let json = serde_json::to_string(&lead).unwrap();
        assert!(!json.contains("service_type"));
    }
}
