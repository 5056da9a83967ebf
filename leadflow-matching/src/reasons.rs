//! Match-reason synthesis
//!
//! Asks the oracle for three match-specific justifications. This path never
//! fails outward: a match result has to stay usable by the notification step
//! even when the model misbehaves, so every failure degrades to a fixed
//! generic triple.

use leadflow_core::{LeadflowError, LeadflowResult};
use tracing::debug;

use crate::extract::extract_json;
use crate::oracle::TextOracle;

/// Number of justification strings per match
pub const REASON_COUNT: usize = 3;

const FALLBACK_REASONS: [&str; REASON_COUNT] = [
    "Relevant expertise match",
    "Similar project experience",
    "Compatible skill set",
];

/// The generic justification triple used when synthesis fails
pub fn fallback_reasons() -> Vec<String> {
    FALLBACK_REASONS.iter().map(|r| r.to_string()).collect()
}

/// Generate exactly [`REASON_COUNT`] justification strings for a match
pub async fn synthesize_reasons(
    oracle: &dyn TextOracle,
    lead_text: &str,
    member_text: &str,
) -> Vec<String> {
    match try_synthesize(oracle, lead_text, member_text).await {
        Ok(reasons) => reasons,
        Err(e) => {
            debug!("Falling back to generic match reasons: {}", e);
            fallback_reasons()
        }
    }
}

async fn try_synthesize(
    oracle: &dyn TextOracle,
    lead_text: &str,
    member_text: &str,
) -> LeadflowResult<Vec<String>> {
    let prompt = format!(
        "Lead information:\n{}\n\n\
         Team member information:\n{}\n\n\
         Provide exactly {} specific reasons why this team member would be a good match for this lead.\n\
         Each reason should be brief (1-2 sentences) and specific to this particular match.\n\
         Return only a JSON list of strings, with each string being a reason.",
        lead_text, member_text, REASON_COUNT
    );

    let raw = oracle.complete(&prompt).await?;
    let payload = extract_json(&raw)?;

    let reasons: Vec<String> = serde_json::from_str(&payload)
        .map_err(|e| LeadflowError::parse(format!("Failed to parse match reasons: {}", e)))?;

    // "Exactly 3" is the contract; a list of any other length degrades whole
    if reasons.len() != REASON_COUNT {
        return Err(LeadflowError::parse(format!(
            "Expected {} reasons, got {}",
            REASON_COUNT,
            reasons.len()
        )));
    }

    Ok(reasons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    enum Script {
        Reply(String),
        Fail,
    }

    struct ScriptedOracle(Script);

    #[async_trait]
    impl TextOracle for ScriptedOracle {
        async fn complete(&self, _prompt: &str) -> LeadflowResult<String> {
            match &self.0 {
                Script::Reply(text) => Ok(text.clone()),
                Script::Fail => Err(LeadflowError::api("model unavailable")),
            }
        }
    }

    #[tokio::test]
    async fn parses_fenced_reason_list() {
        let oracle = ScriptedOracle(Script::Reply(
            "```json\n[\"Knows SEO\", \"Ran similar accounts\", \"Industry overlap\"]\n```"
                .to_string(),
        ));

        let reasons = synthesize_reasons(&oracle, "lead", "member").await;
        assert_eq!(
            reasons,
            vec!["Knows SEO", "Ran similar accounts", "Industry overlap"]
        );
    }

    #[tokio::test]
    async fn oracle_failure_degrades_to_fallback() {
        let oracle = ScriptedOracle(Script::Fail);
        let reasons = synthesize_reasons(&oracle, "lead", "member").await;
        assert_eq!(reasons, fallback_reasons());
    }

    #[tokio::test]
    async fn unparsable_reply_degrades_to_fallback() {
        let oracle = ScriptedOracle(Script::Reply("Happy to help! Just ask.".to_string()));
        let reasons = synthesize_reasons(&oracle, "lead", "member").await;
        assert_eq!(reasons, fallback_reasons());
    }

    #[tokio::test]
    async fn wrong_count_degrades_to_fallback() {
        let oracle = ScriptedOracle(Script::Reply("[\"only\", \"two\"]".to_string()));
        let reasons = synthesize_reasons(&oracle, "lead", "member").await;
        assert_eq!(reasons, fallback_reasons());
        assert_eq!(reasons.len(), REASON_COUNT);
    }
}
