//! Lead/team match orchestration
//!
//! Fetches the lead and the full team-member set, embeds both sides, ranks
//! members by cosine similarity against the lead, and attaches synthesized
//! reasons to the finalists. Every team member is a candidate on every call,
//! so each request costs O(N) oracle round trips.

use std::sync::Arc;

use leadflow_core::{
    AnalysisContext, Lead, LeadflowResult, MatchCandidate, MatchResult, TeamMember,
};
use leadflow_store::LeadStore;
use tracing::{info, instrument, warn};

use crate::embedding::EmbeddingGenerator;
use crate::oracle::TextOracle;
use crate::reasons::synthesize_reasons;
use crate::similarity::rank_candidates;

/// Maximum number of matches returned per lead
pub const TOP_MATCHES: usize = 3;

/// Service for matching leads to team members by semantic relevance
pub struct MatcherService {
    store: Arc<dyn LeadStore>,
    oracle: Arc<dyn TextOracle>,
    embedder: EmbeddingGenerator,
}

impl MatcherService {
    /// Create a new matcher service
    ///
    /// The store and oracle are injected so that callers own client
    /// construction and tests can substitute scripted doubles.
    pub fn new(store: Arc<dyn LeadStore>, oracle: Arc<dyn TextOracle>) -> Self {
        let embedder = EmbeddingGenerator::new(Arc::clone(&oracle));
        Self {
            store,
            oracle,
            embedder,
        }
    }

    /// Override the embedding dimensionality
    pub fn with_embedding_dimension(mut self, dimension: usize) -> Self {
        self.embedder = self.embedder.with_dimension(dimension);
        self
    }

    /// Match a lead to the team and return the ranked result
    #[instrument(skip(self, analysis_context))]
    pub async fn match_lead_to_team(
        &self,
        lead_id: i64,
        analysis_context: Option<&AnalysisContext>,
    ) -> LeadflowResult<MatchResult> {
        let matches = self.find_matches(lead_id, analysis_context).await?;

        Ok(MatchResult { lead_id, matches })
    }

    /// Find the top team members for a lead, ranked by relevance
    async fn find_matches(
        &self,
        lead_id: i64,
        analysis_context: Option<&AnalysisContext>,
    ) -> LeadflowResult<Vec<MatchCandidate>> {
        let lead = self.store.get_lead(lead_id).await?;
        let members = self.store.list_team_members().await?;
        info!(
            "Matching lead {} against {} team member(s)",
            lead_id,
            members.len()
        );

        let lead_text = lead_text(&lead, analysis_context);

        // No lead embedding means no ranking is possible; fail before any
        // member embeddings are attempted.
        let lead_embedding = self.embedder.embed(&lead_text).await?;

        // A member whose embedding cannot be generated is excluded from
        // ranking; the rest of the request proceeds.
        let mut candidates = Vec::with_capacity(members.len());
        let mut texts = Vec::with_capacity(members.len());
        let mut embeddings = Vec::with_capacity(members.len());
        for member in members {
            let text = member_text(&member);
            match self.embedder.embed(&text).await {
                Ok(embedding) => {
                    candidates.push(member);
                    texts.push(text);
                    embeddings.push(embedding);
                }
                Err(e) => {
                    warn!(
                        "Excluding team member {} from lead {} matching: {}",
                        member.id, lead_id, e
                    );
                }
            }
        }

        let ranked = rank_candidates(&lead_embedding, &embeddings, TOP_MATCHES)?;

        // Reasons are generated for finalists only, bounding oracle cost.
        let mut matches = Vec::with_capacity(ranked.len());
        for scored in ranked {
            let member = &candidates[scored.index];
            let reasons =
                synthesize_reasons(self.oracle.as_ref(), &lead_text, &texts[scored.index]).await;

            matches.push(MatchCandidate {
                team_member_id: member.id,
                name: member.name.clone(),
                email: member.email.clone(),
                role: member.role.clone(),
                relevance_score: scored.score,
                matching_reasons: reasons,
            });
        }

        Ok(matches)
    }
}

/// Canonical text block for a lead, optionally extended with the analyzer's
/// narrative
fn lead_text(lead: &Lead, analysis_context: Option<&AnalysisContext>) -> String {
    let mut text = format!(
        "Company: {}\nIndustry: {}\nService Needed: {}\nDescription: {}\nRevenue: {}",
        lead.company_name,
        lead.industry.as_deref().unwrap_or(""),
        lead.service_type.as_deref().unwrap_or(""),
        lead.message.as_deref().unwrap_or(""),
        lead.revenue.map(|r| r.to_string()).unwrap_or_default(),
    );

    if let Some(analysis) = analysis_context.and_then(|c| c.llm_analysis.as_deref()) {
        text.push_str(&format!("\nAnalysis: {}", analysis));
    }

    text
}

/// Canonical text block for a team member
fn member_text(member: &TeamMember) -> String {
    format!(
        "Name: {}\nRole: {}\nSkills: {}\nExpertise: {}",
        member.name,
        member.role,
        member.skills.join(", "),
        member.expertise_summary,
    )
}
