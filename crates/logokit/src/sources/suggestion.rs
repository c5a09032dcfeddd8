//! Company-suggestion source
//!
//! Asks the autocomplete service about the query and turns the first
//! suggestion into a logo URL. Used twice in the default chain: once with the
//! query as given, once with a leading verb stripped.

use crate::lookup::LookupClient;
use crate::query::strip_leading_verb;
use crate::sources::LogoSource;
use crate::types::{CompanySuggestion, LogoKind, LogoMatch, Tier};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Suggestion-service source
pub struct SuggestionSource {
    tier: Tier,
}

impl SuggestionSource {
    /// Look up the query as given
    pub fn exact() -> Self {
        Self { tier: Tier::Exact }
    }

    /// Look up the query with one leading verb removed
    ///
    /// Does not apply to queries that start with no recognised verb.
    pub fn verb_stripped() -> Self {
        Self {
            tier: Tier::VerbStripped,
        }
    }

    /// Pick a logo URL from a suggestion
    ///
    /// Priority: verified 512px logo, then the service's own logo URL, then
    /// an unverified favicon URL. The first that applies wins.
    async fn pick(
        &self,
        suggestion: &CompanySuggestion,
        query: &str,
        client: &LookupClient,
    ) -> Option<LogoMatch> {
        let endpoints = client.endpoints();
        let found = |url: String, kind: LogoKind| LogoMatch {
            url,
            tier: self.tier,
            kind,
            query: query.to_string(),
        };

        if let Some(domain) = suggestion.domain() {
            let high_res = endpoints.high_res_logo(domain);
            match client.exists(&high_res).await {
                Ok(()) => return Some(found(high_res, LogoKind::HighRes)),
                Err(e) => debug!(url = %high_res, error = %e, "High-res logo check failed"),
            }
        }

        if let Some(logo) = suggestion.logo() {
            return Some(found(logo.to_string(), LogoKind::ServiceDefault));
        }

        suggestion
            .domain()
            .map(|domain| found(endpoints.favicon(domain), LogoKind::Favicon))
    }
}

#[async_trait]
impl LogoSource for SuggestionSource {
    fn name(&self) -> &'static str {
        match self.tier {
            Tier::VerbStripped => "suggestion_verb_stripped",
            _ => "suggestion_exact",
        }
    }

    fn candidate(&self, query: &str) -> Option<String> {
        let candidate = match self.tier {
            Tier::VerbStripped => strip_leading_verb(query)?,
            _ => query,
        };
        if candidate.trim().is_empty() {
            return None;
        }
        Some(candidate.to_string())
    }

    async fn resolve(&self, candidate: &str, client: &LookupClient) -> Option<LogoMatch> {
        let suggestions = match client.suggest(candidate).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                warn!(query = candidate, error = %e, "Suggestion lookup failed");
                return None;
            }
        };

        let Some(first) = suggestions.first() else {
            debug!(query = candidate, "No suggestions");
            return None;
        };

        debug!(
            query = candidate,
            name = ?first.name,
            domain = ?first.domain,
            logo = ?first.logo,
            "Using first suggestion"
        );
        self.pick(first, candidate, client).await
    }
}
