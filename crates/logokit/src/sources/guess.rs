//! Blind domain-guess source
//!
//! Last resort: assume `"Skibidi Toilet"` lives at `skibiditoilet.com` and
//! ask the logo service whether it has a logo for that domain.

use crate::lookup::LookupClient;
use crate::query::{guess_domain, strip_leading_verb};
use crate::sources::LogoSource;
use crate::types::{LogoKind, LogoMatch, Tier};
use async_trait::async_trait;
use tracing::debug;

/// Domain-guess source
///
/// Guesses from the verb-stripped query when a leading verb is present.
/// A guess only counts when the logo service answers the HEAD with 200.
pub struct DomainGuessSource;

impl DomainGuessSource {
    /// Create a new domain-guess source
    pub fn new() -> Self {
        Self
    }
}

impl Default for DomainGuessSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogoSource for DomainGuessSource {
    fn name(&self) -> &'static str {
        "domain_guess"
    }

    fn candidate(&self, query: &str) -> Option<String> {
        guess_domain(strip_leading_verb(query).unwrap_or(query))
    }

    async fn resolve(&self, candidate: &str, client: &LookupClient) -> Option<LogoMatch> {
        let url = client.endpoints().logo(candidate);

        match client.exists(&url).await {
            Ok(()) => Some(LogoMatch {
                url,
                tier: Tier::DomainGuess,
                kind: LogoKind::GuessedDomain,
                query: candidate.to_string(),
            }),
            Err(e) => {
                debug!(url = %url, error = %e, "Domain guess rejected");
                None
            }
        }
    }
}
