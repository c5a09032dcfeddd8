//! Logo source system for tiered resolution
//!
//! Design: each source is one tier of the fallback chain. SourceRegistry
//! asks sources in registration order and stops at the first match.

mod cdn;
mod guess;
mod suggestion;

pub use cdn::CdnIconSource;
pub use guess::DomainGuessSource;
pub use suggestion::SuggestionSource;

use crate::lookup::LookupClient;
use crate::types::{LogoMatch, LogoResult};
use async_trait::async_trait;
use tracing::{debug, info};

/// Trait for one tier of the logo fallback chain
///
/// Each source declares what text it would look up via `candidate()` and
/// performs the lookup via `resolve()`. Sources must swallow their own
/// failures: a failed request means "no logo from this source".
#[async_trait]
pub trait LogoSource: Send + Sync {
    /// Unique identifier for this source (for logging/debugging)
    fn name(&self) -> &'static str;

    /// Text this source would look up for a trimmed query
    ///
    /// `None` means the source does not apply and is skipped without any
    /// network traffic.
    fn candidate(&self, query: &str) -> Option<String>;

    /// Look up a logo for the candidate text
    ///
    /// Called only if `candidate()` returned `Some`.
    async fn resolve(&self, candidate: &str, client: &LookupClient) -> Option<LogoMatch>;
}

/// Registry of sources that runs the fallback chain
///
/// Maintains an ordered list of sources. Resolution walks the list and
/// returns the first match.
pub struct SourceRegistry {
    sources: Vec<Box<dyn LogoSource>>,
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Create a registry with the standard three tiers
    ///
    /// In order of priority:
    /// 1. SuggestionSource (exact query)
    /// 2. SuggestionSource (leading verb stripped)
    /// 3. DomainGuessSource
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SuggestionSource::exact()));
        registry.register(Box::new(SuggestionSource::verb_stripped()));
        registry.register(Box::new(DomainGuessSource::new()));
        registry
    }

    /// Standard tiers preceded by the icon CDN probe
    pub fn with_cdn_icons() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CdnIconSource::new()));
        for source in Self::with_defaults().sources {
            registry.register(source);
        }
        registry
    }

    /// Register a source
    ///
    /// Sources are asked in registration order, so register preferred
    /// sources first.
    pub fn register(&mut self, source: Box<dyn LogoSource>) {
        self.sources.push(source);
    }

    /// Source names in priority order
    pub fn names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Run the chain for an already trimmed query
    pub async fn resolve(&self, query: &str, client: &LookupClient) -> LogoResult {
        for source in &self.sources {
            let Some(candidate) = source.candidate(query) else {
                debug!(source = source.name(), query, "Source does not apply");
                continue;
            };

            debug!(source = source.name(), candidate = %candidate, "Trying source");
            if let Some(found) = source.resolve(&candidate, client).await {
                info!(
                    source = source.name(),
                    tier = %found.tier,
                    kind = %found.kind,
                    url = %found.url,
                    "Resolved logo"
                );
                return LogoResult::Found(found);
            }
        }

        info!(query, "No logo found");
        LogoResult::NotFound
    }
}
