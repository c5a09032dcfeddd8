//! Resolver and its builder

use crate::client::ResolveOptions;
use crate::endpoints::Endpoints;
use crate::lookup::LookupClient;
use crate::sources::{LogoSource, SourceRegistry};
use crate::types::LogoResult;
use std::time::Duration;
use tracing::debug;

/// Builder for configuring a [`LogoResolver`]
#[derive(Debug, Clone, Default)]
pub struct ResolverBuilder {
    options: ResolveOptions,
}

impl ResolverBuilder {
    /// Create a new builder with default endpoints and timeouts
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom User-Agent
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.options.user_agent = Some(ua.into());
        self
    }

    /// Replace all service base URLs
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.options.endpoints = endpoints;
        self
    }

    /// Timeout for suggestion lookups
    pub fn lookup_timeout(mut self, timeout: Duration) -> Self {
        self.options.lookup_timeout = timeout;
        self
    }

    /// Timeout for HEAD existence checks
    pub fn check_timeout(mut self, timeout: Duration) -> Self {
        self.options.check_timeout = timeout;
        self
    }

    /// Probe icon CDNs before asking the suggestion service
    pub fn cdn_icons(mut self, enable: bool) -> Self {
        self.options.cdn_icons = enable;
        self
    }

    /// Build the resolver
    pub fn build(self) -> LogoResolver {
        LogoResolver::with_options(self.options)
    }
}

/// Maps a free-text query to a best-effort logo URL
///
/// Stateless between calls: resolving the same query twice against
/// unchanged upstream services gives the same result.
pub struct LogoResolver {
    client: LookupClient,
    sources: SourceRegistry,
}

impl Default for LogoResolver {
    fn default() -> Self {
        Self::with_options(ResolveOptions::default())
    }
}

impl LogoResolver {
    /// Resolver with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    /// Resolver with the standard source chain for these options
    pub fn with_options(options: ResolveOptions) -> Self {
        let sources = if options.cdn_icons {
            SourceRegistry::with_cdn_icons()
        } else {
            SourceRegistry::with_defaults()
        };
        Self::with_sources(options, sources)
    }

    /// Resolver with a custom source chain
    pub fn with_sources(options: ResolveOptions, sources: SourceRegistry) -> Self {
        Self {
            client: LookupClient::new(options),
            sources,
        }
    }

    /// Append a source after the existing ones
    pub fn register(&mut self, source: Box<dyn LogoSource>) {
        self.sources.register(source);
    }

    /// Options in effect
    pub fn options(&self) -> &ResolveOptions {
        self.client.options()
    }

    /// Lookup client, for raw suggestion dumps and probes
    pub fn client(&self) -> &LookupClient {
        &self.client
    }

    /// Resolve a logo for `query`
    ///
    /// Never fails: request and parse errors are logged and the chain moves
    /// on. A blank query is `NotFound` without any request.
    pub async fn resolve(&self, query: &str) -> LogoResult {
        let query = query.trim();
        if query.is_empty() {
            debug!("Blank query, skipping lookup");
            return LogoResult::NotFound;
        }
        self.sources.resolve(query, &self.client).await
    }
}
