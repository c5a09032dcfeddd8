//! Entry points for LogoKit
//!
//! This module provides the one-shot functions and the options they take.
//! The resolution logic itself lives in the sources in the
//! [`sources`](crate::sources) module.

use crate::endpoints::Endpoints;
use crate::lookup::LookupClient;
use crate::resolver::LogoResolver;
use crate::types::{DomainReport, LogoResult};
use std::time::Duration;

/// Timeout for suggestion lookups
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for HEAD existence checks and diagnostic probes
pub const DEFAULT_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

/// Resolver options that can be configured via [`ResolverBuilder`](crate::ResolverBuilder)
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Custom User-Agent
    pub user_agent: Option<String>,
    /// Service base URLs
    pub endpoints: Endpoints,
    /// Timeout for the suggestion lookup
    pub lookup_timeout: Duration,
    /// Timeout for existence checks
    pub check_timeout: Duration,
    /// Probe icon CDNs before the suggestion service
    pub cdn_icons: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            user_agent: None,
            endpoints: Endpoints::default(),
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            check_timeout: DEFAULT_CHECK_TIMEOUT,
            cdn_icons: false,
        }
    }
}

/// Resolve a logo for `query` with default options
///
/// For custom options, use [`resolve_with_options`] or build a
/// [`LogoResolver`] once and reuse it.
pub async fn resolve(query: &str) -> LogoResult {
    resolve_with_options(query, ResolveOptions::default()).await
}

/// Resolve a logo for `query` with custom options
pub async fn resolve_with_options(query: &str, options: ResolveOptions) -> LogoResult {
    LogoResolver::with_options(options).resolve(query).await
}

/// Probe both image services for `domain`
///
/// Sends a HEAD to the 512px logo URL and a GET to the favicon URL and
/// reports what came back. Never fails; request errors land in the report.
pub async fn check_domain(domain: &str, options: &ResolveOptions) -> DomainReport {
    let client = LookupClient::new(options.clone());
    let endpoints = client.endpoints();
    let domain = domain.trim();

    let high_res = client
        .probe(reqwest::Method::HEAD, &endpoints.high_res_logo(domain))
        .await;
    let favicon = client
        .probe(reqwest::Method::GET, &endpoints.favicon(domain))
        .await;

    DomainReport {
        domain: domain.to_string(),
        high_res,
        favicon,
    }
}
