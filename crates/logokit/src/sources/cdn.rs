//! Icon CDN source
//!
//! Probes public SVG icon sets (Devicon, VectorLogoZone, FlagCDN, Simple
//! Icons) for a slug derived from the query. Off by default; enable with
//! [`ResolverBuilder::cdn_icons`](crate::ResolverBuilder::cdn_icons).

use crate::lookup::LookupClient;
use crate::query::icon_slug;
use crate::sources::LogoSource;
use crate::types::{LogoKind, LogoMatch, Tier};
use async_trait::async_trait;
use tracing::debug;

/// Icon CDN source
pub struct CdnIconSource;

impl CdnIconSource {
    /// Create a new icon CDN source
    pub fn new() -> Self {
        Self
    }
}

impl Default for CdnIconSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogoSource for CdnIconSource {
    fn name(&self) -> &'static str {
        "cdn_icon"
    }

    fn candidate(&self, query: &str) -> Option<String> {
        icon_slug(query)
    }

    async fn resolve(&self, candidate: &str, client: &LookupClient) -> Option<LogoMatch> {
        for url in client.endpoints().cdn.candidates(candidate) {
            match client.exists(&url).await {
                Ok(()) => {
                    return Some(LogoMatch {
                        url,
                        tier: Tier::CdnIcon,
                        kind: LogoKind::CdnIcon,
                        query: candidate.to_string(),
                    })
                }
                Err(e) => debug!(url = %url, error = %e, "Icon not available"),
            }
        }
        None
    }
}
