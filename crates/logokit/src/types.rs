//! Core types for LogoKit

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the company-suggestion service's response array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySuggestion {
    /// Company display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// DNS domain of the company
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Service-provided logo URL (default resolution)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl CompanySuggestion {
    /// Domain, if present and meaningful
    pub fn domain(&self) -> Option<&str> {
        present(self.domain.as_deref())
    }

    /// Logo URL, if present and meaningful
    pub fn logo(&self) -> Option<&str> {
        present(self.logo.as_deref())
    }
}

/// Upstream sometimes sends empty strings or a literal "null"
fn present(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("null"))
}

/// Which step of the fallback chain produced a logo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Direct icon CDN probe (opt-in)
    CdnIcon,
    /// Suggestion lookup with the query as given
    Exact,
    /// Suggestion lookup after dropping a leading verb
    VerbStripped,
    /// `<query>.com` guessed and checked against the logo service
    DomainGuess,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::CdnIcon => write!(f, "cdn_icon"),
            Tier::Exact => write!(f, "exact"),
            Tier::VerbStripped => write!(f, "verb_stripped"),
            Tier::DomainGuess => write!(f, "domain_guess"),
        }
    }
}

/// What sort of image a resolved URL points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoKind {
    /// Logo service at 512px, verified with a HEAD request
    HighRes,
    /// Logo URL handed back by the suggestion service
    ServiceDefault,
    /// Favicon service URL, not verified
    Favicon,
    /// Logo service URL for a guessed domain, verified
    GuessedDomain,
    /// SVG icon from a public icon CDN, verified
    CdnIcon,
}

impl fmt::Display for LogoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoKind::HighRes => write!(f, "high_res"),
            LogoKind::ServiceDefault => write!(f, "service_default"),
            LogoKind::Favicon => write!(f, "favicon"),
            LogoKind::GuessedDomain => write!(f, "guessed_domain"),
            LogoKind::CdnIcon => write!(f, "cdn_icon"),
        }
    }
}

/// A resolved logo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoMatch {
    /// Candidate logo image URL
    pub url: String,
    /// Tier that produced the URL
    pub tier: Tier,
    /// Kind of image
    pub kind: LogoKind,
    /// Query text used at that tier
    pub query: String,
}

/// Outcome of [`LogoResolver::resolve`](crate::LogoResolver::resolve)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LogoResult {
    /// A candidate logo was found
    Found(LogoMatch),
    /// Every tier came up empty
    NotFound,
}

impl LogoResult {
    /// Resolved URL, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            LogoResult::Found(m) => Some(&m.url),
            LogoResult::NotFound => None,
        }
    }

    /// True if a logo was found
    pub fn is_found(&self) -> bool {
        matches!(self, LogoResult::Found(_))
    }

    /// The match, if any
    pub fn as_match(&self) -> Option<&LogoMatch> {
        match self {
            LogoResult::Found(m) => Some(m),
            LogoResult::NotFound => None,
        }
    }
}

/// Result of a single diagnostic request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeReport {
    /// Probed URL
    pub url: String,

    /// "HEAD" or "GET"
    pub method: String,

    /// HTTP status code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,

    /// Content-Type header value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Content-Length header value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_length: Option<u64>,

    /// Error message if the request failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeReport {
    /// True for an HTTP 200 answer
    pub fn is_ok(&self) -> bool {
        self.status_code == Some(200)
    }
}

/// Logo availability for one domain across both image services
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainReport {
    /// Domain as checked (trimmed)
    pub domain: String,
    /// HEAD against the 512px logo service URL
    pub high_res: ProbeReport,
    /// GET against the favicon service URL
    pub favicon: ProbeReport,
}
