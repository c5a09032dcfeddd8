//! LogoKit - best-effort organization logo resolution
//!
//! This crate maps a free-text topic or course title ("Learn Python",
//! "Nike") to a representative logo image URL by asking a company
//! autocomplete service and falling back through a fixed chain.
//!
//! ## Source System
//!
//! Each tier of the chain is a [`LogoSource`]. The [`SourceRegistry`] asks
//! sources in priority order and returns the first match.
//!
//! Built-in sources:
//! - [`SuggestionSource`] - autocomplete lookup, exact and verb-stripped
//! - [`DomainGuessSource`] - `<query>.com` checked against the logo service
//! - [`CdnIconSource`] - public SVG icon CDNs (opt-in)
//!
//! Resolution never fails. Every request error is logged and treated as
//! "no logo from this source"; the only terminal outcome is
//! [`LogoResult::NotFound`].

pub mod client;
pub mod endpoints;
mod error;
mod lookup;
pub mod query;
mod resolver;
pub mod sources;
mod types;

pub use client::{
    check_domain, resolve, resolve_with_options, ResolveOptions, DEFAULT_CHECK_TIMEOUT,
    DEFAULT_LOOKUP_TIMEOUT,
};
pub use endpoints::{CdnEndpoints, Endpoints};
pub use error::LookupError;
pub use lookup::LookupClient;
pub use query::{guess_domain, strip_leading_verb, LEADING_VERBS};
pub use resolver::{LogoResolver, ResolverBuilder};
pub use sources::{CdnIconSource, DomainGuessSource, LogoSource, SourceRegistry, SuggestionSource};
pub use types::{
    CompanySuggestion, DomainReport, LogoKind, LogoMatch, LogoResult, ProbeReport, Tier,
};

/// Default User-Agent string (desktop browser)
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
