//! Service URL templates
//!
//! Every external URL the resolver touches is built here. Base URLs are plain
//! fields so tests can point them at a local mock server.

use crate::error::LookupError;
use url::Url;

/// Company-suggestion (autocomplete) endpoint
pub const DEFAULT_SUGGEST_URL: &str = "https://autocomplete.clearbit.com/v1/companies/suggest";

/// Logo service base, `{base}/{domain}`
pub const DEFAULT_LOGO_BASE: &str = "https://logo.clearbit.com";

/// Favicon service base
pub const DEFAULT_FAVICON_BASE: &str = "https://t1.gstatic.com/faviconV2";

/// Pixel size requested for high-resolution logos and favicons
pub const HIGH_RES_SIZE: u32 = 512;

/// Devicon SVG set on jsDelivr, `{base}/{slug}/{slug}-original.svg`
pub const DEFAULT_DEVICON_BASE: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";
/// VectorLogoZone, `{base}/{slug}/{slug}-icon.svg`
pub const DEFAULT_VECTORLOGO_BASE: &str = "https://www.vectorlogo.zone/logos";
/// FlagCDN country flags, `{base}/{code}.svg`
pub const DEFAULT_FLAGCDN_BASE: &str = "https://flagcdn.com";
/// Simple Icons (monochrome) on jsDelivr, `{base}/{slug}.svg`
pub const DEFAULT_SIMPLEICONS_BASE: &str = "https://cdn.jsdelivr.net/npm/simple-icons@v14/icons";

/// Base URLs for every service the resolver talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub suggest_url: String,
    pub logo_base: String,
    pub favicon_base: String,
    pub cdn: CdnEndpoints,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            suggest_url: DEFAULT_SUGGEST_URL.to_string(),
            logo_base: DEFAULT_LOGO_BASE.to_string(),
            favicon_base: DEFAULT_FAVICON_BASE.to_string(),
            cdn: CdnEndpoints::default(),
        }
    }
}

impl Endpoints {
    /// Point every service at one base URL (used with mock servers)
    ///
    /// Paths mirror the real services: `/v1/companies/suggest`, `/logo`,
    /// `/faviconV2`, `/devicon`, `/vectorlogo`, `/flagcdn`, `/simpleicons`.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            suggest_url: format!("{}/v1/companies/suggest", base),
            logo_base: format!("{}/logo", base),
            favicon_base: format!("{}/faviconV2", base),
            cdn: CdnEndpoints {
                devicon_base: format!("{}/devicon", base),
                vectorlogo_base: format!("{}/vectorlogo", base),
                flagcdn_base: format!("{}/flagcdn", base),
                simpleicons_base: format!("{}/simpleicons", base),
            },
        }
    }

    /// Suggestion lookup URL with the query form-encoded
    pub fn suggest(&self, query: &str) -> Result<Url, LookupError> {
        Url::parse_with_params(&self.suggest_url, &[("query", query)])
            .map_err(|e| LookupError::InvalidUrl(format!("{}: {}", self.suggest_url, e)))
    }

    /// Logo service URL at the service's default size
    pub fn logo(&self, domain: &str) -> String {
        format!("{}/{}", self.logo_base.trim_end_matches('/'), domain)
    }

    /// Logo service URL at [`HIGH_RES_SIZE`]
    pub fn high_res_logo(&self, domain: &str) -> String {
        format!("{}?size={}", self.logo(domain), HIGH_RES_SIZE)
    }

    /// Favicon service URL for a domain
    pub fn favicon(&self, domain: &str) -> String {
        format!(
            "{}?client=SOCIAL&type=FAVICON&fallback_opts=TYPE,SIZE,URL&url=http://{}&size={}",
            self.favicon_base, domain, HIGH_RES_SIZE
        )
    }
}

/// Base URLs for the public SVG icon CDNs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdnEndpoints {
    pub devicon_base: String,
    pub vectorlogo_base: String,
    pub flagcdn_base: String,
    pub simpleicons_base: String,
}

impl Default for CdnEndpoints {
    fn default() -> Self {
        Self {
            devicon_base: DEFAULT_DEVICON_BASE.to_string(),
            vectorlogo_base: DEFAULT_VECTORLOGO_BASE.to_string(),
            flagcdn_base: DEFAULT_FLAGCDN_BASE.to_string(),
            simpleicons_base: DEFAULT_SIMPLEICONS_BASE.to_string(),
        }
    }
}

impl CdnEndpoints {
    /// Icon URLs to try for a slug, best first
    ///
    /// Colored icons come before the monochrome Simple Icons set. Flags are
    /// only tried for two-letter slugs (country codes).
    pub fn candidates(&self, slug: &str) -> Vec<String> {
        let mut urls = vec![
            format!("{}/{slug}/{slug}-original.svg", self.devicon_base),
            format!("{}/{slug}/{slug}-icon.svg", self.vectorlogo_base),
            format!("{}/{slug}/{slug}-official.svg", self.vectorlogo_base),
        ];
        if slug.len() == 2 {
            urls.push(format!("{}/{slug}.svg", self.flagcdn_base));
        }
        urls.push(format!("{}/{slug}.svg", self.simpleicons_base));
        urls
    }
}
