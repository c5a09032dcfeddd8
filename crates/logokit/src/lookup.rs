//! HTTP plumbing shared by every logo source

use crate::client::ResolveOptions;
use crate::endpoints::Endpoints;
use crate::error::LookupError;
use crate::types::{CompanySuggestion, ProbeReport};
use crate::DEFAULT_USER_AGENT;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT};
use reqwest::redirect::Policy;
use reqwest::{Method, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Client for the suggestion, logo and icon services
///
/// Each request builds its own client with the timeout that request needs:
/// suggestion lookups get the longer lookup timeout, HEAD checks the short
/// check timeout. HEAD checks never follow redirects, so a 3xx is a miss.
#[derive(Debug, Clone)]
pub struct LookupClient {
    options: ResolveOptions,
}

impl LookupClient {
    pub fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.options.endpoints
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    fn http(
        &self,
        timeout: Duration,
        follow_redirects: bool,
    ) -> Result<reqwest::Client, LookupError> {
        let user_agent = self
            .options
            .user_agent
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT);

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
        );

        let redirect = if follow_redirects {
            Policy::default()
        } else {
            Policy::none()
        };

        reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(timeout)
            .timeout(timeout)
            .redirect(redirect)
            .build()
            .map_err(LookupError::ClientBuildError)
    }

    /// Ask the suggestion service about `query`
    ///
    /// Returns the suggestions in service order. Anything other than a 200
    /// with a JSON array body is an error.
    pub async fn suggest(&self, query: &str) -> Result<Vec<CompanySuggestion>, LookupError> {
        let url = self.options.endpoints.suggest(query)?;
        let client = self.http(self.options.lookup_timeout, true)?;

        debug!(url = %url, "Requesting suggestions");

        let response = client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(LookupError::from_reqwest)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(LookupError::UpstreamError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(LookupError::from_reqwest)?;
        parse_suggestions(&body)
    }

    /// HEAD `url` and succeed only on exactly HTTP 200
    ///
    /// Redirects are not followed; a 3xx is reported as `UpstreamError`.
    pub async fn exists(&self, url: &str) -> Result<(), LookupError> {
        let client = self.http(self.options.check_timeout, false)?;

        let response = client
            .head(url)
            .send()
            .await
            .map_err(LookupError::from_reqwest)?;

        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(LookupError::UpstreamError {
                status: status.as_u16(),
            }),
        }
    }

    /// Send a diagnostic request and describe the answer
    ///
    /// HEAD probes report the first answer as-is; GET probes follow redirects.
    pub async fn probe(&self, method: Method, url: &str) -> ProbeReport {
        let mut report = ProbeReport {
            url: url.to_string(),
            method: method.to_string(),
            ..Default::default()
        };

        let follow_redirects = method != Method::HEAD;
        let client = match self.http(self.options.check_timeout, follow_redirects) {
            Ok(client) => client,
            Err(e) => {
                report.error = Some(e.to_string());
                return report;
            }
        };

        match client.request(method, url).send().await {
            Ok(response) => {
                let headers = response.headers();
                report.status_code = Some(response.status().as_u16());
                report.content_type = headers
                    .get(CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .map(|s| s.to_string());
                report.content_length = headers
                    .get(CONTENT_LENGTH)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse().ok());
            }
            Err(e) => {
                report.error = Some(LookupError::from_reqwest(e).to_string());
            }
        }

        report
    }
}

/// Parse the suggestion service's JSON array
fn parse_suggestions(body: &str) -> Result<Vec<CompanySuggestion>, LookupError> {
    if body.trim().is_empty() {
        return Err(LookupError::MalformedResponse("empty body".to_string()));
    }
    serde_json::from_str(body).map_err(|e| LookupError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suggestions() {
        let parsed =
            parse_suggestions(r#"[{"name":"Python","domain":"python.org","logo":null}]"#).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].domain(), Some("python.org"));

        assert!(parse_suggestions("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_suggestions_malformed() {
        assert!(matches!(
            parse_suggestions(""),
            Err(LookupError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_suggestions("<html>rate limited</html>"),
            Err(LookupError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_suggestions(r#"{"error":"bad"}"#),
            Err(LookupError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_suggest_invalid_endpoint() {
        let options = ResolveOptions {
            endpoints: Endpoints {
                suggest_url: "::not-a-url::".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let client = LookupClient::new(options);
        let result = client.suggest("Nike").await;
        assert!(matches!(result, Err(LookupError::InvalidUrl(_))));
    }
}
