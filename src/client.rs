//! K-anonymity range client for the remote breach provider.
//!
//! Only the first [`PREFIX_LEN`] hex characters of the secret's SHA-1 digest
//! ever leave the process; the suffix is matched locally against the
//! returned table.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use tracing::debug;

use crate::error::ErrorKind;

/// Number of hex characters of the digest sent to the provider.
pub const PREFIX_LEN: usize = 5;

/// Mapping of uppercase hex hash suffix to breach occurrence count.
pub type SuffixTable = HashMap<String, u64>;

/// Hashes a candidate secret and splits the uppercase hex digest into
/// `(prefix, suffix)` at [`PREFIX_LEN`].
pub fn hash_secret(secret: &SecretString) -> (String, String) {
    let digest = Sha1::digest(secret.expose_secret().as_bytes());
    let hex = hex::encode_upper(digest);
    let (prefix, suffix) = hex.split_at(PREFIX_LEN);
    (prefix.to_string(), suffix.to_string())
}

/// Parses a newline-delimited `SUFFIX:COUNT` body into a [`SuffixTable`].
///
/// Hex suffixes are accepted in either case and normalized to uppercase;
/// counts are decimal. Blank lines are ignored, anything else is a
/// [`ErrorKind::Parse`].
pub fn parse_range_body(body: &str) -> Result<SuffixTable, ErrorKind> {
    let mut table = SuffixTable::new();
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (suffix, count) = line
            .split_once(':')
            .ok_or_else(|| ErrorKind::Parse(format!("missing ':' separator in {:?}", line)))?;
        if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ErrorKind::Parse(format!("non-hex suffix {:?}", suffix)));
        }
        let count: u64 = count
            .trim()
            .parse()
            .map_err(|_| ErrorKind::Parse(format!("invalid count {:?}", count)))?;
        table.insert(suffix.to_ascii_uppercase(), count);
    }
    Ok(table)
}

/// Source of range responses.
///
/// The orchestrator depends on this seam instead of a concrete HTTP client
/// so tests can substitute a fake provider.
#[async_trait]
pub trait BreachProvider: Send + Sync {
    /// Fetches the suffix table for a [`PREFIX_LEN`]-char hash prefix.
    async fn fetch_range(&self, prefix: &str) -> Result<SuffixTable, ErrorKind>;
}

/// HTTP range client implementing the `GET {base}/{prefix}` wire contract.
///
/// Does not retry: retry and timeout policy belong to the orchestrator.
pub struct RangeBreachClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl RangeBreachClient {
    /// Builds a client for the given range endpoint.
    ///
    /// `timeout` is applied at the transport level as a safety net; the
    /// orchestrator enforces its own deadline on top.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            timeout,
        })
    }

    fn range_url(&self, prefix: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), prefix)
    }

    /// Full lookup convenience: hash, fetch the range, match the suffix.
    ///
    /// Returns the number of known breach occurrences, `0` if the suffix is
    /// absent from the table.
    pub async fn lookup(&self, secret: &SecretString) -> Result<u64, ErrorKind> {
        let (prefix, suffix) = hash_secret(secret);
        let table = self.fetch_range(&prefix).await?;
        Ok(table.get(&suffix).copied().unwrap_or(0))
    }
}

#[async_trait]
impl BreachProvider for RangeBreachClient {
    async fn fetch_range(&self, prefix: &str) -> Result<SuffixTable, ErrorKind> {
        let url = self.range_url(prefix);
        debug!(%prefix, "fetching breach range");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                ErrorKind::Timeout(self.timeout)
            } else {
                ErrorKind::Provider(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ErrorKind::Provider(format!("HTTP {}", status.as_u16())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ErrorKind::Provider(e.to_string()))?;
        parse_range_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // SHA-1("password") = 5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8
    const PASSWORD_PREFIX: &str = "5BAA6";
    const PASSWORD_SUFFIX: &str = "1E4C9B93F3F0682250B6CF8331B7EE68FD8";

    #[test]
    fn test_hash_secret_known_vector() {
        let secret = SecretString::new("password".to_string().into());
        let (prefix, suffix) = hash_secret(&secret);
        assert_eq!(prefix, PASSWORD_PREFIX);
        assert_eq!(suffix, PASSWORD_SUFFIX);
        assert_eq!(prefix.len(), PREFIX_LEN);
        assert_eq!(prefix.len() + suffix.len(), 40);
    }

    #[test]
    fn test_range_url_contains_only_the_prefix() {
        let client =
            RangeBreachClient::new("https://example.test/range", Duration::from_secs(1))
                .expect("client should build");
        let secret = SecretString::new("password".to_string().into());
        let (prefix, suffix) = hash_secret(&secret);

        let url = client.range_url(&prefix);
        assert!(url.ends_with(&format!("/{}", prefix)));
        assert!(!url.contains("password"));
        assert!(!url.contains(&suffix));
    }

    #[test]
    fn test_range_url_normalizes_trailing_slash() {
        let client = RangeBreachClient::new("https://example.test/range/", Duration::from_secs(1))
            .expect("client should build");
        assert_eq!(client.range_url("ABCDE"), "https://example.test/range/ABCDE");
    }

    #[test]
    fn test_parse_range_body_valid() {
        let body = "0018A45C4D1DEF81644B54AB7F969B88D65:1\n\
                    00D4F6E8FA6EECAD2A3AA415EEC418D38EC:2\n\
                    011053FD0102E94D6AE2F8B83D76FAF94F6:3";
        let table = parse_range_body(body).expect("body should parse");
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.get("00D4F6E8FA6EECAD2A3AA415EEC418D38EC"),
            Some(&2)
        );
    }

    #[test]
    fn test_parse_range_body_lowercase_and_blank_lines() {
        let body = "\nabcdef0123:7\n\n";
        let table = parse_range_body(body).expect("body should parse");
        assert_eq!(table.get("ABCDEF0123"), Some(&7));
    }

    #[test]
    fn test_parse_range_body_empty_is_empty_table() {
        let table = parse_range_body("").expect("empty body should parse");
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_range_body_missing_separator() {
        let result = parse_range_body("0018A45C4D1DEF81644B54AB7F969B88D65");
        assert!(matches!(result, Err(ErrorKind::Parse(_))));
    }

    #[test]
    fn test_parse_range_body_non_hex_suffix() {
        let result = parse_range_body("NOTHEXZZZ:5");
        assert!(matches!(result, Err(ErrorKind::Parse(_))));
    }

    #[test]
    fn test_parse_range_body_invalid_count() {
        let result = parse_range_body("ABCDEF:many");
        assert!(matches!(result, Err(ErrorKind::Parse(_))));
    }
}
