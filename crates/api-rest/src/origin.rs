//! Request origin used to build photo URLs.

use axum::http::HeaderMap;
use contacts_core::BaseUrl;

/// Resolves the externally visible origin of the current request.
///
/// A configured public URL wins. Otherwise the origin is assembled from `X-Forwarded-Proto`
/// (`http` if absent), `X-Forwarded-Host` or `Host` (`localhost` if absent) and
/// `X-Forwarded-Prefix`. Header values that do not look like a scheme or host are ignored.
pub fn request_base_url(headers: &HeaderMap, configured: Option<&BaseUrl>) -> BaseUrl {
    if let Some(base) = configured {
        return base.clone();
    }

    let scheme = first_value(headers, "x-forwarded-proto")
        .filter(|s| s.eq_ignore_ascii_case("http") || s.eq_ignore_ascii_case("https"))
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_else(|| "http".to_string());

    let host = first_value(headers, "x-forwarded-host")
        .or_else(|| first_value(headers, "host"))
        .filter(|h| is_plausible_host(h))
        .unwrap_or("localhost");

    let prefix = first_value(headers, "x-forwarded-prefix")
        .map(|p| p.trim_end_matches('/'))
        .filter(|p| !p.is_empty() && !p.contains("//") && !p.contains(char::is_whitespace))
        .map(|p| {
            if p.starts_with('/') {
                p.to_string()
            } else {
                format!("/{}", p)
            }
        })
        .unwrap_or_default();

    BaseUrl::new(format!("{}://{}{}", scheme, host, prefix))
}

/// First comma-separated entry of a header; proxies append when chaining.
fn first_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn is_plausible_host(host: &str) -> bool {
    host.bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b':' | b'[' | b']'))
}
