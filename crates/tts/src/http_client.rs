use std::{sync::OnceLock, time::Duration};

use reqwest::header::{CONNECTION, HeaderMap, HeaderValue};

/// Common HTTP client to reuse connections across async synthesis backends
pub fn http_client() -> reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            reqwest::Client::builder()
                .timeout(Duration::from_secs(120))
                .pool_idle_timeout(Some(Duration::from_secs(5)))
                .tcp_nodelay(true)
                .tcp_keepalive(Some(Duration::from_secs(60)))
                .default_headers(default_headers())
                .build()
                .expect("Failed to build default HTTP client")
        })
        .clone()
}

/// Blocking twin of [`http_client`] for synthesis calls running on
/// dedicated worker threads
///
/// Must only be touched from a plain OS thread; a blocking send on the
/// async runtime would stall it.
pub fn blocking_http_client() -> reqwest::blocking::Client {
    static CLIENT: OnceLock<reqwest::blocking::Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(120))
                .pool_idle_timeout(Some(Duration::from_secs(5)))
                .tcp_nodelay(true)
                .tcp_keepalive(Some(Duration::from_secs(60)))
                .default_headers(default_headers())
                .build()
                .expect("Failed to build blocking HTTP client")
        })
        .clone()
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers
}
