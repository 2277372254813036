use anyhow::{Result, bail};
use reqwest::{Url, redirect};
use tracing::{info, warn};

use crate::config::{CONNECT_TIMEOUT, MAX_REDIRECTS, TOTAL_TIMEOUT, USER_AGENT};

/// Fetch the listing page. Any failure (transport, timeout, non-2xx) yields
/// an empty string; callers cannot tell "down" from "empty".
pub fn fetch_html(url: &str) -> String {
    match try_fetch_html(url) {
        Ok(body) => {
            info!("fetched {} ({} bytes)", url, body.len());
            body
        }
        Err(e) => {
            warn!("fetch of {} failed, continuing with empty page: {:#}", url, e);
            String::new()
        }
    }
}

fn try_fetch_html(url: &str) -> Result<String> {
    let origin = Url::parse(url)?.host_str().unwrap_or_default().to_string();

    // Redirects off the requested site stop here and surface as a 3xx.
    let redirect_policy = redirect::Policy::custom(move |attempt| {
        if attempt.previous().len() >= MAX_REDIRECTS {
            attempt.error(format!("Too many redirects (>{})", MAX_REDIRECTS))
        } else if !attempt.url().host_str().is_some_and(|host| is_same_site(&origin, host)) {
            attempt.stop()
        } else {
            attempt.follow()
        }
    });

    let client = reqwest::blocking::Client::builder()
        .redirect(redirect_policy)
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(TOTAL_TIMEOUT)
        .build()?;

    let resp = client.get(url)
        .header("User-Agent", USER_AGENT)
        .send()?;

    let status = resp.status();
    if !status.is_success() {
        bail!("unexpected status {}", status);
    }
    Ok(resp.text()?)
}

/// `host` is `origin` itself or one of its subdomains.
fn is_same_site(origin: &str, host: &str) -> bool {
    host == origin
        || host.strip_suffix(origin).is_some_and(|sub| sub.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::runtime::Runtime;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // The blocking client must not run inside the runtime, so the mock
    // server lives on the runtime and requests go out from the test thread.
    fn start_server(rt: &Runtime, mocks: Vec<Mock>) -> MockServer {
        rt.block_on(async {
            let server = MockServer::start().await;
            for mock in mocks {
                mock.mount(&server).await;
            }
            server
        })
    }

    #[test]
    fn test_same_site_and_subdomains() {
        assert!(is_same_site("muncheye.com", "muncheye.com"));
        assert!(is_same_site("muncheye.com", "www.muncheye.com"));
        assert!(!is_same_site("muncheye.com", "notmuncheye.com"));
        assert!(!is_same_site("muncheye.com", "example.com"));
    }

    #[test]
    fn test_unreachable_host_yields_empty_text() {
        assert_eq!(fetch_html("http://127.0.0.1:1/"), "");
    }

    #[test]
    fn test_server_error_yields_empty_text() {
        let rt = Runtime::new().unwrap();
        let server = start_server(&rt, vec![
            Mock::given(method("GET"))
                .and(path("/"))
                .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>")),
        ]);

        assert_eq!(fetch_html(&format!("{}/", server.uri())), "");
    }

    #[test]
    fn test_sends_user_agent() {
        let rt = Runtime::new().unwrap();
        let server = start_server(&rt, vec![
            Mock::given(method("GET"))
                .and(path("/"))
                .and(header("User-Agent", USER_AGENT))
                .respond_with(ResponseTemplate::new(200).set_body_string("<html>listing</html>")),
        ]);

        assert_eq!(fetch_html(&format!("{}/", server.uri())), "<html>listing</html>");
    }

    #[test]
    fn test_same_site_redirect_is_followed() {
        let rt = Runtime::new().unwrap();
        let server = start_server(&rt, Vec::new());
        rt.block_on(async {
            Mock::given(method("GET"))
                .and(path("/old"))
                .respond_with(
                    ResponseTemplate::new(302)
                        .insert_header("Location", format!("{}/new", server.uri()).as_str()),
                )
                .mount(&server)
                .await;
            Mock::given(method("GET"))
                .and(path("/new"))
                .respond_with(ResponseTemplate::new(200).set_body_string("moved here"))
                .mount(&server)
                .await;
        });

        assert_eq!(fetch_html(&format!("{}/old", server.uri())), "moved here");
    }

    #[test]
    fn test_cross_site_redirect_yields_empty_text() {
        let rt = Runtime::new().unwrap();
        let server = start_server(&rt, Vec::new());
        // Same listener, different host name: 127.0.0.1 -> localhost.
        let elsewhere = format!("http://localhost:{}/elsewhere", server.address().port());
        rt.block_on(async {
            Mock::given(method("GET"))
                .and(path("/"))
                .respond_with(ResponseTemplate::new(302).insert_header("Location", elsewhere.as_str()))
                .mount(&server)
                .await;
            Mock::given(method("GET"))
                .and(path("/elsewhere"))
                .respond_with(ResponseTemplate::new(200).set_body_string("offsite"))
                .mount(&server)
                .await;
        });

        assert_eq!(fetch_html(&format!("{}/", server.uri())), "");
    }
}
