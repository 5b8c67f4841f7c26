use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};

const REQUEST_TIMEOUT_SECS: u64 = 10;
const AUTH_HEADER: &str = "X-Auth-Token";

static CLIENT: OnceCell<Client> = OnceCell::new();

pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")
    })
}

/// GETs `url` and returns the body. Any non-success status is an error that
/// carries the status and body text.
pub fn fetch_text(client: &Client, url: &str, token: Option<&str>) -> Result<String> {
    let mut req = client
        .get(url)
        .header(USER_AGENT, "laliga_terminal")
        .header(ACCEPT, "application/json");
    if let Some(token) = token {
        req = req.header(AUTH_HEADER, token);
    }

    let resp = req.send().context("request failed")?;
    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow::anyhow!("http {}: {}", status, body));
    }
    Ok(body)
}
