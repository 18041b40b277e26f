// src/core/net.rs
//
// Blocking HTTP with timeouts. The schedule documents and the vision API
// both sit behind TLS, so this wraps reqwest instead of raw TCP.

use std::{error::Error, time::Duration};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT, VISION_TIMEOUT_SECS};

fn client(timeout_secs: u64) -> Result<reqwest::blocking::Client, Box<dyn Error>> {
    let c = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    Ok(c)
}

pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    let resp = client(HTTP_TIMEOUT_SECS)?.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.text()?)
}

pub fn http_get_bytes(url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let resp = client(HTTP_TIMEOUT_SECS)?.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.bytes()?.to_vec())
}

/// POST a JSON body with bearer auth, returning the parsed JSON response.
pub fn post_json(
    url: &str,
    bearer: &str,
    body: &serde_json::Value,
) -> Result<serde_json::Value, Box<dyn Error>> {
    let resp = client(VISION_TIMEOUT_SECS)?
        .post(url)
        .bearer_auth(bearer)
        .json(body)
        .send()?;
    let status = resp.status();
    if !status.is_success() {
        let detail = resp.text().unwrap_or_default();
        return Err(format!("HTTP error: {} {} {}", status, url, detail).into());
    }
    Ok(resp.json()?)
}
