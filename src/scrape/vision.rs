// src/scrape/vision.rs
//
// Vision-model extraction: one schedule image in, family-swim sessions out.
// The model is asked for bare JSON; code fences show up anyway, so the
// parser tolerates them.

use std::error::Error;

use serde::Deserialize;
use serde_json::json;

use crate::{
    config::consts::{VISION_API_URL, VISION_MAX_TOKENS},
    core::net,
    schedule::Session,
};

const SYSTEM_PROMPT: &str = "\
You are an expert at reading San Francisco Parks pool schedules. Analyze \
this schedule image and extract family swim hours.

Look for terms like:
- \"Family Swim\"
- \"Open Swim\"
- \"Recreation Swim\"
- \"Public Swim\"
- \"General Swim\"
- Any sessions open to families with children

Return ONLY a JSON object with this structure:
{
  \"poolName\": \"Name of the pool\",
  \"sessions\": [
    {
      \"day\": 0-6 (0=Monday, 1=Tuesday, etc.),
      \"startTime\": \"HH:MM\" (24-hour format),
      \"endTime\": \"HH:MM\" (24-hour format),
      \"sessionType\": \"Family Swim\"
    }
  ]
}

If no family swim sessions are found, return an empty sessions array.";

#[derive(Debug)]
pub struct Extraction {
    pub pool_name: String,
    pub sessions: Vec<Session>,
}

/// What the model answers with. Session entries carry no pool field;
/// that's stamped on afterwards.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExtraction {
    #[serde(default)]
    pool_name: Option<String>,
    #[serde(default)]
    sessions: Vec<RawSession>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSession {
    day: u8,
    start_time: String,
    end_time: String,
    #[serde(default)]
    session_type: Option<String>,
}

/// Submit one schedule image and parse the model's answer.
pub fn analyze(
    pool_name: &str,
    image_data_url: &str,
    api_key: &str,
    model: &str,
) -> Result<Extraction, Box<dyn Error>> {
    let body = json!({
        "model": model,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": [
                { "type": "text",
                  "text": format!(
                      "Please analyze this {pool_name} pool schedule image and \
                       extract all family swim hours. Look carefully at the \
                       schedule grid and identify when families can swim.") },
                { "type": "image_url",
                  "image_url": { "url": image_data_url, "detail": "high" } }
            ]}
        ],
        "max_tokens": VISION_MAX_TOKENS,
    });

    let resp = net::post_json(VISION_API_URL, api_key, &body)?;
    let content = resp["choices"][0]["message"]["content"]
        .as_str()
        .ok_or("No content in model response")?;

    parse_extraction(content, pool_name)
}

/// Parse the model's JSON answer. `fallback_name` fills in when the model
/// omits the pool name.
fn parse_extraction(content: &str, fallback_name: &str) -> Result<Extraction, Box<dyn Error>> {
    let text = strip_code_fence(content);
    let raw: RawExtraction = serde_json::from_str(text)
        .map_err(|e| format!("Failed to parse model response: {e}"))?;

    let pool_name = match raw.pool_name {
        Some(n) if !n.trim().is_empty() => n,
        _ => s!(fallback_name),
    };
    let key = normalize_pool_key(&pool_name);

    let sessions = raw
        .sessions
        .into_iter()
        .map(|s| Session {
            pool: key.clone(),
            day: s.day,
            start_time: s.start_time,
            end_time: s.end_time,
            session_type: s.session_type.or_else(|| Some(s!("Family Swim"))),
        })
        .collect();

    Ok(Extraction { pool_name, sessions })
}

/// "```json … ```" → "…". Leaves bare JSON alone.
fn strip_code_fence(text: &str) -> &str {
    let t = text.trim();
    let Some(rest) = t.strip_prefix("```") else { return t };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Reduce a facility name to its lookup key: a known SF pool keyword when
/// one appears, else the first word.
pub fn normalize_pool_key(name: &str) -> String {
    const KEYWORDS: [&str; 10] = [
        "North Beach", "Balboa", "Rossi", "Hamilton", "Garfield",
        "Mission", "Sava", "Coffman", "King", "Aquatic",
    ];
    let lower = name.to_lowercase();
    for kw in KEYWORDS {
        if lower.contains(&kw.to_lowercase()) {
            return s!(kw);
        }
    }
    name.split(&[' ', '-', '_'][..])
        .find(|p| !p.is_empty())
        .map(|p| s!(p))
        .unwrap_or_else(|| s!("Unknown"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_code_fences() {
        assert_eq!(strip_code_fence("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn normalizes_pool_keys() {
        assert_eq!(normalize_pool_key("Balboa Pool"), "Balboa");
        assert_eq!(normalize_pool_key("Dr. Martin Luther King Jr. Swimming Pool"), "King");
        assert_eq!(normalize_pool_key("North Beach Pool"), "North Beach");
        assert_eq!(normalize_pool_key("Some-Other Facility"), "Some");
        assert_eq!(normalize_pool_key(""), "Unknown");
    }

    #[test]
    fn parses_fenced_extraction() {
        let content = r#"```json
        {
          "poolName": "Balboa Pool",
          "sessions": [
            { "day": 0, "startTime": "09:00", "endTime": "11:00",
              "sessionType": "Family Swim" },
            { "day": 5, "startTime": "13:00", "endTime": "15:30" }
          ]
        }
        ```"#;

        let ex = parse_extraction(content, "Balboa Pool").unwrap();
        assert_eq!(ex.pool_name, "Balboa Pool");
        assert_eq!(ex.sessions.len(), 2);
        assert_eq!(ex.sessions[0].pool, "Balboa");
        assert_eq!(ex.sessions[1].session_type.as_deref(), Some("Family Swim"));
    }

    #[test]
    fn missing_pool_name_uses_fallback() {
        let ex = parse_extraction(r#"{"sessions": []}"#, "Rossi Pool").unwrap();
        assert_eq!(ex.pool_name, "Rossi Pool");
        assert!(ex.sessions.is_empty());
    }

    #[test]
    fn garbage_reports_parse_error() {
        let err = parse_extraction("the schedule shows swimming", "Sava Pool");
        assert!(err.is_err());
        assert!(err.unwrap_err().to_string().contains("parse"));
    }
}
