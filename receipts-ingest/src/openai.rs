//! Receipt extraction through the OpenAI chat completions API.

use anyhow::{Context, Result};
use log::debug;
use receipts_core::{DEFAULT_CATEGORIES, Receipt};
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::batch::ReceiptExtractor;
use crate::error::ExtractionError;
use crate::images::ReceiptImage;
use crate::validate::receipt_from_reply;

/// Everything the extractor needs, passed in explicitly at startup.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub seed: Option<i64>,
    pub timeout: Duration,
    pub categories: Vec<String>,
}

impl ExtractorConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gpt-4.1-mini".to_string(),
            base_url: "https://api.openai.com".to_string(),
            seed: Some(43),
            timeout: Duration::from_secs(120),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

pub struct OpenAiExtractor {
    config: ExtractorConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct Req<'a> {
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<i64>,
    messages: Vec<Msg<'a>>,
}

#[derive(Serialize)]
struct Msg<'a> {
    role: &'static str,
    content: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Part<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Deserialize)]
struct Resp {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MsgOut,
}

#[derive(Deserialize)]
struct MsgOut {
    content: Option<String>,
}

impl OpenAiExtractor {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("build http client")?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn prompt(&self) -> String {
        build_prompt(&self.config.categories)
    }
}

impl ReceiptExtractor for OpenAiExtractor {
    async fn extract(&self, image: &ReceiptImage) -> Result<Receipt, ExtractionError> {
        let prompt = self.prompt();
        let body = Req {
            model: &self.config.model,
            seed: self.config.seed,
            messages: vec![Msg {
                role: "user",
                content: vec![
                    Part::Text { text: &prompt },
                    Part::ImageUrl {
                        image_url: ImageUrl {
                            url: image.data_url(),
                        },
                    },
                ],
            }],
        };

        let resp = self
            .client
            .post(self.endpoint())
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            return Err(ExtractionError::Api {
                status: status.as_u16(),
                body: txt,
            });
        }

        let out: Resp = resp.json().await?;
        let content = reply_content(out).ok_or(ExtractionError::EmptyResponse)?;
        debug!("{}: model reply {}", image.name, content);
        receipt_from_reply(&content)
    }
}

fn reply_content(resp: Resp) -> Option<String> {
    resp.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn build_prompt(categories: &[String]) -> String {
    format!(
        "You are an information extraction system.
Extract ONLY the following fields from the receipt image:

date: the receipt date, formatted as YYYY-MM-DD
amount: the total amount paid as it appears on the receipt
vendor: the merchant or vendor name
category: one of [{}]

Return EXACTLY one JSON object with these four keys and NOTHING ELSE.
Do not include explanations, comments, or formatting.
Do not wrap the JSON in markdown.
If a field cannot be determined, use null.

The output must be valid JSON.
",
        categories.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> ReceiptImage {
        ReceiptImage {
            name: "r.png".to_string(),
            mime: "image/png",
            bytes: b"png".to_vec(),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let img = image();
        let body = Req {
            model: "gpt-4.1-mini",
            seed: Some(43),
            messages: vec![Msg {
                role: "user",
                content: vec![
                    Part::Text { text: "extract" },
                    Part::ImageUrl {
                        image_url: ImageUrl { url: img.data_url() },
                    },
                ],
            }],
        };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["model"], "gpt-4.1-mini");
        assert_eq!(v["seed"], 43);
        let content = &v["messages"][0]["content"];
        assert_eq!(content[0]["type"], "text");
        assert_eq!(content[0]["text"], "extract");
        assert_eq!(content[1]["type"], "image_url");
        assert_eq!(content[1]["image_url"]["url"], "data:image/png;base64,cG5n");
    }

    #[test]
    fn test_seed_omitted_when_unset() {
        let body = Req {
            model: "m",
            seed: None,
            messages: vec![],
        };
        let v = serde_json::to_value(&body).unwrap();
        assert!(v.get("seed").is_none());
    }

    #[test]
    fn test_reply_content() {
        let resp: Resp = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"  {\"a\":1} \n"}}]}"#,
        )
        .unwrap();
        assert_eq!(reply_content(resp).as_deref(), Some("{\"a\":1}"));

        let empty: Resp = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(reply_content(empty), None);

        let null: Resp =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert_eq!(reply_content(null), None);
    }

    #[test]
    fn test_prompt_lists_categories() {
        let cfg = ExtractorConfig::new("sk-test");
        let p = build_prompt(&cfg.categories);
        assert!(p.contains(
            "one of [Meals, Transport, Lodging, Office Supplies, Entertainment, Other]"
        ));
        assert!(p.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let mut cfg = ExtractorConfig::new("sk-test");
        cfg.base_url = "http://localhost:8080/".to_string();
        let ex = OpenAiExtractor::new(cfg).unwrap();
        assert_eq!(ex.endpoint(), "http://localhost:8080/v1/chat/completions");
    }
}
