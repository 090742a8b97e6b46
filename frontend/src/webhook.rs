use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

const BOT_NAME: &str = "Byte Bot";
const BRAND_ICON: &str = "https://github.com/bytrum.png";
const EMBED_COLOR: u32 = 0xffffff;
// Discord rejects the whole message when a field value is longer than this.
const FIELD_VALUE_LIMIT: usize = 1024;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WebhookError {
    #[error("webhook url is not configured")]
    MissingUrl,
    #[error("failed to encode webhook payload: {0}")]
    Encode(String),
    #[error("webhook request failed: {0}")]
    Network(String),
    #[error("webhook responded with status {0}")]
    Status(u16),
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WebhookPayload {
    pub username: String,
    pub embeds: Vec<Embed>,
}

impl WebhookPayload {
    pub fn single(embed: Embed) -> Self {
        Self {
            username: BOT_NAME.to_string(),
            embeds: vec![embed],
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub author: EmbedAuthor,
    pub thumbnail: EmbedImage,
    pub fields: Vec<EmbedField>,
    pub timestamp: String,
    pub footer: EmbedFooter,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EmbedAuthor {
    pub name: String,
    pub icon_url: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EmbedImage {
    pub url: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EmbedFooter {
    pub text: String,
    pub icon_url: String,
}

impl Embed {
    /// Embed carrying the team branding. `footer` names the channel the
    /// message came from, e.g. "Project Submissions".
    pub fn branded(title: &str, description: &str, footer: &str, timestamp: String) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            color: EMBED_COLOR,
            author: EmbedAuthor {
                name: "Byte Development Team".to_string(),
                icon_url: BRAND_ICON.to_string(),
            },
            thumbnail: EmbedImage {
                url: BRAND_ICON.to_string(),
            },
            fields: Vec::new(),
            timestamp,
            footer: EmbedFooter {
                text: format!("{} • {}", BOT_NAME, footer),
                icon_url: BRAND_ICON.to_string(),
            },
        }
    }

    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.fields.push(EmbedField {
            name: name.to_string(),
            value: clip(value, FIELD_VALUE_LIMIT),
            inline: false,
        });
        self
    }
}

fn clip(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let mut clipped: String = value.chars().take(limit - 1).collect();
    clipped.push('…');
    clipped
}

/// ISO-8601 submission time for the embed footer.
pub fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn target_url(url: &str) -> Result<&str, WebhookError> {
    let url = url.trim();
    if url.is_empty() {
        Err(WebhookError::MissingUrl)
    } else {
        Ok(url)
    }
}

/// Posts the payload once. Anything but a 2xx response is an error, there is
/// no retry.
pub async fn send(url: &str, payload: &WebhookPayload) -> Result<(), WebhookError> {
    let url = target_url(url)?;
    let request = Request::post(url)
        .json(payload)
        .map_err(|e| WebhookError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| WebhookError::Network(e.to_string()))?;

    if response.ok() {
        log::info!("webhook accepted message ({})", response.status());
        Ok(())
    } else {
        Err(WebhookError::Status(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_url_is_rejected_before_any_request() {
        assert_eq!(target_url(""), Err(WebhookError::MissingUrl));
        assert_eq!(target_url("   "), Err(WebhookError::MissingUrl));
        assert_eq!(
            target_url(" https://discord.com/api/webhooks/1/abc "),
            Ok("https://discord.com/api/webhooks/1/abc")
        );
    }

    #[test]
    fn payload_serializes_to_discord_shape() {
        let embed = Embed::branded("Title", "Desc", "Support", "2026-01-01T00:00:00+00:00".to_string())
            .field("Name", "Jane");
        let value = serde_json::to_value(WebhookPayload::single(embed)).unwrap();

        assert_eq!(value["username"], json!("Byte Bot"));
        assert_eq!(value["embeds"][0]["title"], json!("Title"));
        assert_eq!(value["embeds"][0]["color"], json!(0xffffff));
        assert_eq!(value["embeds"][0]["footer"]["text"], json!("Byte Bot • Support"));
        assert_eq!(value["embeds"][0]["timestamp"], json!("2026-01-01T00:00:00+00:00"));
        assert_eq!(
            value["embeds"][0]["fields"][0],
            json!({"name": "Name", "value": "Jane", "inline": false})
        );
    }

    #[test]
    fn long_field_values_are_clipped() {
        let long = "é".repeat(FIELD_VALUE_LIMIT + 10);
        let embed = Embed::branded("t", "d", "f", String::new()).field("Message", &long);
        let value = &embed.fields[0].value;
        assert_eq!(value.chars().count(), FIELD_VALUE_LIMIT);
        assert!(value.ends_with('…'));

        let short = Embed::branded("t", "d", "f", String::new()).field("Message", "hi");
        assert_eq!(short.fields[0].value, "hi");
    }

    #[test]
    fn errors_read_well_in_logs() {
        assert_eq!(WebhookError::Status(404).to_string(), "webhook responded with status 404");
        assert_eq!(WebhookError::MissingUrl.to_string(), "webhook url is not configured");
    }
}
