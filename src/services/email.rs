use std::time::Duration;

use serde::Serialize;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// Thin client for the Resend HTTP API. Sends are fire-and-forget: a 2xx
/// response is treated as delivered and nothing is retried.
#[derive(Debug, Clone)]
pub struct Mailer {
    client: reqwest::Client,
    api_key: String,
    from: String,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct SendEmailPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

impl Mailer {
    pub fn new(api_key: impl Into<String>, from: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            from: from.into(),
            endpoint: RESEND_ENDPOINT.to_string(),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub async fn send(&self, subject: &str, html_content: &str, to: &str) -> anyhow::Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.payload(subject, html_content, to))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Resend API error {}: {}", status, body);
        }

        tracing::info!(to = %to, subject = %subject, "Email sent");
        Ok(())
    }

    fn payload<'a>(&'a self, subject: &'a str, html: &'a str, to: &'a str) -> SendEmailPayload<'a> {
        SendEmailPayload {
            from: &self.from,
            to,
            subject,
            html,
        }
    }
}

/// Escapes text for interpolation into an HTML body.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
