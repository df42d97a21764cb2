use async_trait::async_trait;
use std::error::Error;
use vesta_core::remote::MessageGateway;
use vesta_shared::SmsRequest;

/// Base URL of the local messaging service. Fixed by deployment, not
/// configurable from this core.
pub const MESSAGING_BASE_URL: &str = "http://localhost:5000";

/// HTTP gateway to the SMS service's `send_message` endpoint.
pub struct SmsEndpoint {
    http: reqwest::Client,
    base_url: String,
}

impl SmsEndpoint {
    pub fn new() -> Self {
        Self::with_base_url(MESSAGING_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for SmsEndpoint {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageGateway for SmsEndpoint {
    async fn send(&self, request: &SmsRequest) -> Result<(), Box<dyn Error + Send + Sync>> {
        let url = format!("{}/send_message", self.base_url);
        tracing::debug!("posting sms for {} to {}", request.phone, url);
        self.http
            .post(url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
