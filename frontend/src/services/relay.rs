//! Web3Forms relay client.
//!
//! Posts the payload as multipart `FormData` and parses the JSON answer
//! whatever the HTTP status, since the relay reports refusals in the body.

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::{FormData, HtmlFormElement};

use crate::config::{RelayConfig, RELAY_ENDPOINT, RELAY_TIMEOUT_MS};
use crate::services::submission::{FormFields, FormRelay, RelayPayload};
use crate::types::{AppError, AppResult, ContactFormInput, RelayResponse};

/// HTTP relay to the configured endpoint.
pub struct Web3FormsRelay {
    endpoint: String,
    timeout_ms: u32,
}

impl Web3FormsRelay {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            timeout_ms: config.timeout_ms,
        }
    }
}

impl Default for Web3FormsRelay {
    fn default() -> Self {
        Self {
            endpoint: RELAY_ENDPOINT.to_string(),
            timeout_ms: RELAY_TIMEOUT_MS,
        }
    }
}

impl Web3FormsRelay {
    async fn send(&self, payload: &RelayPayload) -> AppResult<RelayResponse> {
        let form_data = to_form_data(payload)?;

        let request = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .body(form_data)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        log::debug!("Relay answered with status {}", response.status());

        response
            .json::<RelayResponse>()
            .await
            .map_err(|e| AppError::Decode(format!("Failed to parse response: {}", e)))
    }
}

impl FormRelay for Web3FormsRelay {
    async fn post(&self, payload: &RelayPayload) -> AppResult<RelayResponse> {
        let request = self.send(payload);
        let timeout = TimeoutFuture::new(self.timeout_ms);
        pin_mut!(request, timeout);

        match select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(AppError::Timeout(self.timeout_ms)),
        }
    }
}

fn to_form_data(payload: &RelayPayload) -> AppResult<FormData> {
    let form_data =
        FormData::new().map_err(|e| AppError::Dom(format!("Failed to create FormData: {:?}", e)))?;

    for (name, value) in &payload.fields {
        form_data
            .append_with_str(name, value)
            .map_err(|e| AppError::Dom(format!("Failed to append {}: {:?}", name, e)))?;
    }

    Ok(form_data)
}

impl FormFields for HtmlFormElement {
    /// Read the named fields. Absent fields read as empty.
    fn read(&self) -> AppResult<ContactFormInput> {
        let form_data = FormData::new_with_form(self)
            .map_err(|e| AppError::Dom(format!("Failed to read form: {:?}", e)))?;

        Ok(ContactFormInput::from_lookup(|name| {
            form_data.get(name).as_string().unwrap_or_default()
        }))
    }

    fn clear(&self) {
        self.reset();
    }
}
