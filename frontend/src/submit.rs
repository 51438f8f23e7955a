use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::info;
use serde::Serialize;

use crate::config;
use crate::error::SubmitError;
use crate::lead::LeadFields;

#[derive(Debug, Serialize)]
pub struct LeadSubmission<'a> {
    #[serde(flatten)]
    pub fields: &'a LeadFields,
    pub source: &'a str,
}

/// Sends a captured lead. Without a configured endpoint the call only waits
/// for a realistic moment and reports success.
pub async fn submit_lead(fields: LeadFields, source: String) -> Result<(), SubmitError> {
    let payload = LeadSubmission {
        fields: &fields,
        source: &source,
    };
    match config::lead_endpoint() {
        Some(url) => post_lead(url, &payload).await,
        None => {
            info!("No lead endpoint configured, simulating submission from {}", source);
            TimeoutFuture::new(config::SUBMIT_SIMULATED_LATENCY_MS).await;
            Ok(())
        }
    }
}

async fn post_lead(url: &str, payload: &LeadSubmission<'_>) -> Result<(), SubmitError> {
    info!("Submitting lead from {}", payload.source);
    let response = Request::post(url)
        .json(payload)
        .map_err(|e| SubmitError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_flattens_fields() {
        let fields = LeadFields {
            name: "Ann".to_string(),
            email: "a@b.com".to_string(),
            ..LeadFields::default()
        };
        let json = serde_json::to_value(LeadSubmission {
            fields: &fields,
            source: "bundle-kits",
        })
        .unwrap();
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["source"], "bundle-kits");
    }
}
