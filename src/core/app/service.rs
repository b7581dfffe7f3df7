use reqwest::Client;

use crate::api::QueryRequest;
use crate::core::config::settings::ServiceSettings;
use crate::core::query_service::QueryParams;
use crate::core::session::Submission;

/// The HTTP client and the service settings, fixed for the process lifetime.
pub struct ServiceContext {
    pub client: Client,
    pub settings: ServiceSettings,
}

impl ServiceContext {
    pub fn new(settings: ServiceSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("warehouse-chat/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, settings })
    }

    pub fn query_params(&self, submission: Submission) -> QueryParams {
        QueryParams {
            client: self.client.clone(),
            base_url: self.settings.base_url.clone(),
            request: QueryRequest {
                query: submission.question,
                top_k: self.settings.top_k,
            },
            timeout: self.settings.request_timeout,
            cycle_id: submission.cycle_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn query_params_carry_settings_and_cycle() {
        let context = ServiceContext::new(ServiceSettings {
            base_url: "http://wh.local".to_string(),
            top_k: Some(4),
            request_timeout: Some(Duration::from_secs(9)),
        })
        .expect("client");

        let params = context.query_params(Submission {
            cycle_id: 3,
            question: "filters".to_string(),
        });

        assert_eq!(params.base_url, "http://wh.local");
        assert_eq!(params.cycle_id, 3);
        assert_eq!(params.timeout, Some(Duration::from_secs(9)));
        assert_eq!(
            params.request,
            QueryRequest {
                query: "filters".to_string(),
                top_k: Some(4)
            }
        );
    }
}
