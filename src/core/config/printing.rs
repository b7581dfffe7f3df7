use crate::core::config::data::{Config, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVICE_URL};

impl Config {
    pub fn summary_lines(&self) -> Vec<String> {
        let service_url = match &self.service_url {
            Some(url) => url.clone(),
            None => format!("(unset, default {DEFAULT_SERVICE_URL})"),
        };
        let top_k = match self.top_k {
            Some(top_k) => top_k.to_string(),
            None => "(unset, sent as null)".to_string(),
        };
        let timeout = match self.request_timeout_secs {
            Some(0) => "0 (wait forever)".to_string(),
            Some(secs) => format!("{secs}s"),
            None => format!("(unset, default {DEFAULT_REQUEST_TIMEOUT_SECS}s)"),
        };

        vec![
            format!("  service-url: {service_url}"),
            format!("  top-k: {top_k}"),
            format!("  timeout: {timeout}"),
        ]
    }

    pub fn print_all(&self) {
        println!("Current configuration:");
        for line in self.summary_lines() {
            println!("{line}");
        }
    }
}
