//! HTTP Program Source
//!
//! Fetches the programs of one university from the admin filter endpoint.

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::config::FilterConfig;
use crate::error::{FilterError, FilterResult};
use crate::models::ProgramRecord;
use crate::source::{query_url, ProgramSource};

pub struct HttpProgramSource {
    endpoint: String,
    query_param: String,
}

impl HttpProgramSource {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            query_param: config.query_param.clone(),
        }
    }
}

#[async_trait(?Send)]
impl ProgramSource for HttpProgramSource {
    async fn programs_for(&self, university_id: &str) -> FilterResult<Vec<ProgramRecord>> {
        let url = query_url(&self.endpoint, &self.query_param, university_id);
        let response = Request::get(&url)
            .header("Accept", "application/json")
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await
            .map_err(|e| FilterError::Network(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(FilterError::Status {
                status: response.status(),
                body,
            });
        }

        response
            .json::<Vec<ProgramRecord>>()
            .await
            .map_err(|e| FilterError::Decode(e.to_string()))
    }
}
