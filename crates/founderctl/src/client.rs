//! HTTP client for communicating with founderd.

use anyhow::{anyhow, bail, Result};
use founder_common::{
    GeneratePlanResponse, HealthResponse, PlanRequest, ValidatePlanRequest, ValidatePlanResponse,
};
use std::time::Duration;

/// Client for the founderd HTTP API.
pub struct FounderdClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl FounderdClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            // Generation waits on the LLM backend; give it room
            .timeout(Duration::from_secs(180))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn post<Req: serde::Serialize, Resp: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &Req,
    ) -> Result<Resp> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| self.connection_error(e))?;

        if !response.status().is_success() {
            bail!("founderd returned HTTP {} for {}", response.status(), path);
        }
        Ok(response.json()?)
    }

    fn connection_error(&self, e: reqwest::Error) -> anyhow::Error {
        anyhow!(
            "Cannot reach founderd at {}: {}\n\n\
             Is the daemon running? Start it with:\n  founderd",
            self.base_url,
            e
        )
    }

    pub fn generate(&self, request: &PlanRequest) -> Result<GeneratePlanResponse> {
        self.post("/v1/plan/generate", request)
    }

    pub fn validate(&self, request: &ValidatePlanRequest) -> Result<ValidatePlanResponse> {
        self.post("/v1/plan/validate", request)
    }

    pub fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/v1/health", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| self.connection_error(e))?;

        if !response.status().is_success() {
            bail!("founderd returned HTTP {}", response.status());
        }
        Ok(response.json()?)
    }
}
