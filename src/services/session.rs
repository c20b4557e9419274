// src/services/session.rs

//! Shared request context for the fetch functions.

use std::sync::Arc;

use crate::either::{Failure, Maybe, Success};
use crate::error::Result;
use crate::models::ScraperConfig;
use crate::utils::agents::UserAgentPool;
use crate::utils::http::{FetchRequest, RawResponse, ReqwestTransport, Transport};

/// Header carrying the static authorization token.
pub const AUTH_HEADER: &str = "ptauthorize";

/// Transport, endpoints, token and user-agent pool used by every fetch.
pub struct Session {
    transport: Arc<dyn Transport>,
    config: ScraperConfig,
    agents: UserAgentPool,
}

impl Session {
    pub fn new(config: ScraperConfig, transport: Arc<dyn Transport>, agents: UserAgentPool) -> Self {
        Self {
            transport,
            config,
            agents,
        }
    }

    /// Build a session sending requests through `reqwest`.
    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::new(
            config.clone(),
            Arc::new(transport),
            UserAgentPool::new(config.user_agents.clone()),
        ))
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// The given user agent, or one picked from the pool.
    pub fn user_agent(&self, explicit: Option<&str>) -> String {
        explicit.map_or_else(|| self.agents.pick(), str::to_string)
    }

    /// Add the headers every endpoint expects.
    pub fn authorize(&self, request: FetchRequest, user_agent: Option<&str>) -> FetchRequest {
        request
            .header(AUTH_HEADER, self.config.auth_token.as_str())
            .header("User-Agent", self.user_agent(user_agent))
    }

    /// Issue exactly one request.
    ///
    /// Transport errors become `"<Kind>: <message>"` and any status other
    /// than 200 becomes a failure carrying the status code.
    pub async fn send(&self, request: FetchRequest) -> Maybe<RawResponse> {
        match self.transport.execute(request).await {
            Err(error) => Failure(error.to_string()),
            Ok(response) if response.status != 200 => Failure(format!(
                "status code is not 200 (got {})",
                response.status
            )),
            Ok(response) => Success(response),
        }
    }
}
