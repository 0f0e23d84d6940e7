use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use crate::api::error::{ApiError, Operation};
use crate::api::types::{
    Advice, AgentLogEntry, AgentLogEnvelope, AdviceStatus, Brief, Campaign, CampaignAnalysis,
    CampaignStatus, DecisionFlowEnvelope, DecisionStep, Executed, OptimizeOutcome, Overview,
};
use crate::api::validation::{CampaignUpdate, NewAdvice, NewCampaign};
use crate::config::ApiConfig;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Typed client for the campaign/advice REST backend.
///
/// Each method is exactly one HTTP round trip. There are no retries and no
/// caching; callers reload to observe the effect of a mutation.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

#[derive(Serialize)]
struct StatusBody {
    status: CampaignStatus,
}

#[derive(Serialize)]
struct ExecuteBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a str>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|source| ApiError::Url { url: raw, source })
    }

    fn url_with_query(&self, path: &str, params: &[(&str, String)]) -> Result<Url, ApiError> {
        let mut url = self.url(path)?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: Operation,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let request_id = Uuid::new_v4().to_string();
        debug!(request_id = %request_id, operation = operation.name(), "sending request");

        let response = builder
            .header(REQUEST_ID_HEADER, &request_id)
            .send()
            .await
            .map_err(|source| {
                warn!(request_id = %request_id, operation = operation.name(), error = %source, "transport failure");
                ApiError::Transport { operation, source }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let err = ApiError::from_response(operation, status.as_u16(), &body);
            warn!(
                request_id = %request_id,
                operation = operation.name(),
                status = status.as_u16(),
                error = %err,
                "request rejected"
            );
            return Err(err);
        }

        debug!(request_id = %request_id, operation = operation.name(), status = status.as_u16(), "request succeeded");
        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { operation, source })
    }

    async fn get<T: DeserializeOwned>(&self, operation: Operation, url: Url) -> Result<T, ApiError> {
        self.send(operation, self.http.get(url)).await
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        operation: Operation,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(operation, self.http.request(method, url).json(body))
            .await
    }

    /// `page` is 1-based; page 0 is treated as page 1.
    pub async fn list_campaigns(&self, page: u32, page_size: u32) -> Result<Vec<Campaign>, ApiError> {
        let offset = page.saturating_sub(1) as u64 * page_size as u64;
        let url = self.url_with_query(
            "/api/campaigns/",
            &[("limit", page_size.to_string()), ("offset", offset.to_string())],
        )?;
        self.get(Operation::ListCampaigns, url).await
    }

    pub async fn get_campaign(&self, id: i64) -> Result<Campaign, ApiError> {
        let url = self.url(&format!("/api/campaigns/{}", id))?;
        self.get(Operation::GetCampaign, url).await
    }

    pub async fn create_campaign(&self, campaign: &NewCampaign) -> Result<Campaign, ApiError> {
        campaign.validate()?;
        let url = self.url("/api/campaigns/")?;
        self.send_json(Operation::CreateCampaign, Method::POST, url, campaign)
            .await
    }

    pub async fn update_campaign(&self, id: i64, update: &CampaignUpdate) -> Result<Campaign, ApiError> {
        update.validate()?;
        let url = self.url(&format!("/api/campaigns/{}", id))?;
        self.send_json(Operation::UpdateCampaign, Method::PUT, url, update)
            .await
    }

    pub async fn change_campaign_status(
        &self,
        id: i64,
        status: CampaignStatus,
    ) -> Result<Campaign, ApiError> {
        let url = self.url(&format!("/api/campaigns/{}/status", id))?;
        self.send_json(
            Operation::ChangeCampaignStatus,
            Method::POST,
            url,
            &StatusBody { status },
        )
        .await
    }

    /// Filters are sent only when present.
    pub async fn list_advices(
        &self,
        campaign_id: Option<i64>,
        status: Option<AdviceStatus>,
    ) -> Result<Vec<Advice>, ApiError> {
        let mut params = Vec::new();
        if let Some(id) = campaign_id {
            params.push(("campaign_id", id.to_string()));
        }
        if let Some(status) = status {
            params.push(("status", status.as_str().to_string()));
        }
        let url = self.url_with_query("/api/ai/advices", &params)?;
        self.get(Operation::ListAdvices, url).await
    }

    pub async fn create_advice(&self, advice: &NewAdvice) -> Result<Advice, ApiError> {
        advice.validate()?;
        let url = self.url("/api/ai/advise")?;
        self.send_json(Operation::CreateAdvice, Method::POST, url, advice)
            .await
    }

    /// Approve (`approve = true`) or reject an advice. The current status
    /// is not checked here; the backend rejects invalid transitions.
    pub async fn approve_advice(
        &self,
        id: i64,
        approve: bool,
        approved_by: Option<&str>,
    ) -> Result<Advice, ApiError> {
        let mut params = vec![("approve", approve.to_string())];
        if let Some(reviewer) = approved_by {
            params.push(("approved_by", reviewer.to_string()));
        }
        let url = self.url_with_query(&format!("/api/ai/approve/{}", id), &params)?;
        self.send(Operation::ApproveAdvice, self.http.post(url)).await
    }

    pub async fn execute_advice(&self, id: i64, result: Option<&str>) -> Result<Executed, ApiError> {
        let url = self.url(&format!("/api/ai/execute/{}", id))?;
        self.send_json(
            Operation::ExecuteAdvice,
            Method::POST,
            url,
            &ExecuteBody { result },
        )
        .await
    }

    pub async fn fetch_daily_brief(&self, limit: u32) -> Result<Vec<Brief>, ApiError> {
        let url = self.url_with_query("/api/ai/daily-brief", &[("limit", limit.to_string())])?;
        self.get(Operation::DailyBrief, url).await
    }

    pub async fn fetch_decision_flow(&self, campaign_id: i64) -> Result<Vec<DecisionStep>, ApiError> {
        let url = self.url(&format!("/api/campaigns/{}/decisions", campaign_id))?;
        let envelope: DecisionFlowEnvelope = self.get(Operation::DecisionFlow, url).await?;
        Ok(envelope.decision_flow)
    }

    pub async fn trigger_optimize(&self, campaign_id: i64) -> Result<OptimizeOutcome, ApiError> {
        let url = self.url(&format!("/api/campaigns/{}/agent/optimize", campaign_id))?;
        self.send(Operation::Optimize, self.http.post(url)).await
    }

    pub async fn fetch_agent_logs(&self, campaign_id: i64) -> Result<Vec<AgentLogEntry>, ApiError> {
        let url = self.url(&format!("/api/campaigns/{}/logs", campaign_id))?;
        let envelope: AgentLogEnvelope = self.get(Operation::AgentLogs, url).await?;
        Ok(envelope.agent_logs)
    }

    pub async fn analyze_campaign(&self, campaign_id: i64) -> Result<CampaignAnalysis, ApiError> {
        let url = self.url(&format!("/api/campaigns/{}/agent/analyze", campaign_id))?;
        self.send(Operation::Analyze, self.http.post(url)).await
    }

    pub async fn fetch_overview(&self) -> Result<Overview, ApiError> {
        let url = self.url("/api/dashboard/overview")?;
        self.get(Operation::Overview, url).await
    }
}
