//! In-memory fake of the campaign/advice backend.
//!
//! Unlike `MockBackend` this keeps real state, so tests can mutate through
//! the client and observe the result on reload.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use adpilot::api::{
    Advice, AdviceStatus, Brief, Campaign, CampaignStatus, DecisionStep, StepStatus,
};
use axum::extract::{Path, Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

const CREATED_AT: &str = "2024-03-15T10:00:00";

#[derive(Default)]
struct Db {
    campaigns: Vec<Campaign>,
    advices: Vec<Advice>,
    briefs: Vec<Brief>,
    decisions: HashMap<i64, Vec<DecisionStep>>,
    next_id: i64,
    /// `"{METHOD} {path}"` of every request, in arrival order.
    log: Vec<String>,
}

impl Db {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

type Shared = Arc<Mutex<Db>>;

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

/// Stateful fake server.
pub struct FakeServer {
    pub addr: SocketAddr,
    db: Shared,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl FakeServer {
    pub async fn start() -> Self {
        let db: Shared = Arc::new(Mutex::new(Db::default()));
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/api/campaigns/", get(list_campaigns).post(create_campaign))
            .route("/api/campaigns/{id}", get(get_campaign).put(update_campaign))
            .route("/api/campaigns/{id}/status", post(change_status))
            .route("/api/campaigns/{id}/decisions", get(decisions))
            .route("/api/campaigns/{id}/agent/optimize", post(optimize))
            .route("/api/ai/advices", get(list_advices))
            .route("/api/ai/advise", post(create_advice))
            .route("/api/ai/approve/{id}", post(approve_advice))
            .route("/api/ai/execute/{id}", post(execute_advice))
            .route("/api/ai/daily-brief", get(daily_brief))
            .layer(middleware::from_fn_with_state(db.clone(), record))
            .with_state(db.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            db,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Insert `count` campaigns named `Campaign 1..=count`.
    pub fn seed_campaigns(&self, count: usize) {
        let mut db = self.db.lock();
        for n in 1..=count {
            let id = db.next_id();
            db.campaigns.push(Campaign {
                id,
                name: format!("Campaign {}", n),
                product: "Shoes".into(),
                objective: "Reach".into(),
                budget: 100.0,
                status: CampaignStatus::Draft,
                created_at: CREATED_AT.into(),
            });
        }
    }

    pub fn seed_advice(&self, campaign_id: Option<i64>, status: AdviceStatus) -> i64 {
        let mut db = self.db.lock();
        let id = db.next_id();
        db.advices.push(Advice {
            id,
            campaign_id,
            kind: "custom".into(),
            content: format!("advice {}", id),
            status,
            created_at: CREATED_AT.into(),
            approved_by: None,
            executed_at: None,
        });
        id
    }

    pub fn seed_brief(&self, content: &str) {
        let mut db = self.db.lock();
        let id = db.next_id();
        db.briefs.push(Brief {
            id,
            content: content.into(),
            date: CREATED_AT.into(),
            raw_data: None,
        });
    }

    pub fn campaign(&self, id: i64) -> Option<Campaign> {
        self.db.lock().campaigns.iter().find(|c| c.id == id).cloned()
    }

    pub fn advice(&self, id: i64) -> Option<Advice> {
        self.db.lock().advices.iter().find(|a| a.id == id).cloned()
    }

    pub fn requests(&self) -> Vec<String> {
        self.db.lock().log.clone()
    }

    /// Requests whose `"{METHOD} {path}"` equals `line`.
    pub fn count(&self, line: &str) -> usize {
        self.db.lock().log.iter().filter(|l| *l == line).count()
    }

    pub fn clear_log(&self) {
        self.db.lock().log.clear();
    }
}

impl Drop for FakeServer {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn record(State(db): State<Shared>, req: Request, next: Next) -> Response {
    db.lock()
        .log
        .push(format!("{} {}", req.method(), req.uri().path()));
    next.run(req).await
}

#[derive(Deserialize)]
struct Page {
    #[serde(default = "default_limit")]
    limit: usize,
    #[serde(default)]
    offset: usize,
}

fn default_limit() -> usize {
    100
}

async fn list_campaigns(State(db): State<Shared>, Query(page): Query<Page>) -> Json<Vec<Campaign>> {
    let db = db.lock();
    Json(
        db.campaigns
            .iter()
            .skip(page.offset)
            .take(page.limit)
            .cloned()
            .collect(),
    )
}

#[derive(Deserialize)]
struct CampaignBody {
    name: String,
    product: String,
    objective: String,
    budget: f64,
}

async fn create_campaign(State(db): State<Shared>, Json(body): Json<CampaignBody>) -> Response {
    if body.budget <= 0.0 {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "budget must be positive");
    }
    let mut db = db.lock();
    let id = db.next_id();
    let campaign = Campaign {
        id,
        name: body.name,
        product: body.product,
        objective: body.objective,
        budget: body.budget,
        status: CampaignStatus::Created,
        created_at: CREATED_AT.into(),
    };
    db.campaigns.push(campaign.clone());
    Json(campaign).into_response()
}

async fn get_campaign(State(db): State<Shared>, Path(id): Path<i64>) -> Response {
    match db.lock().campaigns.iter().find(|c| c.id == id) {
        Some(campaign) => Json(campaign.clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Campaign not found"),
    }
}

async fn update_campaign(
    State(db): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut db = db.lock();
    let Some(campaign) = db.campaigns.iter_mut().find(|c| c.id == id) else {
        return detail(StatusCode::NOT_FOUND, "Campaign not found");
    };
    // Start from the stored record and overlay only the fields sent.
    let mut merged = serde_json::to_value(&*campaign).unwrap();
    if let (Some(target), Some(patch)) = (merged.as_object_mut(), body.as_object()) {
        for (key, value) in patch {
            target.insert(key.clone(), value.clone());
        }
    }
    *campaign = serde_json::from_value(merged).unwrap();
    Json(campaign.clone()).into_response()
}

#[derive(Deserialize)]
struct StatusBody {
    status: CampaignStatus,
}

async fn change_status(
    State(db): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<StatusBody>,
) -> Response {
    let mut db = db.lock();
    match db.campaigns.iter_mut().find(|c| c.id == id) {
        Some(campaign) => {
            campaign.status = body.status;
            Json(campaign.clone()).into_response()
        }
        None => detail(StatusCode::NOT_FOUND, "Campaign not found"),
    }
}

#[derive(Deserialize)]
struct AdviceFilter {
    campaign_id: Option<i64>,
    status: Option<AdviceStatus>,
}

async fn list_advices(
    State(db): State<Shared>,
    Query(filter): Query<AdviceFilter>,
) -> Json<Vec<Advice>> {
    let db = db.lock();
    Json(
        db.advices
            .iter()
            .filter(|a| filter.campaign_id.is_none() || a.campaign_id == filter.campaign_id)
            .filter(|a| filter.status.map_or(true, |s| a.status == s))
            .cloned()
            .collect(),
    )
}

#[derive(Deserialize)]
struct AdviceBody {
    campaign_id: Option<i64>,
    #[serde(rename = "type")]
    kind: String,
    content: String,
}

async fn create_advice(State(db): State<Shared>, Json(body): Json<AdviceBody>) -> Response {
    let mut db = db.lock();
    let id = db.next_id();
    let advice = Advice {
        id,
        campaign_id: body.campaign_id,
        kind: body.kind,
        content: body.content,
        status: AdviceStatus::Pending,
        created_at: CREATED_AT.into(),
        approved_by: None,
        executed_at: None,
    };
    db.advices.push(advice.clone());
    Json(advice).into_response()
}

#[derive(Deserialize)]
struct ApproveQuery {
    approve: bool,
    approved_by: Option<String>,
}

async fn approve_advice(
    State(db): State<Shared>,
    Path(id): Path<i64>,
    Query(query): Query<ApproveQuery>,
) -> Response {
    let mut db = db.lock();
    let Some(advice) = db.advices.iter_mut().find(|a| a.id == id) else {
        return detail(StatusCode::NOT_FOUND, "Advice not found");
    };
    if advice.status != AdviceStatus::Pending {
        return detail(StatusCode::BAD_REQUEST, "Advice has already been reviewed");
    }
    advice.status = if query.approve {
        AdviceStatus::Approved
    } else {
        AdviceStatus::Rejected
    };
    advice.approved_by = query.approved_by;
    Json(advice.clone()).into_response()
}

#[derive(Deserialize)]
struct ExecuteBody {
    result: Option<String>,
}

async fn execute_advice(
    State(db): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<ExecuteBody>,
) -> Response {
    let mut db = db.lock();
    let record_id = db.next_id();
    let Some(advice) = db.advices.iter_mut().find(|a| a.id == id) else {
        return detail(StatusCode::NOT_FOUND, "Advice not found");
    };
    if advice.status != AdviceStatus::Approved {
        return detail(StatusCode::BAD_REQUEST, "Advice must be approved before execution");
    }
    advice.status = AdviceStatus::Executed;
    advice.executed_at = Some(CREATED_AT.into());
    Json(json!({
        "id": record_id,
        "advice_id": id,
        "result": body.result.unwrap_or_else(|| "executed".into()),
        "executed_at": CREATED_AT,
    }))
    .into_response()
}

#[derive(Deserialize)]
struct BriefQuery {
    #[serde(default = "default_brief_limit")]
    limit: usize,
}

fn default_brief_limit() -> usize {
    7
}

async fn daily_brief(State(db): State<Shared>, Query(query): Query<BriefQuery>) -> Json<Vec<Brief>> {
    let db = db.lock();
    Json(db.briefs.iter().rev().take(query.limit).cloned().collect())
}

async fn decisions(State(db): State<Shared>, Path(id): Path<i64>) -> Json<Value> {
    let db = db.lock();
    let steps = db.decisions.get(&id).cloned().unwrap_or_default();
    Json(json!({ "decisionFlow": steps }))
}

async fn optimize(State(db): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut db = db.lock();
    if !db.campaigns.iter().any(|c| c.id == id) {
        return detail(StatusCode::NOT_FOUND, "Campaign not found");
    }
    let step_id = db.next_id();
    db.decisions.entry(id).or_default().push(DecisionStep {
        id: step_id,
        kind: "optimization".into(),
        title: "Budget reallocation".into(),
        description: "Shifted budget to the best performing ad group".into(),
        status: StepStatus::Completed,
        timestamp: CREATED_AT.into(),
        input: json!({}),
        output: json!({}),
    });
    Json(json!({
        "message": "Optimization finished",
        "status": "success",
        "result": { "result": "Raised bids on 2 ad groups" },
    }))
    .into_response()
}
