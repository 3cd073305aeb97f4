//! HTTP client for the statistics API.
//!
//! # Design
//! - Every request holds an [`InFlight`] guard so the status chip counts it on
//!   every exit path.
//! - Bodies are read as text and decoded by the shared `decode_response` contract.

use crate::core::logic::build_path;
use crate::core::net::{ApiError, decode_response};
use crate::core::settings::DashboardSettings;
use crate::core::store::AppStore;
use crate::features::cards::logic::card_paths;
use crate::features::cards::source::{CardPayload, CardSource};
use crate::features::cards::state::{CardId, CardQuery};
use crate::features::system::actions::{AdminAction, LOGOUT_ENDPOINT, ModerationAction};
use async_trait::async_trait;
use botwatch_api_models::{
    ActionResponse, ConfigUpdateRequest, DomainListUpdateRequest, HistoryEntry, Period,
    UserActionRequest,
};
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use yewdux::prelude::Dispatch;

/// Increments the in-flight counter on creation and decrements it on drop.
struct InFlight {
    dispatch: Dispatch<AppStore>,
}

impl InFlight {
    fn start() -> Self {
        let dispatch = Dispatch::<AppStore>::new();
        dispatch.reduce_mut(|store| store.status.begin());
        Self { dispatch }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.dispatch.reduce_mut(|store| store.status.end());
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub base_url: String,
    pub settings: DashboardSettings,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            settings: DashboardSettings::default(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T>(response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let ok = response.ok();
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode_response(ok, status, &body)
    }

    pub(crate) async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let _in_flight = InFlight::start();
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let _in_flight = InFlight::start();
        let mut request = Request::post(&self.url(path));
        if let Some(body) = body {
            request = request
                .json(body)
                .map_err(|err| ApiError::Encode(err.to_string()))?;
        }
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::decode(response).await
    }

    pub(crate) async fn fetch_history(&self, user_id: i64) -> Result<Vec<HistoryEntry>, ApiError> {
        let path = build_path(
            "/api/user-history",
            &[
                ("user_id", user_id.to_string()),
                ("period", Period::All.as_str().to_string()),
                ("limit", self.settings.limits.user_history.to_string()),
            ],
        );
        self.get_json(&path).await
    }

    pub(crate) async fn run_admin(&self, action: AdminAction) -> Result<ActionResponse, ApiError> {
        self.post_json::<(), _>(action.endpoint(), None).await
    }

    pub(crate) async fn moderate(
        &self,
        action: ModerationAction,
        user_id: i64,
    ) -> Result<ActionResponse, ApiError> {
        let body = UserActionRequest {
            user_id,
            reason: None,
        };
        self.post_json(action.endpoint(), Some(&body)).await
    }

    pub(crate) async fn update_config(
        &self,
        request: &ConfigUpdateRequest,
    ) -> Result<ActionResponse, ApiError> {
        self.post_json("/api/update-config", Some(request)).await
    }

    pub(crate) async fn update_domain_list(
        &self,
        request: &DomainListUpdateRequest,
    ) -> Result<ActionResponse, ApiError> {
        self.post_json("/api/update-domain-list", Some(request)).await
    }

    pub(crate) async fn logout(&self) -> Result<ActionResponse, ApiError> {
        self.post_json::<(), _>(LOGOUT_ENDPOINT, None).await
    }
}

#[async_trait(?Send)]
impl CardSource for ApiClient {
    async fn load(&self, card: CardId, query: &CardQuery) -> Result<CardPayload, ApiError> {
        let paths = card_paths(card, query, &self.settings.limits);
        let path = paths.first().map(String::as_str).unwrap_or_default();
        let payload = match card {
            CardId::ActiveUsers => CardPayload::Active(self.get_json(path).await?),
            CardId::TopDownloaders
            | CardId::NsfwUsers
            | CardId::PlaylistUsers
            | CardId::PowerUsers
            | CardId::BlockedUsers
            | CardId::SuspiciousUsers => CardPayload::Users(self.get_json(path).await?),
            CardId::Countries => CardPayload::Countries(self.get_json(path).await?),
            CardId::Gender => CardPayload::Gender(self.get_json(path).await?),
            CardId::Age => CardPayload::Age(self.get_json(path).await?),
            CardId::Domains | CardId::NsfwDomains => {
                CardPayload::Domains(self.get_json(path).await?)
            }
            CardId::ChannelEvents => CardPayload::Channel(self.get_json(path).await?),
            CardId::SystemMetrics => CardPayload::Metrics(self.get_json(path).await?),
            CardId::PackageVersions => CardPayload::Versions(self.get_json(path).await?),
            CardId::ConfigSettings => CardPayload::Config(self.get_json(path).await?),
            CardId::ListsStats => CardPayload::ListsStats(self.get_json(path).await?),
            CardId::DomainLists => CardPayload::DomainLists(self.get_json(path).await?),
            CardId::HistoryIndex => {
                let second = paths.get(1).map(String::as_str).unwrap_or_default();
                let (top, suspicious) =
                    futures::join!(self.get_json(path), self.get_json(second));
                CardPayload::HistoryIndex(top?, suspicious?)
            }
        };
        Ok(payload)
    }
}
