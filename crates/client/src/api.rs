use liftplan_plan::{PlanView, ReplacePlanRequest, Weekday};
use liftplan_workout::Workout;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};

/// Acknowledgement body returned by the delete endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Thin typed wrapper over the HTTP API. One method per endpoint; every
/// method decodes the server's error body into [`ClientError::Api`] on a
/// non-success status.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn list_workouts(&self) -> ClientResult<Vec<Workout>> {
        let response = self
            .http
            .get(format!("{}/workouts", self.base_url))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create_workout(&self, name: &str) -> ClientResult<Workout> {
        let response = self
            .http
            .post(format!("{}/workouts", self.base_url))
            .json(&serde_json::json!({"name": name}))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn get_workout(&self, id: &str) -> ClientResult<Workout> {
        let response = self
            .http
            .get(format!("{}/workouts/{}", self.base_url, id))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update_workout(&self, id: &str, name: &str) -> ClientResult<Workout> {
        let response = self
            .http
            .put(format!("{}/workouts/{}", self.base_url, id))
            .json(&serde_json::json!({"name": name}))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_workout(&self, id: &str) -> ClientResult<MessageResponse> {
        let response = self
            .http
            .delete(format!("{}/workouts/{}", self.base_url, id))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn list_plans(&self) -> ClientResult<Vec<PlanView>> {
        let response = self
            .http
            .get(format!("{}/workout-plans", self.base_url))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn get_plan(&self, day: Weekday) -> ClientResult<PlanView> {
        let response = self
            .http
            .get(format!("{}/workout-plans/{}", self.base_url, day))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn replace_plan(
        &self,
        day: Weekday,
        request: &ReplacePlanRequest,
    ) -> ClientResult<PlanView> {
        let response = self
            .http
            .patch(format!("{}/workout-plans/{}", self.base_url, day))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    if response.status().is_success() {
        return Ok(response.json().await?);
    }

    let status = response.status().as_u16();
    let payload: serde_json::Value = response.json().await.unwrap_or_default();
    let message = payload["message"]
        .as_str()
        .unwrap_or("request failed")
        .to_string();

    Err(ClientError::Api { status, message })
}
