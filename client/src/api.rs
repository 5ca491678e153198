use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::models::{
    ClassPayload, ClassUpdate, GymClass, MembershipPlan, PlanPayload, PlanUpdate, UserAuth,
};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with its error envelope.
    #[error("{message} (status {status})")]
    Api { status: StatusCode, message: String },
}

/// Every response body uses the `{success, data, message}` envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    message: String,
}

/// Typed HTTP client for the gym API. Holds an optional bearer token that
/// is attached to every request once present.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            token: None,
        }
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    async fn send<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Envelope<T>, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));

        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let envelope: Envelope<T> = response.json().await?;

        if !status.is_success() || !envelope.success {
            return Err(ClientError::Api {
                status,
                message: envelope.message,
            });
        }

        Ok(envelope)
    }

    async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let envelope = self.send(method, path, body).await?;
        envelope.data.ok_or(ClientError::Api {
            status: StatusCode::OK,
            message: "response body had no data".into(),
        })
    }

    /// For endpoints whose success payload is just the message marker.
    async fn request_empty(&self, method: Method, path: &str) -> Result<(), ClientError> {
        self.send::<serde_json::Value, ()>(method, path, None)
            .await?;
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    // --- auth ---

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserAuth, ClientError> {
        self.request(
            Method::POST,
            "/api/auth/register",
            Some(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
            })),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<UserAuth, ClientError> {
        self.request(
            Method::POST,
            "/api/auth/login",
            Some(&serde_json::json!({
                "email": email,
                "password": password,
            })),
        )
        .await
    }

    // --- classes ---

    pub async fn list_classes(&self) -> Result<Vec<GymClass>, ClientError> {
        self.get("/api/classes").await
    }

    pub async fn create_class(&self, payload: &ClassPayload) -> Result<GymClass, ClientError> {
        self.request(Method::POST, "/api/classes", Some(payload))
            .await
    }

    pub async fn update_class(
        &self,
        class_id: i64,
        update: &ClassUpdate,
    ) -> Result<GymClass, ClientError> {
        self.request(
            Method::PUT,
            &format!("/api/classes/{class_id}"),
            Some(update),
        )
        .await
    }

    pub async fn delete_class(&self, class_id: i64) -> Result<(), ClientError> {
        self.request_empty(Method::DELETE, &format!("/api/classes/{class_id}"))
            .await
    }

    pub async fn register_for_class(&self, class_id: i64) -> Result<GymClass, ClientError> {
        self.request::<GymClass, ()>(
            Method::POST,
            &format!("/api/classes/{class_id}/register"),
            None,
        )
        .await
    }

    pub async fn unregister_from_class(&self, class_id: i64) -> Result<(), ClientError> {
        self.request_empty(Method::DELETE, &format!("/api/classes/{class_id}/register"))
            .await
    }

    // --- membership plans ---

    pub async fn list_memberships(&self) -> Result<Vec<MembershipPlan>, ClientError> {
        self.get("/api/memberships").await
    }

    pub async fn get_membership(&self, plan_id: i64) -> Result<MembershipPlan, ClientError> {
        self.get(&format!("/api/memberships/{plan_id}")).await
    }

    pub async fn create_membership(
        &self,
        payload: &PlanPayload,
    ) -> Result<MembershipPlan, ClientError> {
        self.request(Method::POST, "/api/memberships", Some(payload))
            .await
    }

    pub async fn update_membership(
        &self,
        plan_id: i64,
        update: &PlanUpdate,
    ) -> Result<MembershipPlan, ClientError> {
        self.request(
            Method::PUT,
            &format!("/api/memberships/{plan_id}"),
            Some(update),
        )
        .await
    }

    pub async fn delete_membership(&self, plan_id: i64) -> Result<(), ClientError> {
        self.request_empty(Method::DELETE, &format!("/api/memberships/{plan_id}"))
            .await
    }

    // --- health ---

    pub async fn health(&self) -> Result<String, ClientError> {
        self.get("/api/health").await
    }
}
