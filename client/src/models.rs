//! Wire types mirroring the API's JSON bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanDuration {
    Monthly,
    Quarterly,
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTheme {
    Starter,
    Performance,
    Elite,
}

/// Body of a successful register/login call.
#[derive(Debug, Clone, Deserialize)]
pub struct UserAuth {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
    pub expires_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GymClass {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub instructor: String,
    pub schedule: DateTime<Utc>,
    pub capacity: i32,
    pub registered_members: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MembershipPlan {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub duration: PlanDuration,
    pub features: Vec<String>,
    pub popular: bool,
    pub theme: PlanTheme,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassPayload {
    pub name: String,
    pub description: String,
    pub instructor: String,
    pub schedule: DateTime<Utc>,
    pub capacity: i32,
}

/// Partial class update; absent fields are left unchanged server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanPayload {
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub duration: PlanDuration,
    pub features: Vec<String>,
    pub popular: bool,
    pub theme: PlanTheme,
}

/// Partial plan update; absent fields are left unchanged server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlanUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<PlanDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<PlanTheme>,
}
