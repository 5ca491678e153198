//! Membership plan request/response models.

use db::models::membership_plan::{Model as MembershipPlan, PlanDuration, PlanTheme};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub static NON_BLANK_REGEX: Lazy<regex::Regex> = Lazy::new(|| regex::Regex::new(r"\S").unwrap());

#[derive(Debug, Deserialize, Validate)]
pub struct MembershipPlanRequest {
    #[validate(
        regex(path = *NON_BLANK_REGEX, message = "Name is required"),
        length(max = 100, message = "Name must be at most 100 characters")
    )]
    pub name: String,

    #[validate(range(min = 0.0, message = "Price must be zero or greater"))]
    pub price: f64,

    #[validate(range(min = 0.0, message = "Original price must be zero or greater"))]
    pub original_price: Option<f64>,

    pub duration: PlanDuration,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub popular: bool,

    #[serde(default)]
    pub theme: PlanTheme,
}

#[derive(Debug, Deserialize, Validate)]
pub struct EditMembershipPlanRequest {
    #[validate(
        regex(path = *NON_BLANK_REGEX, message = "Name is required"),
        length(max = 100, message = "Name must be at most 100 characters")
    )]
    pub name: Option<String>,

    #[validate(range(min = 0.0, message = "Price must be zero or greater"))]
    pub price: Option<f64>,

    #[validate(range(min = 0.0, message = "Original price must be zero or greater"))]
    pub original_price: Option<f64>,

    pub duration: Option<PlanDuration>,
    pub features: Option<Vec<String>>,
    pub popular: Option<bool>,
    pub theme: Option<PlanTheme>,
}

#[derive(Debug, Serialize, Default)]
pub struct MembershipPlanResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub duration: PlanDuration,
    pub features: Vec<String>,
    pub popular: bool,
    pub theme: PlanTheme,
    pub created_at: String,
}

impl From<MembershipPlan> for MembershipPlanResponse {
    fn from(plan: MembershipPlan) -> Self {
        Self {
            id: plan.id,
            name: plan.name,
            price: plan.price,
            original_price: plan.original_price,
            duration: plan.duration,
            features: plan.features.0,
            popular: plan.popular,
            theme: plan.theme,
            created_at: plan.created_at.to_rfc3339(),
        }
    }
}
