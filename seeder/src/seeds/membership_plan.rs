use crate::seed::Seeder;
use db::models::membership_plan::{Model, PlanDuration, PlanTheme};
use sea_orm::DatabaseConnection;

pub struct MembershipPlanSeeder;

#[async_trait::async_trait]
impl Seeder for MembershipPlanSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let _ = Model::create(
            db,
            "Basic",
            29.0,
            None,
            PlanDuration::Monthly,
            vec![
                "Gym floor access".into(),
                "Locker room".into(),
                "1 group class per week".into(),
            ],
            false,
            PlanTheme::Starter,
        )
        .await;

        let _ = Model::create(
            db,
            "Pro",
            149.0,
            Some(179.0),
            PlanDuration::Quarterly,
            vec![
                "Unlimited group classes".into(),
                "Sauna and recovery zone".into(),
                "Monthly body composition scan".into(),
            ],
            true,
            PlanTheme::Performance,
        )
        .await;

        let _ = Model::create(
            db,
            "Elite",
            499.0,
            Some(599.0),
            PlanDuration::Yearly,
            vec![
                "Everything in Pro".into(),
                "4 personal training sessions per month".into(),
                "Guest passes".into(),
                "Nutrition consultation".into(),
            ],
            false,
            PlanTheme::Elite,
        )
        .await;
    }
}
