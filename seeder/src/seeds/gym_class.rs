use crate::seed::Seeder;
use chrono::{Duration, Utc};
use db::models::gym_class::Model;
use sea_orm::DatabaseConnection;

pub struct GymClassSeeder;

#[async_trait::async_trait]
impl Seeder for GymClassSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let classes = [
            (
                "Power Yoga",
                "Strength-focused vinyasa flow for all levels.",
                "Maya Rao",
                1,
                9,
                20,
            ),
            (
                "Olympic Lifting",
                "Snatch and clean & jerk technique work.",
                "Dev Kapoor",
                1,
                18,
                8,
            ),
            (
                "Spin 45",
                "High-cadence interval ride with live metrics.",
                "Jo Fernandes",
                2,
                7,
                25,
            ),
            (
                "Boxing Fundamentals",
                "Footwork, pad work and conditioning.",
                "Ray Mistry",
                3,
                19,
                16,
            ),
        ];

        for (name, description, instructor, day_offset, hour, capacity) in classes {
            let schedule = (Utc::now() + Duration::days(day_offset))
                .date_naive()
                .and_hms_opt(hour, 0, 0)
                .expect("valid class time")
                .and_utc();
            let _ = Model::create(db, name, description, instructor, schedule, capacity).await;
        }

        // A few fillers at random offsets so the list view has depth.
        for i in 0..4 {
            let schedule = Utc::now() + Duration::days(4 + i) + Duration::hours(fastrand::i64(6..20));
            let _ = Model::create(
                db,
                &format!("Open Gym {}", i + 1),
                "Unstructured floor time with a coach on hand.",
                "Floor Team",
                schedule,
                30,
            )
            .await;
        }
    }
}
