use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    gym_class::GymClassSeeder, membership_plan::MembershipPlanSeeder, user::UserSeeder,
};

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    common::Config::init(".env");
    let db = db::connect().await;

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder + Send + Sync>, "User"),
        (Box::new(GymClassSeeder), "GymClass"),
        (Box::new(MembershipPlanSeeder), "MembershipPlan"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
