use crate::seed::Seeder;
use db::models::user::{Model, Role};
use fake::{Fake, faker::internet::en::SafeEmail, faker::name::en::Name};
use sea_orm::DatabaseConnection;

pub struct UserSeeder;

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        // Fixed admin account
        let _ = Model::create(db, "Admin", "admin@example.com", "password123", Role::Admin).await;

        // Fixed member account
        let _ = Model::create(db, "Member", "user@example.com", "password123", Role::User).await;

        // Random members
        for _ in 0..10 {
            let name: String = Name().fake();
            let email: String = SafeEmail().fake();
            let _ = Model::create(db, &name, &email, "password123", Role::User).await;
        }
    }
}
