use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

/// Represents an account in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name, trimmed on creation.
    pub name: String,
    /// Unique email address, the login identity.
    pub email: String,
    /// Securely hashed password string.
    pub password_hash: String,
    /// Either `user` or `admin`; gates the admin-only endpoints.
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
pub enum Role {
    #[default]
    #[sea_orm(string_value = "user")]
    User,

    #[sea_orm(string_value = "admin")]
    Admin,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Creates a new account with an argon2-hashed password. A duplicate
    /// email surfaces as a unique-constraint `DbErr` from the insert.
    pub async fn create(
        db: &DbConn,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Model, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| DbErr::Custom(format!("Failed to hash password: {e}")))?
            .to_string();

        let now = Utc::now();
        let user = ActiveModel {
            name: Set(name.trim().to_owned()),
            email: Set(email.trim().to_lowercase()),
            password_hash: Set(password_hash),
            role: Set(role),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        user.insert(db).await
    }

    pub async fn find_by_email(db: &DbConn, email: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email.trim().to_lowercase()))
            .one(db)
            .await
    }

    /// Verifies a login attempt. An unknown email and a wrong password both
    /// come back as `Ok(None)` so callers cannot distinguish the two cases.
    pub async fn verify_credentials(
        db: &DbConn,
        email: &str,
        password: &str,
    ) -> Result<Option<Model>, DbErr> {
        let Some(user) = Model::find_by_email(db, email).await? else {
            return Ok(None);
        };

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| DbErr::Custom(format!("Stored password hash is invalid: {e}")))?;

        if Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
        {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_create_hashes_password() {
        let db = setup_test_db().await;

        let user = Model::create(&db, "Asha", "asha@example.com", "secretpass", Role::User)
            .await
            .unwrap();

        assert_eq!(user.name, "Asha");
        assert_eq!(user.email, "asha@example.com");
        assert_eq!(user.role, Role::User);
        assert_ne!(user.password_hash, "secretpass");
    }

    #[tokio::test]
    async fn test_create_duplicate_email() {
        let db = setup_test_db().await;

        Model::create(&db, "First", "same@example.com", "password1", Role::User)
            .await
            .unwrap();
        let result = Model::create(&db, "Second", "same@example.com", "password2", Role::User).await;

        assert!(result.is_err());
        assert!(crate::is_unique_violation(
            &result.unwrap_err(),
            "users.email"
        ));
    }

    #[tokio::test]
    async fn test_verify_credentials() {
        let db = setup_test_db().await;

        let created = Model::create(&db, "Asha", "asha@example.com", "secretpass", Role::Admin)
            .await
            .unwrap();

        let ok = Model::verify_credentials(&db, "asha@example.com", "secretpass")
            .await
            .unwrap();
        assert_eq!(ok.map(|u| u.id), Some(created.id));

        let wrong_password = Model::verify_credentials(&db, "asha@example.com", "nope")
            .await
            .unwrap();
        assert!(wrong_password.is_none());

        let unknown_email = Model::verify_credentials(&db, "ghost@example.com", "secretpass")
            .await
            .unwrap();
        assert!(unknown_email.is_none());
    }
}
