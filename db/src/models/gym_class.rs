use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

/// A scheduled fitness class. `capacity` is advisory: it is stored and
/// returned but never enforced against the registration count.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,
    pub description: String,
    pub instructor: String,
    pub schedule: DateTime<Utc>,
    pub capacity: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::class_registration::Entity")]
    Registrations,
}

impl Related<super::class_registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        name: &str,
        description: &str,
        instructor: &str,
        schedule: DateTime<Utc>,
        capacity: i32,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let class = ActiveModel {
            name: Set(name.trim().to_owned()),
            description: Set(description.to_owned()),
            instructor: Set(instructor.to_owned()),
            schedule: Set(schedule),
            capacity: Set(capacity),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        class.insert(db).await
    }

    /// All classes, ascending by schedule. Equal schedules keep insertion
    /// order (id ascending) so the listing stays deterministic.
    pub async fn get_all_ordered(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_asc(Column::Schedule)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Deletes a class and its registrations. Returns false if no class
    /// with that id existed.
    pub async fn delete_by_id(db: &DbConn, id: i64) -> Result<bool, DbErr> {
        super::class_registration::Entity::delete_many()
            .filter(super::class_registration::Column::ClassId.eq(id))
            .exec(db)
            .await?;

        let result = Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;
    use chrono::Duration;

    #[tokio::test]
    async fn test_create_and_find() {
        let db = setup_test_db().await;

        let schedule = Utc::now() + Duration::days(1);
        let created = Model::create(&db, "  Power Yoga ", "Slow flow", "Maya", schedule, 20)
            .await
            .unwrap();

        assert_eq!(created.name, "Power Yoga");
        assert_eq!(created.instructor, "Maya");
        assert_eq!(created.capacity, 20);

        let found = Model::get_by_id(&db, created.id).await.unwrap();
        assert_eq!(found.map(|c| c.name), Some("Power Yoga".to_string()));
    }

    #[tokio::test]
    async fn test_list_ordered_by_schedule() {
        let db = setup_test_db().await;

        let base = Utc::now();
        let later = Model::create(&db, "HIIT", "d", "Jo", base + Duration::days(3), 10)
            .await
            .unwrap();
        let sooner = Model::create(&db, "Spin", "d", "Jo", base + Duration::days(1), 10)
            .await
            .unwrap();

        let all = Model::get_all_ordered(&db).await.unwrap();
        let ids: Vec<i64> = all.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![sooner.id, later.id]);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = setup_test_db().await;

        let class = Model::create(&db, "Boxing", "d", "Ray", Utc::now(), 12)
            .await
            .unwrap();

        assert!(Model::delete_by_id(&db, class.id).await.unwrap());
        assert!(Model::get_by_id(&db, class.id).await.unwrap().is_none());
        assert!(!Model::delete_by_id(&db, class.id).await.unwrap());
    }
}
