use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Links a member to a class they have signed up for. The relational
/// rendition of the class document's embedded member-reference list.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "class_registrations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub class_id: i64,
    pub user_id: i64,

    pub registered_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::gym_class::Entity",
        from = "Column::ClassId",
        to = "super::gym_class::Column::Id",
        on_delete = "Cascade"
    )]
    Class,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::gym_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn register(db: &DbConn, class_id: i64, user_id: i64) -> Result<Model, DbErr> {
        let registration = ActiveModel {
            class_id: Set(class_id),
            user_id: Set(user_id),
            registered_at: Set(Utc::now()),
            ..Default::default()
        };

        registration.insert(db).await
    }

    pub async fn is_registered(db: &DbConn, class_id: i64, user_id: i64) -> Result<bool, DbErr> {
        let found = Entity::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::UserId.eq(user_id))
            .one(db)
            .await?;
        Ok(found.is_some())
    }

    /// Removes a registration. Returns false if the member was not
    /// registered for the class.
    pub async fn unregister(db: &DbConn, class_id: i64, user_id: i64) -> Result<bool, DbErr> {
        let result = Entity::delete_many()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::UserId.eq(user_id))
            .exec(db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn member_ids(db: &DbConn, class_id: i64) -> Result<Vec<i64>, DbErr> {
        let rows = Entity::find()
            .filter(Column::ClassId.eq(class_id))
            .all(db)
            .await?;
        Ok(rows.into_iter().map(|r| r.user_id).collect())
    }

    /// Member ids for a batch of classes, keyed by class id. Classes with
    /// no registrations are simply absent from the map.
    pub async fn member_ids_for(
        db: &DbConn,
        class_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<i64>>, DbErr> {
        if class_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = Entity::find()
            .filter(Column::ClassId.is_in(class_ids.to_vec()))
            .all(db)
            .await?;

        let mut by_class: HashMap<i64, Vec<i64>> = HashMap::new();
        for row in rows {
            by_class.entry(row.class_id).or_default().push(row.user_id);
        }
        Ok(by_class)
    }
}
