use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, FromJsonQueryResult, QueryOrder};
use serde::{Deserialize, Serialize};

/// A membership plan offered by the gym. `name` carries a unique index;
/// callers must surface its violation as a conflict, not a server error.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "membership_plans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub duration: PlanDuration,
    #[sea_orm(column_type = "Json")]
    pub features: Features,
    pub popular: bool,
    pub theme: PlanTheme,

    pub created_at: DateTime<Utc>,
}

/// Ordered feature bullet list, stored as a JSON array column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Features(pub Vec<String>);

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "plan_duration")]
pub enum PlanDuration {
    #[default]
    #[sea_orm(string_value = "monthly")]
    Monthly,

    #[sea_orm(string_value = "quarterly")]
    Quarterly,

    #[sea_orm(string_value = "yearly")]
    Yearly,
}

/// Closed display category replacing the free-text color/icon strings the
/// admin form used to accept. The client resolves each theme to its
/// display metadata through a static table.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "plan_theme")]
pub enum PlanTheme {
    #[default]
    #[sea_orm(string_value = "starter")]
    Starter,

    #[sea_orm(string_value = "performance")]
    Performance,

    #[sea_orm(string_value = "elite")]
    Elite,
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
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        db: &DbConn,
        name: &str,
        price: f64,
        original_price: Option<f64>,
        duration: PlanDuration,
        features: Vec<String>,
        popular: bool,
        theme: PlanTheme,
    ) -> Result<Model, DbErr> {
        let plan = ActiveModel {
            name: Set(name.trim().to_owned()),
            price: Set(price),
            original_price: Set(original_price),
            duration: Set(duration),
            features: Set(Features(features)),
            popular: Set(popular),
            theme: Set(theme),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        plan.insert(db).await
    }

    /// All plans, cheapest first; price ties keep insertion order.
    pub async fn get_all_ordered(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_asc(Column::Price)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// True if another plan (any id but `exclude_id`) already uses `name`.
    pub async fn name_taken(
        db: &DbConn,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, DbErr> {
        let mut condition = Condition::all().add(Column::Name.eq(name.trim()));
        if let Some(id) = exclude_id {
            condition = condition.add(Column::Id.ne(id));
        }

        let found = Entity::find().filter(condition).one(db).await?;
        Ok(found.is_some())
    }

    pub async fn delete_by_id(db: &DbConn, id: i64) -> Result<bool, DbErr> {
        let result = Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_create_and_list_by_price() {
        let db = setup_test_db().await;

        let pro = Model::create(
            &db,
            "Pro",
            59.0,
            Some(79.0),
            PlanDuration::Quarterly,
            vec!["All classes".into(), "Sauna".into()],
            true,
            PlanTheme::Performance,
        )
        .await
        .unwrap();
        let basic = Model::create(
            &db,
            "Basic",
            29.0,
            None,
            PlanDuration::Monthly,
            vec![],
            false,
            PlanTheme::Starter,
        )
        .await
        .unwrap();

        let all = Model::get_all_ordered(&db).await.unwrap();
        let ids: Vec<i64> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![basic.id, pro.id]);
        assert_eq!(all[1].features.0, vec!["All classes", "Sauna"]);
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let db = setup_test_db().await;

        Model::create(
            &db,
            "Basic",
            29.0,
            None,
            PlanDuration::Monthly,
            vec![],
            false,
            PlanTheme::Starter,
        )
        .await
        .unwrap();

        let duplicate = Model::create(
            &db,
            "Basic",
            39.0,
            None,
            PlanDuration::Yearly,
            vec![],
            false,
            PlanTheme::Starter,
        )
        .await;

        assert!(duplicate.is_err());
        assert!(crate::is_unique_violation(
            &duplicate.unwrap_err(),
            "membership_plans.name"
        ));
    }

    #[tokio::test]
    async fn test_name_taken() {
        let db = setup_test_db().await;

        let basic = Model::create(
            &db,
            "Basic",
            29.0,
            None,
            PlanDuration::Monthly,
            vec![],
            false,
            PlanTheme::Starter,
        )
        .await
        .unwrap();

        assert!(Model::name_taken(&db, "Basic", None).await.unwrap());
        assert!(!Model::name_taken(&db, "Basic", Some(basic.id)).await.unwrap());
        assert!(!Model::name_taken(&db, "Elite", None).await.unwrap());
    }
}
