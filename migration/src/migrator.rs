use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202607010001_create_users::Migration),
            Box::new(migrations::m202607010002_create_classes::Migration),
            Box::new(migrations::m202607010003_create_class_registrations::Migration),
            Box::new(migrations::m202607010004_create_membership_plans::Migration),
        ]
    }
}
