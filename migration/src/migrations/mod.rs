pub mod m202607010001_create_users;
pub mod m202607010002_create_classes;
pub mod m202607010003_create_class_registrations;
pub mod m202607010004_create_membership_plans;
