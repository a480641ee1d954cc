//! Single-character enum columns shared by several tables.

use sea_orm::entity::prelude::*;

/// Player gender, stored as `M` or `F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum Gender {
    #[sea_orm(string_value = "M")]
    Male,
    #[sea_orm(string_value = "F")]
    Female,
}

/// Which players a tournament admits, stored as `M`, `F` or `U`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum GenderRestriction {
    #[sea_orm(string_value = "M")]
    Male,
    #[sea_orm(string_value = "F")]
    Female,
    #[sea_orm(string_value = "U")]
    Unrestricted,
}

/// Match progress, stored as `F` (finished) or `P` (pending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum MatchStatus {
    #[sea_orm(string_value = "F")]
    Finished,
    #[sea_orm(string_value = "P")]
    Pending,
}

/// Role granted to an application user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum UserRole {
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "RECORDER")]
    Recorder,
    #[sea_orm(string_value = "VIEWER")]
    Viewer,
}
