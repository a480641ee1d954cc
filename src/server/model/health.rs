use crate::model::health::HealthDto;

/// Result of a health probe.
#[derive(Debug, Clone, PartialEq)]
pub struct Health {
    pub database_up: bool,
}

impl Health {
    pub fn into_dto(self) -> HealthDto {
        let (db, status) = if self.database_up {
            ("up", "ok")
        } else {
            ("down", "degraded")
        };

        HealthDto {
            app: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            db: db.to_string(),
            status: status.to_string(),
        }
    }
}
