use sea_orm::DatabaseConnection;

use crate::server::model::health::Health;

pub struct HealthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HealthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Pings the database. A failed ping reports a degraded service instead of an error.
    pub async fn check(&self) -> Health {
        let database_up = match self.db.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Database ping failed: {}", e);
                false
            }
        };

        Health { database_up }
    }
}
