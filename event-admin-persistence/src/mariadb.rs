use std::str::FromStr;

use event_admin_domain::{
    ServiceError, ServiceResult,
    category::{Category, CategoryId, CategoryRepository},
    event::{EventId, EventRepository, NewEvent},
};
use crate::queries;
use sqlx::{
    MySql, Pool, Row,
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
};

pub fn create_db_pool(database_url: &str, max_connections: u32) -> sqlx::Result<Pool<MySql>> {
    let conn_options = MySqlConnectOptions::from_str(database_url)?;

    Ok(MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(conn_options))
}

pub struct MariaDbEventRepository {
    pool: Pool<MySql>,
}

impl MariaDbEventRepository {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl EventRepository for MariaDbEventRepository {
    async fn insert_event(&self, event: &NewEvent) -> ServiceResult<EventId> {
        let result = sqlx::query(queries::INSERT_EVENT)
        .bind(&event.name)
        .bind(&event.description)
        .bind(&event.image_url)
        .bind(event.promoted)
        .bind(&event.date)
        .bind(&event.price)
        .bind(&event.location)
        .bind(&event.organizer)
        .bind(event.category_id)
        .execute(&self.pool)
        .await
        .map_err(|e| ServiceError::PersistenceFailure(e.to_string()))?;

        Ok(result.last_insert_id() as EventId)
    }
}

pub struct MariaDbCategoryRepository {
    pool: Pool<MySql>,
}

impl MariaDbCategoryRepository {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CategoryRepository for MariaDbCategoryRepository {
    async fn category_exists(&self, id: CategoryId) -> ServiceResult<bool> {
        let row = sqlx::query(queries::CATEGORY_EXISTS)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ServiceError::PersistenceFailure(e.to_string()))?;
        Ok(row.is_some())
    }

    async fn get_categories(&self) -> ServiceResult<Vec<Category>> {
        let rows = sqlx::query(queries::LIST_CATEGORIES)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ServiceError::PersistenceFailure(e.to_string()))?;
        rows.into_iter()
            .map(|row| -> sqlx::Result<Category> {
                Ok(Category {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                })
            })
            .collect::<sqlx::Result<Vec<Category>>>()
            .map_err(|e| ServiceError::PersistenceFailure(e.to_string()))
    }
}
