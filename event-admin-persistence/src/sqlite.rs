use std::str::FromStr;

use event_admin_domain::{
    ServiceError, ServiceResult,
    category::{Category, CategoryId, CategoryRepository},
    event::{EventId, EventRepository, NewEvent},
};
use crate::queries;
use sqlx::{
    Pool, Row, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

const CREATE_CATEGORY_TABLE: &str = "CREATE TABLE IF NOT EXISTS category (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
)";

const CREATE_EVENTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    image TEXT NOT NULL DEFAULT '',
    promoted BOOLEAN NOT NULL DEFAULT 0,
    date TEXT NOT NULL DEFAULT '',
    price TEXT NOT NULL DEFAULT '',
    location TEXT NOT NULL DEFAULT '',
    organizer TEXT NOT NULL DEFAULT '',
    category_id INTEGER NOT NULL REFERENCES category(id)
)";

pub fn create_db_pool(database_url: &str, max_connections: u32) -> sqlx::Result<Pool<Sqlite>> {
    let conn_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(false);

    Ok(SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(conn_options))
}

/// A single-connection in-memory database that lives as long as the pool.
pub fn create_memory_pool() -> sqlx::Result<Pool<Sqlite>> {
    let conn_options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    Ok(SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_lazy_with(conn_options))
}

pub async fn create_schema(pool: &Pool<Sqlite>) -> sqlx::Result<()> {
    sqlx::query(CREATE_CATEGORY_TABLE).execute(pool).await?;
    sqlx::query(CREATE_EVENTS_TABLE).execute(pool).await?;
    Ok(())
}

pub struct SqliteEventRepository {
    pool: Pool<Sqlite>,
}

impl SqliteEventRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl EventRepository for SqliteEventRepository {
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

        Ok(result.last_insert_rowid())
    }
}

pub struct SqliteCategoryRepository {
    pool: Pool<Sqlite>,
}

impl SqliteCategoryRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CategoryRepository for SqliteCategoryRepository {
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

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded_pool() -> Pool<Sqlite> {
        let pool = create_memory_pool().unwrap();
        create_schema(&pool).await.unwrap();
        for (id, name) in [(1, "Music"), (2, "Theatre"), (5, "Sports")] {
            sqlx::query("INSERT INTO category (id, name) VALUES (?, ?)")
                .bind(id)
                .bind(name)
                .execute(&pool)
                .await
                .unwrap();
        }
        pool
    }

    fn test_event(category_id: CategoryId) -> NewEvent {
        NewEvent {
            name: "Summer Jam".to_string(),
            description: "Open air concert".to_string(),
            image_url: "https://example.com/jam.png".to_string(),
            promoted: true,
            date: "2026-07-01".to_string(),
            price: "25.50".to_string(),
            location: "City Park".to_string(),
            organizer: "Jam Collective".to_string(),
            category_id,
        }
    }

    async fn count_events(pool: &Pool<Sqlite>) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_category_exists() {
        let repo = SqliteCategoryRepository::new(seeded_pool().await);
        assert!(repo.category_exists(1).await.unwrap());
        assert!(repo.category_exists(5).await.unwrap());
        assert!(!repo.category_exists(3).await.unwrap());
        assert!(!repo.category_exists(999).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_categories_returns_all_rows() {
        let repo = SqliteCategoryRepository::new(seeded_pool().await);
        let categories = repo.get_categories().await.unwrap();
        assert_eq!(
            categories,
            vec![
                Category {
                    id: 1,
                    name: "Music".to_string()
                },
                Category {
                    id: 2,
                    name: "Theatre".to_string()
                },
                Category {
                    id: 5,
                    name: "Sports".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_insert_event_assigns_ids() {
        let pool = seeded_pool().await;
        let repo = SqliteEventRepository::new(pool.clone());

        let first = repo.insert_event(&test_event(1)).await.unwrap();
        let second = repo.insert_event(&test_event(2)).await.unwrap();
        assert!(second > first);
        assert_eq!(count_events(&pool).await, 2);

        let row = sqlx::query("SELECT * FROM events WHERE id = ?")
            .bind(first)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(row.get::<String, _>("name"), "Summer Jam");
        assert_eq!(row.get::<String, _>("image"), "https://example.com/jam.png");
        assert!(row.get::<bool, _>("promoted"));
        assert_eq!(row.get::<String, _>("price"), "25.50");
        assert_eq!(row.get::<String, _>("organizer"), "Jam Collective");
        assert_eq!(row.get::<i64, _>("category_id"), 1);
    }

    #[tokio::test]
    async fn test_unreachable_store() {
        let pool = create_db_pool("sqlite:///nonexistent-dir/events.db", 1).unwrap();
        let events = SqliteEventRepository::new(pool.clone());
        let categories = SqliteCategoryRepository::new(pool);

        assert!(matches!(
            categories.category_exists(1).await,
            Err(ServiceError::PersistenceFailure(..))
        ));
        assert!(matches!(
            categories.get_categories().await,
            Err(ServiceError::PersistenceFailure(..))
        ));
        assert!(matches!(
            events.insert_event(&test_event(1)).await,
            Err(ServiceError::PersistenceFailure(..))
        ));
    }
}
