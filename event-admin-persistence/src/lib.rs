use std::sync::Arc;

use event_admin_domain::{category::ArcCategoryRepository, event::ArcEventRepository};

pub mod mariadb;
mod queries;
pub mod sqlite;

/// Opens lazily connected repositories for `database_url`.
///
/// `sqlite:` URLs select the SQLite store, everything else is handed to the
/// MySQL driver, which accepts both `mysql://` and `mariadb://`.
pub fn open_repositories(
    database_url: &str,
    max_connections: u32,
) -> sqlx::Result<(ArcEventRepository, ArcCategoryRepository)> {
    let event_repository: ArcEventRepository;
    let category_repository: ArcCategoryRepository;

    if database_url.starts_with("sqlite:") {
        log::info!("Using SQLite store");
        let pool = sqlite::create_db_pool(database_url, max_connections)?;
        event_repository = Arc::new(Box::new(sqlite::SqliteEventRepository::new(pool.clone())));
        category_repository = Arc::new(Box::new(sqlite::SqliteCategoryRepository::new(pool)));
    } else {
        log::info!("Using MariaDB store");
        let pool = mariadb::create_db_pool(database_url, max_connections)?;
        event_repository = Arc::new(Box::new(mariadb::MariaDbEventRepository::new(pool.clone())));
        category_repository = Arc::new(Box::new(mariadb::MariaDbCategoryRepository::new(pool)));
    }

    Ok((event_repository, category_repository))
}
