use std::str::FromStr;

use event_admin_persistence::sqlite::create_schema;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL env var not set");
    if !database_url.starts_with("sqlite:") {
        eprintln!("create_db only sets up SQLite databases, got [{}]", database_url);
        std::process::exit(1);
    }

    let connect_options = SqliteConnectOptions::from_str(&database_url)
        .expect("Invalid DATABASE_URL")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options)
        .await
        .expect("Failed to create pool");

    create_schema(&pool)
        .await
        .expect("Failed to create tables");

    println!("Created tables [category, events] in [{}]", database_url);
}
