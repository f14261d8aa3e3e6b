use crate::models::Restaurant;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with the catalog database
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// PostgreSQL-backed catalog store
///
/// Owns the restaurant catalog and the query audit log. The engine never
/// touches this directly: handlers load a catalog snapshot and the style
/// vocabulary up front and pass them in.
pub struct CatalogStore {
    pool: PgPool,
}

impl CatalogStore {
    /// Create a new catalog store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, CatalogError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a new catalog store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, CatalogError> {
        tracing::info!("Connecting to PostgreSQL with URL: {}", url);

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Create the restaurants and query_logs tables if they do not exist
    pub async fn ensure_schema(&self) -> Result<(), CatalogError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS restaurants (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                style TEXT NOT NULL,
                address TEXT NOT NULL DEFAULT '',
                open_hour TEXT NOT NULL,
                close_hour TEXT NOT NULL,
                vegetarian BOOLEAN NOT NULL DEFAULT FALSE,
                deliveries BOOLEAN NOT NULL DEFAULT FALSE
            )
        "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS query_logs (
                id SERIAL PRIMARY KEY,
                query TEXT NOT NULL,
                response TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
        "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert sample restaurants if the catalog is empty
    pub async fn seed_if_empty(&self) -> Result<(), CatalogError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM restaurants")
            .fetch_one(&self.pool)
            .await?;
        let count: i64 = row.get("count");
        if count > 0 {
            return Ok(());
        }

        let samples = sample_restaurants();
        for restaurant in &samples {
            sqlx::query(
                r#"
                INSERT INTO restaurants
                    (name, style, address, open_hour, close_hour, vegetarian, deliveries)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
            )
            .bind(&restaurant.name)
            .bind(&restaurant.style)
            .bind(&restaurant.address)
            .bind(&restaurant.open_hour)
            .bind(&restaurant.close_hour)
            .bind(restaurant.vegetarian)
            .bind(restaurant.deliveries)
            .execute(&self.pool)
            .await?;
        }

        tracing::info!("Seeded catalog with {} sample restaurants", samples.len());

        Ok(())
    }

    /// Get the distinct cuisine styles present in the catalog
    ///
    /// This is the vocabulary the extractor recognizes; a style missing
    /// here is silently ignored in queries.
    pub async fn distinct_styles(&self) -> Result<Vec<String>, CatalogError> {
        let rows = sqlx::query("SELECT DISTINCT style FROM restaurants")
            .fetch_all(&self.pool)
            .await?;

        let styles: Vec<String> = rows.iter().map(|row| row.get("style")).collect();

        tracing::debug!("Loaded {} distinct styles", styles.len());

        Ok(styles)
    }

    /// Get the full catalog in insertion order
    ///
    /// Order matters: the recommender returns the first match.
    pub async fn restaurants(&self) -> Result<Vec<Restaurant>, CatalogError> {
        let rows = sqlx::query(
            r#"
            SELECT name, style, address, open_hour, close_hour, vegetarian, deliveries
            FROM restaurants
            ORDER BY id
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let restaurants: Vec<Restaurant> = rows
            .iter()
            .map(|row| Restaurant {
                name: row.get("name"),
                style: row.get("style"),
                address: row.get("address"),
                open_hour: row.get("open_hour"),
                close_hour: row.get("close_hour"),
                vegetarian: row.get("vegetarian"),
                deliveries: row.get("deliveries"),
            })
            .collect();

        tracing::debug!("Loaded {} restaurants from catalog", restaurants.len());

        Ok(restaurants)
    }

    /// Record a query and its serialized response in the audit log
    pub async fn log_query(&self, query: &str, response: &str) -> Result<(), CatalogError> {
        sqlx::query(
            r#"
            INSERT INTO query_logs (query, response, created_at)
            VALUES ($1, $2, NOW())
        "#,
        )
        .bind(query)
        .bind(response)
        .execute(&self.pool)
        .await?;

        tracing::debug!("Recorded query log for: {}", query);

        Ok(())
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, CatalogError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

/// Sample catalog used when seeding an empty database
pub fn sample_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            name: "Pizza Hut".to_string(),
            style: "Italian".to_string(),
            address: "Wherever Street 99, Somewhere".to_string(),
            open_hour: "09:00".to_string(),
            close_hour: "23:00".to_string(),
            vegetarian: true,
            deliveries: true,
        },
        Restaurant {
            name: "Taco Bell".to_string(),
            style: "Mexican".to_string(),
            address: "123 Burrito Blvd, Somecity".to_string(),
            open_hour: "10:00".to_string(),
            close_hour: "22:00".to_string(),
            vegetarian: false,
            deliveries: true,
        },
        Restaurant {
            name: "Seoul Bites".to_string(),
            style: "Korean".to_string(),
            address: "123 Kimchi Ave, Seoul".to_string(),
            open_hour: "11:00".to_string(),
            close_hour: "22:00".to_string(),
            vegetarian: false,
            deliveries: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_shape() {
        let samples = sample_restaurants();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].name, "Pizza Hut");
        assert!(samples.iter().all(|r| !r.open_hour.is_empty()));
    }
}
