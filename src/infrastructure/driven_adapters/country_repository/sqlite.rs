//! SQLite Country Repository Implementation
//!
//! Implements the CountryRepository trait using SQLx for SQLite. The
//! `name` column collates NOCASE, so every name comparison below is
//! case-insensitive without per-query collation clauses.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::gateways::country_repository::{CountryRepository, UpsertOutcome};
use crate::domain::models::country::{Country, CountryData};
use crate::domain::models::query::CountryQuery;
use crate::domain::models::summary::GdpEntry;
use crate::shared::errors::RepositoryError;

/// Database row representation for the countries table
#[derive(Debug, sqlx::FromRow)]
struct CountryRow {
    name: String,
    capital: Option<String>,
    region: Option<String>,
    population: i64,
    currency_code: Option<String>,
    exchange_rate: Option<f64>,
    estimated_gdp: Option<f64>,
    flag_url: Option<String>,
    last_refreshed_at: DateTime<Utc>,
}

impl From<CountryRow> for Country {
    fn from(row: CountryRow) -> Self {
        Country::new(CountryData {
            name: row.name,
            capital: row.capital,
            region: row.region,
            population: row.population,
            currency_code: row.currency_code,
            exchange_rate: row.exchange_rate,
            estimated_gdp: row.estimated_gdp,
            flag_url: row.flag_url,
            last_refreshed_at: row.last_refreshed_at,
        })
    }
}

const SELECT_COLUMNS: &str = "name, capital, region, population, currency_code, \
                              exchange_rate, estimated_gdp, flag_url, last_refreshed_at";

/// SQLite implementation of CountryRepository
pub struct SqliteCountryRepository {
    pool: SqlitePool,
}

impl SqliteCountryRepository {
    /// Create a new SqliteCountryRepository
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CountryRepository for SqliteCountryRepository {
    async fn upsert(&self, country: &Country) -> Result<UpsertOutcome, RepositoryError> {
        // One transaction per record: the existence probe and the write
        // are atomic, and concurrent refreshes degrade to last-writer-wins.
        let mut tx = self.pool.begin().await?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM countries WHERE name = ?1)")
                .bind(country.name())
                .fetch_one(&mut *tx)
                .await?;

        sqlx::query(
            r#"
            INSERT INTO countries (
                name, capital, region, population, currency_code,
                exchange_rate, estimated_gdp, flag_url, last_refreshed_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ON CONFLICT(name) DO UPDATE SET
                name = excluded.name,
                capital = excluded.capital,
                region = excluded.region,
                population = excluded.population,
                currency_code = excluded.currency_code,
                exchange_rate = excluded.exchange_rate,
                estimated_gdp = excluded.estimated_gdp,
                flag_url = excluded.flag_url,
                last_refreshed_at = excluded.last_refreshed_at
            "#,
        )
        .bind(country.name())
        .bind(country.capital())
        .bind(country.region())
        .bind(country.population())
        .bind(country.currency_code())
        .bind(country.exchange_rate())
        .bind(country.estimated_gdp())
        .bind(country.flag_url())
        .bind(country.last_refreshed_at())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(if exists {
            UpsertOutcome::Updated
        } else {
            UpsertOutcome::Created
        })
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Country>, RepositoryError> {
        let row = sqlx::query_as::<_, CountryRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM countries WHERE name = ?1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Country::from))
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM countries WHERE name = ?1")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, query: &CountryQuery) -> Result<Vec<Country>, RepositoryError> {
        let mut sql = format!("SELECT {SELECT_COLUMNS} FROM countries");

        let mut conditions: Vec<&str> = Vec::new();
        if query.region.is_some() {
            // LIKE is case-insensitive for ASCII in SQLite
            conditions.push("region LIKE '%' || ? || '%'");
        }
        if query.currency.is_some() {
            conditions.push("currency_code = ? COLLATE NOCASE");
        }
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        if let Some(sort) = query.sort {
            sql.push_str(" ORDER BY ");
            sql.push_str(sort.order_clause());
        }

        let mut statement = sqlx::query_as::<_, CountryRow>(&sql);
        if let Some(region) = &query.region {
            statement = statement.bind(region);
        }
        if let Some(currency) = &query.currency {
            statement = statement.bind(currency);
        }

        let rows = statement.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Country::from).collect())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM countries")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn most_recent_refresh(&self) -> Result<Option<DateTime<Utc>>, RepositoryError> {
        let latest: Option<DateTime<Utc>> =
            sqlx::query_scalar("SELECT MAX(last_refreshed_at) FROM countries")
                .fetch_one(&self.pool)
                .await?;
        Ok(latest)
    }

    async fn top_by_gdp(&self, limit: u32) -> Result<Vec<GdpEntry>, RepositoryError> {
        let rows: Vec<(String, f64)> = sqlx::query_as(
            r#"
            SELECT name, estimated_gdp FROM countries
            WHERE estimated_gdp IS NOT NULL
            ORDER BY estimated_gdp DESC
            LIMIT ?1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(name, estimated_gdp)| GdpEntry {
                name,
                estimated_gdp,
            })
            .collect())
    }
}
