//! Direct PostgreSQL access to the Supabase database via sqlx.
//! Identifiers are fixed; every value is bound as a parameter.

use super::{FormationStore, TABLE};
use crate::error::StoreError;
use crate::model::{FormationRow, FormationRowPatch, NewFormationRow};
use async_trait::async_trait;
use sqlx::PgPool;

/// id and dates come back as text so they map onto `FormationRow` whatever the column types.
const SELECT_COLUMNS: &str =
    "id::text AS id, name, description, skills_description, start_date::text AS start_date, end_date::text AS end_date";

const DATE_COLUMNS: &[&str] = &["start_date", "end_date"];

fn placeholder(col: &str, n: usize) -> String {
    if DATE_COLUMNS.contains(&col) {
        format!("${}::date", n)
    } else {
        format!("${}", n)
    }
}

/// UPDATE by id setting only the present columns. Returns SQL and binds in order (id last).
/// `None` when the patch has no field.
pub fn update_sql<'a>(id: &'a str, patch: &'a FormationRowPatch) -> Option<(String, Vec<&'a str>)> {
    let columns = patch.columns();
    if columns.is_empty() {
        return None;
    }
    let mut params = Vec::with_capacity(columns.len() + 1);
    let mut sets = Vec::with_capacity(columns.len());
    for (col, value) in columns {
        params.push(value);
        sets.push(format!("{} = {}", col, placeholder(col, params.len())));
    }
    params.push(id);
    let sql = format!(
        "UPDATE {} SET {} WHERE id::text = ${} RETURNING {}",
        TABLE,
        sets.join(", "),
        params.len(),
        SELECT_COLUMNS
    );
    Some((sql, params))
}

fn insert_sql() -> String {
    format!(
        "INSERT INTO {} (name, description, skills_description, start_date, end_date) VALUES ($1, $2, $3, $4::date, $5::date) RETURNING {}",
        TABLE, SELECT_COLUMNS
    )
}

#[derive(Clone)]
pub struct PostgresFormationStore {
    pool: PgPool,
}

impl PostgresFormationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FormationStore for PostgresFormationStore {
    async fn list(&self) -> Result<Vec<FormationRow>, StoreError> {
        let sql = format!("SELECT {} FROM {} ORDER BY created_at DESC", SELECT_COLUMNS, TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, FormationRow>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get(&self, id: &str) -> Result<Option<FormationRow>, StoreError> {
        let sql = format!("SELECT {} FROM {} WHERE id::text = $1", SELECT_COLUMNS, TABLE);
        tracing::debug!(sql = %sql, id = %id, "query");
        let row = sqlx::query_as::<_, FormationRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, row: &NewFormationRow) -> Result<Option<FormationRow>, StoreError> {
        let sql = insert_sql();
        tracing::debug!(sql = %sql, "query");
        let created = sqlx::query_as::<_, FormationRow>(&sql)
            .bind(&row.name)
            .bind(&row.description)
            .bind(&row.skills_description)
            .bind(&row.start_date)
            .bind(&row.end_date)
            .fetch_optional(&self.pool)
            .await?;
        Ok(created)
    }

    async fn update(&self, id: &str, patch: &FormationRowPatch) -> Result<Option<FormationRow>, StoreError> {
        let Some((sql, params)) = update_sql(id, patch) else {
            return self.get(id).await;
        };
        tracing::debug!(sql = %sql, params = ?params, "query");
        let mut query = sqlx::query_as::<_, FormationRow>(&sql);
        for p in params {
            query = query.bind(p);
        }
        let row = query.fetch_optional(&self.pool).await?;
        Ok(row)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM {} WHERE id::text = $1", TABLE);
        tracing::debug!(sql = %sql, id = %id, "query");
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let sql = format!("SELECT id::text FROM {} LIMIT 1", TABLE);
        sqlx::query(&sql).fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn list_names(&self) -> Result<Vec<String>, StoreError> {
        let sql = format!("SELECT name FROM {}", TABLE);
        let names: Vec<(String,)> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(names.into_iter().map(|(n,)| n).collect())
    }

    async fn insert_many(&self, rows: &[NewFormationRow]) -> Result<(), StoreError> {
        let sql = insert_sql();
        let mut tx = self.pool.begin().await?;
        for row in rows {
            tracing::debug!(sql = %sql, name = %row.name, "query (tx)");
            sqlx::query(&sql)
                .bind(&row.name)
                .bind(&row.description)
                .bind(&row.skills_description)
                .bind(&row.start_date)
                .bind(&row.end_date)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_sets_only_present_columns() {
        let patch = FormationRowPatch {
            description: Some("Nouveau texte".into()),
            end_date: Some("2026-01-10".into()),
            ..Default::default()
        };
        let (sql, params) = update_sql("123", &patch).unwrap();
        assert_eq!(
            sql,
            format!(
                "UPDATE formations SET description = $1, end_date = $2::date WHERE id::text = $3 RETURNING {}",
                SELECT_COLUMNS
            )
        );
        assert_eq!(params, vec!["Nouveau texte", "2026-01-10", "123"]);
    }

    #[test]
    fn empty_patch_builds_no_statement() {
        assert!(update_sql("123", &FormationRowPatch::default()).is_none());
    }

    #[test]
    fn insert_casts_dates() {
        let sql = insert_sql();
        assert!(sql.starts_with("INSERT INTO formations (name, description, skills_description, start_date, end_date)"));
        assert!(sql.contains("$4::date, $5::date"));
    }
}
