use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::product::models::Price;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductName;
use crate::domain::product::pagination::PageRequest;
use crate::domain::product::ports::ProductRepository;
use crate::product::errors::ProductError;

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub async fn new(pool: PgPool) -> Result<Self, anyhow::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                price DOUBLE PRECISION NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS products_created_at_idx ON products (created_at)")
            .execute(&pool)
            .await?;

        Ok(Self { pool })
    }
}

/// SELECT for an ordered listing; windowed requests bind LIMIT as $1 and OFFSET as $2.
fn listing_query(request: &PageRequest) -> String {
    let mut query = format!(
        "SELECT id, name, price, created_at FROM products ORDER BY created_at {}",
        request.sort.as_sql()
    );
    if request.window().is_some() {
        query.push_str(" LIMIT $1 OFFSET $2");
    }
    query
}

fn product_from_row(row: PgRow) -> Result<Product, ProductError> {
    let db = |e: sqlx::Error| ProductError::DatabaseError(e.to_string());

    Ok(Product {
        id: ProductId(row.try_get("id").map_err(db)?),
        name: ProductName::new(row.try_get("name").map_err(db)?)?,
        price: Price::new(row.try_get("price").map_err(db)?)?,
        created_at: row.try_get("created_at").map_err(db)?,
    })
}

fn database_error(e: sqlx::Error) -> ProductError {
    ProductError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: Product) -> Result<Product, ProductError> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, price, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(product.id.0)
        .bind(product.name.as_str())
        .bind(product.price.value())
        .bind(product.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return ProductError::AlreadyExists(product.id.to_string());
                }
            }
            database_error(e)
        })?;

        Ok(product)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, price, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(product_from_row).transpose()
    }

    async fn find_all_paged(&self, request: PageRequest) -> Result<Vec<Product>, ProductError> {
        let sql = listing_query(&request);
        let mut query = sqlx::query(&sql);
        if let Some(window) = request.window() {
            let limit = i64::try_from(window.limit).unwrap_or(i64::MAX);
            let offset = i64::try_from(window.offset).unwrap_or(i64::MAX);
            query = query.bind(limit).bind(offset);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        rows.into_iter().map(product_from_row).collect()
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        if self.find_by_id(&product.id).await?.is_none() {
            return Err(ProductError::NotFound(product.id.to_string()));
        }

        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, price = $3, created_at = $4
            WHERE id = $1
            "#,
        )
        .bind(product.id.0)
        .bind(product.name.as_str())
        .bind(product.price.value())
        .bind(product.created_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        // Deleted between the lookup and the write
        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(product.id.to_string()));
        }

        Ok(product)
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        if self.find_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id.to_string()));
        }

        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_query_orders_by_creation_time() {
        let query = listing_query(&PageRequest::new(0, 0, "desc"));
        assert!(query.ends_with("ORDER BY created_at DESC"));

        let query = listing_query(&PageRequest::new(2, 10, "whatever"));
        assert!(query.ends_with("ORDER BY created_at ASC LIMIT $1 OFFSET $2"));
    }
}
