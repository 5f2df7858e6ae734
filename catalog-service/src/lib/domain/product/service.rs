use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::UpdateProductCommand;
use crate::domain::product::pagination::PageRequest;
use crate::product::errors::ProductError;
use crate::product::ports::ProductRepository;
use crate::product::ports::ProductServicePort;

/// Domain service implementation for product catalog operations.
pub struct ProductService<PR>
where
    PR: ProductRepository,
{
    repository: Arc<PR>,
}

impl<PR> ProductService<PR>
where
    PR: ProductRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> ProductServicePort for ProductService<PR>
where
    PR: ProductRepository,
{
    async fn create_product(&self, command: CreateProductCommand) -> Result<Product, ProductError> {
        let product = Product::new(command.name, command.price);
        let created = self.repository.create(product).await?;
        tracing::info!(product_id = %created.id, "Product created");

        Ok(created)
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id.to_string()))
    }

    async fn list_products(&self, request: PageRequest) -> Result<Vec<Product>, ProductError> {
        self.repository.find_all_paged(request).await
    }

    async fn update_product(
        &self,
        command: UpdateProductCommand,
    ) -> Result<Product, ProductError> {
        let existing = self
            .repository
            .find_by_id(&command.id)
            .await?
            .ok_or(ProductError::NotFound(command.id.to_string()))?;

        let product = Product {
            id: existing.id,
            name: command.name,
            price: command.price,
            created_at: existing.created_at,
        };

        let updated = self.repository.update(product).await?;
        tracing::info!(product_id = %updated.id, "Product updated");

        Ok(updated)
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ProductError> {
        self.repository.delete(id).await?;
        tracing::info!(product_id = %id, "Product deleted");

        Ok(())
    }
}
