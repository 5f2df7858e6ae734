use async_trait::async_trait;

use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::UpdateProductCommand;
use crate::domain::product::pagination::PageRequest;
use crate::product::errors::ProductError;

/// Port for product domain service operations.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// Create a product with a fresh identifier and creation time.
    ///
    /// # Errors
    /// * `AlreadyExists` - Store rejected the identifier
    /// * `DatabaseError` - Database operation failed
    async fn create_product(&self, command: CreateProductCommand) -> Result<Product, ProductError>;

    /// # Errors
    /// * `NotFound` - Product does not exist
    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductError>;

    /// List products ordered by creation time, optionally windowed.
    async fn list_products(&self, request: PageRequest) -> Result<Vec<Product>, ProductError>;

    /// Replace name and price of an existing product.
    ///
    /// Identifier and creation time are kept.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    async fn update_product(&self, command: UpdateProductCommand)
        -> Result<Product, ProductError>;

    /// # Errors
    /// * `NotFound` - Product does not exist
    async fn delete_product(&self, id: &ProductId) -> Result<(), ProductError>;
}

/// Persistence operations for product aggregate.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Persist new product to storage.
    ///
    /// # Errors
    /// * `AlreadyExists` - Identifier collides with a stored product
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, product: Product) -> Result<Product, ProductError>;

    /// Retrieve product by identifier.
    ///
    /// # Returns
    /// Optional product entity (None if not found)
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError>;

    /// Ordered range scan over products.
    ///
    /// Sorted by creation time in the requested direction; the whole set
    /// when the request carries no window.
    async fn find_all_paged(&self, request: PageRequest) -> Result<Vec<Product>, ProductError>;

    /// Overwrite a stored product.
    ///
    /// Looks the product up first; no write happens when it is missing.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, product: Product) -> Result<Product, ProductError>;

    /// Remove a stored product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &ProductId) -> Result<(), ProductError>;
}
