//! Process-local repositories.
//!
//! Used when no database URL is configured and by the integration tests.
//! Contents are lost when the process exits.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::pagination::PageRequest;
use crate::domain::product::pagination::SortDirection;
use crate::domain::product::ports::ProductRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        // Same guarantee as the unique index on users.email
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let key = EmailAddress::normalize(email);
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email.as_str() == key).cloned())
    }
}

/// Products kept in insertion order so equal timestamps list deterministically.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> Result<Product, ProductError> {
        let mut products = self.products.write().await;

        if products.iter().any(|p| p.id == product.id) {
            return Err(ProductError::AlreadyExists(product.id.to_string()));
        }

        products.push(product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| &p.id == id).cloned())
    }

    async fn find_all_paged(&self, request: PageRequest) -> Result<Vec<Product>, ProductError> {
        let mut listing = self.products.read().await.clone();

        match request.sort {
            SortDirection::Asc => listing.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortDirection::Desc => listing.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }

        let Some(window) = request.window() else {
            return Ok(listing);
        };

        let offset = usize::try_from(window.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(window.limit).unwrap_or(usize::MAX);

        Ok(listing.into_iter().skip(offset).take(limit).collect())
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let mut products = self.products.write().await;

        let Some(slot) = products.iter_mut().find(|p| p.id == product.id) else {
            return Err(ProductError::NotFound(product.id.to_string()));
        };

        *slot = product.clone();
        Ok(product)
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        let mut products = self.products.write().await;

        let Some(index) = products.iter().position(|p| &p.id == id) else {
            return Err(ProductError::NotFound(id.to_string()));
        };

        products.remove(index);
        Ok(())
    }
}
