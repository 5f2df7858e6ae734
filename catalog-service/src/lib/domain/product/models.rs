use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::validation::ValidationError;

/// Product aggregate entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub price: Price,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Build a fresh product with a new identifier, stamped with the current time.
    pub fn new(name: ProductName, price: Price) -> Self {
        Self {
            id: ProductId::new(),
            name,
            price,
            created_at: Utc::now(),
        }
    }
}

/// Product unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a product ID from a path segment or payload.
    ///
    /// # Errors
    /// * `MissingId` - String is empty
    /// * `InvalidId` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::MissingId);
        }

        Uuid::parse_str(s)
            .map(ProductId)
            .map_err(|_| ValidationError::InvalidId)
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    /// # Errors
    /// * `MissingName` - Name is empty or only whitespace
    pub fn new(name: String) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Strictly positive, finite price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    /// # Errors
    /// * `MissingPrice` - Price is zero (the value an omitted field decodes to)
    /// * `InvalidPrice` - Price is negative, NaN or infinite
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value == 0.0 {
            return Err(ValidationError::MissingPrice);
        }
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Command to create a product with validated fields.
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub name: ProductName,
    pub price: Price,
}

impl CreateProductCommand {
    pub fn new(name: String, price: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ProductName::new(name)?,
            price: Price::new(price)?,
        })
    }
}

/// Command to replace an existing product's mutable fields.
///
/// The identifier is validated first, so a malformed id is reported even
/// when the body is also invalid.
#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    pub id: ProductId,
    pub name: ProductName,
    pub price: Price,
}

impl UpdateProductCommand {
    pub fn new(id: &str, name: String, price: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            id: ProductId::from_string(id)?,
            name: ProductName::new(name)?,
            price: Price::new(price)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_command_validation_order() {
        let id = ProductId::new().to_string();

        assert_eq!(
            UpdateProductCommand::new("", String::new(), -1.0).unwrap_err(),
            ValidationError::MissingId
        );
        assert_eq!(
            UpdateProductCommand::new("abc", String::new(), -1.0).unwrap_err(),
            ValidationError::InvalidId
        );
        assert_eq!(
            UpdateProductCommand::new(&id, String::new(), -1.0).unwrap_err(),
            ValidationError::MissingName
        );
        assert_eq!(
            UpdateProductCommand::new(&id, "Desk".to_string(), 0.0).unwrap_err(),
            ValidationError::MissingPrice
        );
        assert_eq!(
            UpdateProductCommand::new(&id, "Desk".to_string(), -0.5).unwrap_err(),
            ValidationError::InvalidPrice
        );

        let command = UpdateProductCommand::new(&id, "Desk".to_string(), 199.9).unwrap();
        assert_eq!(command.id.to_string(), id);
        assert_eq!(command.price.value(), 199.9);
    }

    #[test]
    fn test_price_rejects_non_finite() {
        assert_eq!(Price::new(f64::NAN).unwrap_err(), ValidationError::InvalidPrice);
        assert_eq!(
            Price::new(f64::INFINITY).unwrap_err(),
            ValidationError::InvalidPrice
        );
        assert!(Price::new(0.01).is_ok());
    }

    #[test]
    fn test_create_command_requires_name_before_price() {
        assert_eq!(
            CreateProductCommand::new(" ".to_string(), 0.0).unwrap_err(),
            ValidationError::MissingName
        );
        assert_eq!(
            CreateProductCommand::new("Lamp".to_string(), 0.0).unwrap_err(),
            ValidationError::MissingPrice
        );
    }

    #[test]
    fn test_new_products_get_distinct_ids() {
        let name = ProductName::new("Lamp".to_string()).unwrap();
        let price = Price::new(10.0).unwrap();
        let a = Product::new(name.clone(), price);
        let b = Product::new(name, price);
        assert_ne!(a.id, b.id);
    }
}
