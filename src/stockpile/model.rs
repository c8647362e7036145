use crate::error::Rejection;

/// A single stock-keeping unit held by the inventory.
///
/// Fields are private: a `Product` can only be built by validating a [`NewProduct`]
/// and only the inventory mutates one once it is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: String,
    name: String,
    quantity: u64,
    price: f64,
}

/// An add request as submitted by a caller, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl NewProduct {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            price,
        }
    }
}

impl Product {
    /// Checks every field invariant except id uniqueness, which only the
    /// owning collection can decide.
    pub(crate) fn validate(new: NewProduct) -> Result<Product, Rejection> {
        let id = new.id.trim();
        if id.is_empty() {
            return Err(Rejection::EmptyId);
        }
        if has_control_chars(id) {
            return Err(Rejection::ControlCharacter("id"));
        }
        let name = validate_name(&new.name)?;
        let quantity = validate_quantity(new.quantity)?;
        let price = validate_price(new.price)?;

        Ok(Product {
            id: id.to_string(),
            name,
            quantity,
            price,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Stock value of this entry: quantity times unit price.
    pub fn value(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
    }

    pub(crate) fn set_price(&mut self, price: f64) {
        self.price = price;
    }
}

pub(crate) fn validate_name(name: &str) -> Result<String, Rejection> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Rejection::EmptyName);
    }
    if has_control_chars(trimmed) {
        return Err(Rejection::ControlCharacter("name"));
    }
    Ok(trimmed.to_string())
}

fn has_control_chars(s: &str) -> bool {
    s.chars().any(char::is_control)
}

pub(crate) fn validate_quantity(quantity: i64) -> Result<u64, Rejection> {
    u64::try_from(quantity).map_err(|_| Rejection::NegativeQuantity(quantity))
}

pub(crate) fn validate_price(price: f64) -> Result<f64, Rejection> {
    if !price.is_finite() {
        return Err(Rejection::InvalidPrice);
    }
    if price < 0.0 {
        return Err(Rejection::NegativePrice(price));
    }
    Ok(price)
}

/// Aggregate figures over the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    /// Number of distinct product entries, not the sum of quantities.
    pub count: usize,
    pub total_value: f64,
}
