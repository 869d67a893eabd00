use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sabores_cart::{Cart, CartLine};
use sabores_core::{AggregateRoot, OrderId};

use crate::error::{CheckoutError, FormField};

/// Which fulfillment variant the customer picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FulfillmentKind {
    DineIn,
    Delivery,
}

impl FulfillmentKind {
    /// Fields that must be filled in for this variant, in form order.
    pub fn required_fields(self) -> &'static [FormField] {
        match self {
            FulfillmentKind::DineIn => &[FormField::CustomerName, FormField::TableNumber],
            FulfillmentKind::Delivery => &[
                FormField::CustomerName,
                FormField::WhatsappNumber,
                FormField::Address,
            ],
        }
    }
}

impl core::fmt::Display for FulfillmentKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FulfillmentKind::DineIn => f.write_str("dine-in"),
            FulfillmentKind::Delivery => f.write_str("delivery"),
        }
    }
}

impl core::str::FromStr for FulfillmentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dine-in" | "dinein" | "mesa" => Ok(FulfillmentKind::DineIn),
            "delivery" | "domicilio" => Ok(FulfillmentKind::Delivery),
            other => Err(format!("unknown fulfillment type: {other:?}")),
        }
    }
}

/// How the order reaches the customer, with the details each variant needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Fulfillment {
    DineIn {
        table: String,
    },
    Delivery {
        whatsapp_number: String,
        address: String,
        references: Option<String>,
    },
}

impl Fulfillment {
    pub fn kind(&self) -> FulfillmentKind {
        match self {
            Fulfillment::DineIn { .. } => FulfillmentKind::DineIn,
            Fulfillment::Delivery { .. } => FulfillmentKind::Delivery,
        }
    }
}

/// A submitted order: a snapshot of the cart plus customer details.
///
/// Built once at submission and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    id: OrderId,
    customer_name: String,
    fulfillment: Fulfillment,
    lines: Vec<CartLine>,
    comments: Option<String>,
    total: u64,
    created_at: DateTime<Utc>,
}

impl OrderRequest {
    /// Snapshot `cart` into an order.
    ///
    /// Fails on an empty cart or a blank customer name. Fulfillment details are
    /// checked by the wizard before it gets here.
    pub fn from_cart(
        cart: &Cart,
        customer_name: impl Into<String>,
        fulfillment: Fulfillment,
        comments: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let customer_name = customer_name.into().trim().to_string();
        if customer_name.is_empty() {
            return Err(CheckoutError::MissingFields(vec![FormField::CustomerName]));
        }

        let comments = comments
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Self {
            id: *cart.id(),
            customer_name,
            fulfillment,
            lines: cart.lines().to_vec(),
            comments,
            total: cart.total(),
            created_at,
        })
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn fulfillment(&self) -> &Fulfillment {
        &self.fulfillment
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sabores_catalog::Catalog;

    fn cart_with_burger() -> Cart {
        let catalog = Catalog::builtin().unwrap();
        let mut cart = Cart::new();
        cart.add_item(catalog.require("hamburguesa-clasica").unwrap());
        cart
    }

    fn dine_in() -> Fulfillment {
        Fulfillment::DineIn {
            table: "5".to_string(),
        }
    }

    #[test]
    fn order_snapshots_cart() {
        let mut cart = cart_with_burger();
        let order = OrderRequest::from_cart(&cart, " Ana ", dine_in(), None, Utc::now()).unwrap();

        assert_eq!(order.id(), cart.id_typed());
        assert_eq!(order.customer_name(), "Ana");
        assert_eq!(order.total(), 120);

        cart.clear();
        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.total(), 120);
    }

    #[test]
    fn empty_cart_is_rejected() {
        let err = OrderRequest::from_cart(&Cart::new(), "Ana", dine_in(), None, Utc::now())
            .unwrap_err();
        assert_eq!(err, CheckoutError::EmptyCart);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = OrderRequest::from_cart(&cart_with_burger(), "  ", dine_in(), None, Utc::now())
            .unwrap_err();
        assert_eq!(err, CheckoutError::MissingFields(vec![FormField::CustomerName]));
    }

    #[test]
    fn blank_comments_become_absent() {
        let order = OrderRequest::from_cart(
            &cart_with_burger(),
            "Ana",
            dine_in(),
            Some("   ".to_string()),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(order.comments(), None);
    }

    #[test]
    fn fulfillment_serializes_with_type_tag() {
        let json = serde_json::to_value(dine_in()).unwrap();
        assert_eq!(json["type"], "dine-in");
        assert_eq!(json["table"], "5");
    }
}
