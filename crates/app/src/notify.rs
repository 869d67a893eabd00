//! User-facing notifications.
//!
//! The session publishes these on the event bus; how they are shown (toast,
//! console line, JSON) is up to the subscriber.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sabores_cart::CartEvent;
use sabores_checkout::{CheckoutError, FormField};
use sabores_core::{OrderId, ProductId};
use sabores_events::Event;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    ItemAdded {
        product_id: ProductId,
        name: String,
        quantity: u32,
        occurred_at: DateTime<Utc>,
    },
    QuantityUpdated {
        product_id: ProductId,
        name: String,
        quantity: u32,
        occurred_at: DateTime<Utc>,
    },
    ItemRemoved {
        product_id: ProductId,
        name: String,
        occurred_at: DateTime<Utc>,
    },
    /// Checkout was attempted with nothing in the cart.
    CartEmpty { occurred_at: DateTime<Utc> },
    ValidationFailed {
        reason: String,
        missing: Vec<FormField>,
        occurred_at: DateTime<Utc>,
    },
    OrderSubmitted {
        order_id: OrderId,
        total: u64,
        occurred_at: DateTime<Utc>,
    },
    CheckoutCancelled { occurred_at: DateTime<Utc> },
}

impl Notification {
    /// Map a cart event to what the user should hear about it.
    ///
    /// `Cleared` is silent; the order-submitted notice covers it.
    pub fn from_cart_event(event: &CartEvent, added_via_add: bool) -> Option<Self> {
        match event {
            CartEvent::LineAdded(e) => Some(Notification::ItemAdded {
                product_id: e.product.id_typed().clone(),
                name: e.product.name().to_string(),
                quantity: 1,
                occurred_at: e.occurred_at,
            }),
            CartEvent::QuantityChanged(e) if added_via_add => Some(Notification::ItemAdded {
                product_id: e.product_id.clone(),
                name: e.name.clone(),
                quantity: e.quantity,
                occurred_at: e.occurred_at,
            }),
            CartEvent::QuantityChanged(e) => Some(Notification::QuantityUpdated {
                product_id: e.product_id.clone(),
                name: e.name.clone(),
                quantity: e.quantity,
                occurred_at: e.occurred_at,
            }),
            CartEvent::LineRemoved(e) => Some(Notification::ItemRemoved {
                product_id: e.product_id.clone(),
                name: e.name.clone(),
                occurred_at: e.occurred_at,
            }),
            CartEvent::Cleared(_) => None,
        }
    }

    /// Notification for a refused checkout step.
    pub fn from_checkout_error(error: &CheckoutError) -> Option<Self> {
        let occurred_at = Utc::now();
        match error {
            CheckoutError::EmptyCart => Some(Notification::CartEmpty { occurred_at }),
            CheckoutError::MissingFields(missing) => Some(Notification::ValidationFailed {
                reason: error.to_string(),
                missing: missing.clone(),
                occurred_at,
            }),
            CheckoutError::FulfillmentNotSelected => Some(Notification::ValidationFailed {
                reason: error.to_string(),
                missing: Vec::new(),
                occurred_at,
            }),
            // Programming/flow mistakes, not something the customer can fix.
            CheckoutError::InvalidTransition { .. } => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Notification::ItemAdded { .. } => "¡Agregado al carrito!",
            Notification::QuantityUpdated { .. } => "Cantidad actualizada",
            Notification::ItemRemoved { .. } => "Producto eliminado",
            Notification::CartEmpty { .. } => "Carrito vacío",
            Notification::ValidationFailed { .. } => "Datos incompletos",
            Notification::OrderSubmitted { .. } => "¡Pedido enviado!",
            Notification::CheckoutCancelled { .. } => "Pedido cancelado",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Notification::ItemAdded { name, .. } => {
                format!("{name} ha sido agregado a tu pedido")
            }
            Notification::QuantityUpdated { name, quantity, .. } => {
                format!("{name}: {quantity}")
            }
            Notification::ItemRemoved { name, .. } => {
                format!("{name} ha sido removido de tu carrito")
            }
            Notification::CartEmpty { .. } => {
                "Agrega algunos productos antes de realizar el pedido".to_string()
            }
            Notification::ValidationFailed { missing, .. } if missing.is_empty() => {
                "Selecciona si tu pedido es para mesa o a domicilio".to_string()
            }
            Notification::ValidationFailed { missing, .. } => {
                let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
                format!(
                    "Por favor completa todos los campos requeridos: {}",
                    labels.join(", ")
                )
            }
            Notification::OrderSubmitted { .. } => {
                "Tu pedido ha sido enviado por WhatsApp. Te contactaremos pronto.".to_string()
            }
            Notification::CheckoutCancelled { .. } => {
                "Tus datos de pedido fueron descartados".to_string()
            }
        }
    }
}

impl Event for Notification {
    fn event_type(&self) -> &'static str {
        match self {
            Notification::ItemAdded { .. } => "notify.item_added",
            Notification::QuantityUpdated { .. } => "notify.quantity_updated",
            Notification::ItemRemoved { .. } => "notify.item_removed",
            Notification::CartEmpty { .. } => "notify.cart_empty",
            Notification::ValidationFailed { .. } => "notify.validation_failed",
            Notification::OrderSubmitted { .. } => "notify.order_submitted",
            Notification::CheckoutCancelled { .. } => "notify.checkout_cancelled",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Notification::ItemAdded { occurred_at, .. }
            | Notification::QuantityUpdated { occurred_at, .. }
            | Notification::ItemRemoved { occurred_at, .. }
            | Notification::CartEmpty { occurred_at }
            | Notification::ValidationFailed { occurred_at, .. }
            | Notification::OrderSubmitted { occurred_at, .. }
            | Notification::CheckoutCancelled { occurred_at } => *occurred_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_listed_by_label() {
        let n = Notification::from_checkout_error(&CheckoutError::MissingFields(vec![
            FormField::CustomerName,
            FormField::TableNumber,
        ]))
        .unwrap();

        assert_eq!(n.title(), "Datos incompletos");
        assert!(n.description().ends_with("Nombre completo, Número de mesa"));
        assert_eq!(n.event_type(), "notify.validation_failed");
    }

    #[test]
    fn empty_cart_maps_to_cart_empty() {
        let n = Notification::from_checkout_error(&CheckoutError::EmptyCart).unwrap();
        assert!(matches!(n, Notification::CartEmpty { .. }));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let n = Notification::CheckoutCancelled {
            occurred_at: Utc::now(),
        };
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["kind"], "checkout_cancelled");
    }
}
