//! The plain-text order message sent over WhatsApp.
//!
//! Block order is fixed: title, customer, fulfillment, products, total,
//! optional comments, footer. Blocks are separated by one blank line.

use serde::{Deserialize, Serialize};

use crate::handoff::percent_encode;
use crate::order::{Fulfillment, OrderRequest};

const FOOTER: &str = "¡Gracias por tu pedido! 🙌";

/// Where orders go and how they are headed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSettings {
    /// Restaurant name shown in the title line.
    pub restaurant_name: String,
    /// Currency code appended to the total (e.g. `MXN`).
    pub currency_code: String,
    /// WhatsApp number receiving orders, digits only with country code.
    pub destination: String,
}

impl Default for MessageSettings {
    fn default() -> Self {
        Self {
            restaurant_name: "Sabores Digital".to_string(),
            currency_code: "MXN".to_string(),
            destination: "529614045971".to_string(),
        }
    }
}

/// A rendered message and its recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderMessage {
    pub destination: String,
    pub body: String,
}

impl OrderMessage {
    /// `https://wa.me/<destination>?text=<encoded body>`
    pub fn deep_link(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.destination,
            percent_encode(&self.body)
        )
    }
}

/// Render `order` into the message body.
pub fn render_message(order: &OrderRequest, settings: &MessageSettings) -> String {
    let mut blocks: Vec<String> = Vec::with_capacity(7);

    blocks.push(format!("🍽️ *NUEVO PEDIDO - {}*", settings.restaurant_name));
    blocks.push(format!("👤 *Cliente:* {}", order.customer_name()));
    blocks.push(fulfillment_block(order.fulfillment()));

    let mut products = String::from("📋 *Productos:*");
    for line in order.lines() {
        products.push_str(&format!(
            "\n• {} x{} - ${}",
            line.product().name(),
            line.quantity(),
            line.line_total()
        ));
    }
    blocks.push(products);

    blocks.push(format!(
        "💰 *Total: ${} {}*",
        order.total(),
        settings.currency_code
    ));

    if let Some(comments) = order.comments() {
        blocks.push(format!("💬 *Comentarios:* {comments}"));
    }

    blocks.push(FOOTER.to_string());

    blocks.join("\n\n")
}

fn fulfillment_block(fulfillment: &Fulfillment) -> String {
    match fulfillment {
        Fulfillment::DineIn { table } => {
            format!("📍 *Para consumir en el restaurante*\n🪑 Mesa: {table}")
        }
        Fulfillment::Delivery {
            whatsapp_number,
            address,
            references,
        } => {
            let mut block = format!(
                "🏠 *Envío a domicilio*\n📱 WhatsApp: {whatsapp_number}\n📍 Dirección: {address}"
            );
            if let Some(references) = references {
                block.push_str(&format!("\n🗺️ Referencias: {references}"));
            }
            block
        }
    }
}
