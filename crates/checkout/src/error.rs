//! Checkout failures.
//!
//! Everything here is recoverable locally: the wizard refuses to move and
//! reports why.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wizard::WizardStep;

/// Customer-details form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    CustomerName,
    TableNumber,
    WhatsappNumber,
    Address,
    References,
    Comments,
}

impl FormField {
    pub fn key(self) -> &'static str {
        match self {
            FormField::CustomerName => "customer_name",
            FormField::TableNumber => "table_number",
            FormField::WhatsappNumber => "whatsapp_number",
            FormField::Address => "address",
            FormField::References => "references",
            FormField::Comments => "comments",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FormField::CustomerName => "Nombre completo",
            FormField::TableNumber => "Número de mesa",
            FormField::WhatsappNumber => "Número de WhatsApp",
            FormField::Address => "Dirección completa",
            FormField::References => "Referencias",
            FormField::Comments => "Comentarios",
        }
    }
}

impl core::fmt::Display for FormField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout was attempted with no cart lines.
    #[error("cart is empty")]
    EmptyCart,

    /// Tried to leave the first step without choosing dine-in or delivery.
    #[error("fulfillment type not selected")]
    FulfillmentNotSelected,

    /// Required fields are blank. Lists every one of them, in form order.
    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<FormField>),

    /// The action is not available in the current step.
    #[error("cannot {action} while in step {step:?}")]
    InvalidTransition {
        step: WizardStep,
        action: &'static str,
    },
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_names_each_field() {
        let err = CheckoutError::MissingFields(vec![FormField::CustomerName, FormField::Address]);
        assert_eq!(
            err.to_string(),
            "missing required fields: customer_name, address"
        );
    }
}
