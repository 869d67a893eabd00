//! Order wizard state machine.
//!
//! ```text
//! FulfillmentType ──advance──▶ CustomerDetails ──advance──▶ Summary ──submit──▶ (done)
//!        ◀──────────back──────────      ◀──────────back─────────
//! ```
//!
//! `cancel` is accepted in every step and discards the form. The cart is only
//! touched by a successful `submit`.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use sabores_cart::Cart;

use crate::error::{CheckoutError, FormField};
use crate::handoff::MessageHandoff;
use crate::message::{MessageSettings, OrderMessage, render_message};
use crate::order::{Fulfillment, FulfillmentKind, OrderRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    FulfillmentType,
    CustomerDetails,
    Summary,
}

/// Raw form input, kept as typed until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    customer_name: String,
    table_number: String,
    whatsapp_number: String,
    address: String,
    references: String,
    comments: String,
}

impl CheckoutForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::CustomerName => &self.customer_name,
            FormField::TableNumber => &self.table_number,
            FormField::WhatsappNumber => &self.whatsapp_number,
            FormField::Address => &self.address,
            FormField::References => &self.references,
            FormField::Comments => &self.comments,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::CustomerName => &mut self.customer_name,
            FormField::TableNumber => &mut self.table_number,
            FormField::WhatsappNumber => &mut self.whatsapp_number,
            FormField::Address => &mut self.address,
            FormField::References => &mut self.references,
            FormField::Comments => &mut self.comments,
        }
    }

    fn trimmed(&self, field: FormField) -> Option<String> {
        let value = self.get(field).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Required fields for `kind` that are blank (whitespace counts as blank).
    pub fn missing_fields(&self, kind: FulfillmentKind) -> Vec<FormField> {
        kind.required_fields()
            .iter()
            .copied()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedOrder {
    pub order: OrderRequest,
    pub message: OrderMessage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderWizard {
    step: WizardStep,
    kind: Option<FulfillmentKind>,
    form: CheckoutForm,
}

impl OrderWizard {
    /// Start checkout for `cart`. Refuses to open on an empty cart.
    pub fn open(cart: &Cart) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(Self::initial())
    }

    fn initial() -> Self {
        Self {
            step: WizardStep::FulfillmentType,
            kind: None,
            form: CheckoutForm::default(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn kind(&self) -> Option<FulfillmentKind> {
        self.kind
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    /// Choose dine-in or delivery. Only available in the first step.
    pub fn select_fulfillment(&mut self, kind: FulfillmentKind) -> Result<(), CheckoutError> {
        self.require_step(WizardStep::FulfillmentType, "select fulfillment type")?;
        self.kind = Some(kind);
        Ok(())
    }

    /// Write a form field. Only available while collecting customer details.
    pub fn set_field(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<(), CheckoutError> {
        self.require_step(WizardStep::CustomerDetails, "edit customer details")?;
        *self.form.slot(field) = value.into();
        Ok(())
    }

    /// Move one step forward, enforcing the step's guard.
    ///
    /// An empty cart blocks every step; the wizard stays where it is.
    pub fn advance(&mut self, cart: &Cart) -> Result<WizardStep, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        match self.step {
            WizardStep::FulfillmentType => {
                if self.kind.is_none() {
                    return Err(CheckoutError::FulfillmentNotSelected);
                }
                self.step = WizardStep::CustomerDetails;
            }
            WizardStep::CustomerDetails => {
                self.fulfillment()?;
                self.step = WizardStep::Summary;
            }
            WizardStep::Summary => {
                return Err(CheckoutError::InvalidTransition {
                    step: self.step,
                    action: "advance past the summary (submit instead)",
                });
            }
        }

        tracing::debug!(step = ?self.step, "checkout advanced");
        Ok(self.step)
    }

    /// Move one step back. Entered values are kept.
    pub fn back(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::FulfillmentType | WizardStep::CustomerDetails => {
                WizardStep::FulfillmentType
            }
            WizardStep::Summary => WizardStep::CustomerDetails,
        };
        self.step
    }

    /// Validated fulfillment details from the form.
    pub fn fulfillment(&self) -> Result<Fulfillment, CheckoutError> {
        let kind = self.kind.ok_or(CheckoutError::FulfillmentNotSelected)?;

        let missing = self.form.missing_fields(kind);
        if !missing.is_empty() {
            return Err(CheckoutError::MissingFields(missing));
        }

        // Required fields are non-blank from here on.
        let fulfillment = match kind {
            FulfillmentKind::DineIn => Fulfillment::DineIn {
                table: self
                    .form
                    .trimmed(FormField::TableNumber)
                    .unwrap_or_default(),
            },
            FulfillmentKind::Delivery => Fulfillment::Delivery {
                whatsapp_number: self
                    .form
                    .trimmed(FormField::WhatsappNumber)
                    .unwrap_or_default(),
                address: self.form.trimmed(FormField::Address).unwrap_or_default(),
                references: self.form.trimmed(FormField::References),
            },
        };
        Ok(fulfillment)
    }

    /// Build the order request from the current form and `cart`.
    pub fn build_order(&self, cart: &Cart) -> Result<OrderRequest, CheckoutError> {
        let fulfillment = self.fulfillment()?;
        OrderRequest::from_cart(
            cart,
            self.form.get(FormField::CustomerName),
            fulfillment,
            self.form.trimmed(FormField::Comments),
            Utc::now(),
        )
    }

    /// The exact message `submit` would send. No side effects.
    pub fn preview(
        &self,
        cart: &Cart,
        settings: &MessageSettings,
    ) -> Result<OrderMessage, CheckoutError> {
        self.require_step(WizardStep::Summary, "preview the order")?;
        let order = self.build_order(cart)?;
        Ok(OrderMessage {
            destination: settings.destination.clone(),
            body: render_message(&order, settings),
        })
    }

    /// Submit from the summary step.
    ///
    /// Re-validates the form and cart, renders the message, hands it off, then
    /// clears the cart and resets the wizard. On error nothing changes.
    pub fn submit<H>(
        &mut self,
        cart: &mut Cart,
        settings: &MessageSettings,
        handoff: &mut H,
    ) -> Result<SubmittedOrder, CheckoutError>
    where
        H: MessageHandoff + ?Sized,
    {
        self.require_step(WizardStep::Summary, "submit")?;

        let order = self.build_order(cart)?;
        let message = OrderMessage {
            destination: settings.destination.clone(),
            body: render_message(&order, settings),
        };

        handoff.hand_off(&message);

        tracing::info!(
            order_id = %order.id(),
            fulfillment = %order.fulfillment().kind(),
            lines = order.lines().len(),
            total = order.total(),
            "order submitted"
        );

        cart.clear();
        *self = Self::initial();

        Ok(SubmittedOrder { order, message })
    }

    /// Abandon checkout, discarding every entered value.
    pub fn cancel(&mut self) {
        *self = Self::initial();
    }

    fn require_step(&self, step: WizardStep, action: &'static str) -> Result<(), CheckoutError> {
        if self.step == step {
            Ok(())
        } else {
            Err(CheckoutError::InvalidTransition {
                step: self.step,
                action,
            })
        }
    }
}
