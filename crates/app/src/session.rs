//! One customer's ordering session.
//!
//! The session is the single owner of the active category, the cart and the
//! open checkout (if any). Every user action is a method call; every visible
//! outcome is also published as a [`Notification`].

use thiserror::Error;

use sabores_cart::{Cart, CartEvent};
use sabores_catalog::{Catalog, Category, Product};
use sabores_checkout::{
    CheckoutError, FormField, FulfillmentKind, MessageHandoff, MessageSettings, OrderMessage,
    OrderWizard, SubmittedOrder, WizardStep,
};
use sabores_core::{DomainError, ProductId};
use sabores_events::EventBus;

use crate::config::AppConfig;
use crate::notify::Notification;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// A checkout action was requested with no checkout open.
    #[error("checkout is not open")]
    CheckoutNotOpen,
}

pub struct MenuSession<B, H>
where
    B: EventBus<Notification>,
    H: MessageHandoff,
{
    catalog: Catalog,
    active_category: Category,
    cart: Cart,
    checkout: Option<OrderWizard>,
    settings: MessageSettings,
    bus: B,
    handoff: H,
}

impl<B, H> MenuSession<B, H>
where
    B: EventBus<Notification>,
    H: MessageHandoff,
{
    pub fn new(catalog: Catalog, config: &AppConfig, bus: B, handoff: H) -> Self {
        tracing::debug!(
            catalog_version = catalog.version(),
            category = %config.default_category,
            "session started"
        );
        Self {
            catalog,
            active_category: config.default_category,
            cart: Cart::new(),
            checkout: None,
            settings: config.message.clone(),
            bus,
            handoff,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn handoff(&self) -> &H {
        &self.handoff
    }

    pub fn settings(&self) -> &MessageSettings {
        &self.settings
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    pub fn select_category(&mut self, category: Category) {
        self.active_category = category;
    }

    /// Products of the active category, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.by_category(self.active_category)
    }

    pub fn checkout(&self) -> Option<&OrderWizard> {
        self.checkout.as_ref()
    }

    // ---- cart -------------------------------------------------------------

    pub fn add_to_cart(&mut self, product_id: &str) -> Result<(), SessionError> {
        let product = self.catalog.require(product_id)?;
        let events = self.cart.add_item(product);
        self.publish_cart_events(&events, true);
        Ok(())
    }

    /// Set a line's quantity; `<= 0` removes it. Unknown or malformed ids are
    /// ignored, like the other cart mutations below.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        if let Some(id) = line_id(product_id) {
            let events = self.cart.set_quantity(&id, quantity);
            self.publish_cart_events(&events, false);
        }
    }

    pub fn increment(&mut self, product_id: &str) {
        if let Some(id) = line_id(product_id) {
            let events = self.cart.increment(&id);
            self.publish_cart_events(&events, false);
        }
    }

    pub fn decrement(&mut self, product_id: &str) {
        if let Some(id) = line_id(product_id) {
            let events = self.cart.decrement(&id);
            self.publish_cart_events(&events, false);
        }
    }

    pub fn remove_item(&mut self, product_id: &str) {
        if let Some(id) = line_id(product_id) {
            let events = self.cart.remove_item(&id);
            self.publish_cart_events(&events, false);
        }
    }

    // ---- checkout ---------------------------------------------------------

    /// Open checkout. Refused (and reported) when the cart is empty.
    pub fn begin_checkout(&mut self) -> Result<WizardStep, SessionError> {
        if self.cart.is_empty() {
            return Err(self.report(CheckoutError::EmptyCart));
        }
        if let Some(wizard) = &self.checkout {
            return Ok(wizard.step());
        }

        let wizard = OrderWizard::open(&self.cart).map_err(|e| self.report(e))?;
        let step = wizard.step();
        self.checkout = Some(wizard);
        Ok(step)
    }

    pub fn choose_fulfillment(&mut self, kind: FulfillmentKind) -> Result<(), SessionError> {
        let result = self.wizard_mut()?.select_fulfillment(kind);
        result.map_err(|e| self.report(e))
    }

    pub fn fill(&mut self, field: FormField, value: impl Into<String>) -> Result<(), SessionError> {
        let result = self.wizard_mut()?.set_field(field, value);
        result.map_err(|e| self.report(e))
    }

    pub fn next_step(&mut self) -> Result<WizardStep, SessionError> {
        let wizard = self
            .checkout
            .as_mut()
            .ok_or(SessionError::CheckoutNotOpen)?;
        let result = wizard.advance(&self.cart);
        result.map_err(|e| self.report(e))
    }

    pub fn previous_step(&mut self) -> Result<WizardStep, SessionError> {
        Ok(self.wizard_mut()?.back())
    }

    /// The message that `submit_order` would send right now.
    pub fn preview(&self) -> Result<OrderMessage, SessionError> {
        let wizard = self
            .checkout
            .as_ref()
            .ok_or(SessionError::CheckoutNotOpen)?;
        Ok(wizard.preview(&self.cart, &self.settings)?)
    }

    /// Submit the order: hand the message off, clear the cart, close checkout.
    pub fn submit_order(&mut self) -> Result<SubmittedOrder, SessionError> {
        let wizard = self
            .checkout
            .as_mut()
            .ok_or(SessionError::CheckoutNotOpen)?;
        let result = wizard.submit(&mut self.cart, &self.settings, &mut self.handoff);

        let submitted = result.map_err(|e| self.report(e))?;
        self.checkout = None;
        self.notify(Notification::OrderSubmitted {
            order_id: submitted.order.id(),
            total: submitted.order.total(),
            occurred_at: submitted.order.created_at(),
        });
        Ok(submitted)
    }

    /// Close checkout, discarding the form. The cart is left as it was.
    pub fn cancel_checkout(&mut self) {
        if let Some(mut wizard) = self.checkout.take() {
            wizard.cancel();
            self.notify(Notification::CheckoutCancelled {
                occurred_at: chrono::Utc::now(),
            });
        }
    }

    // ---- internals --------------------------------------------------------

    fn wizard_mut(&mut self) -> Result<&mut OrderWizard, SessionError> {
        self.checkout.as_mut().ok_or(SessionError::CheckoutNotOpen)
    }

    fn publish_cart_events(&self, events: &[CartEvent], added_via_add: bool) {
        for event in events {
            if let Some(notification) = Notification::from_cart_event(event, added_via_add) {
                self.notify(notification);
            }
        }
    }

    /// Publish the user-facing side of a checkout error and pass it on.
    fn report(&self, error: CheckoutError) -> SessionError {
        tracing::debug!(%error, "checkout refused");
        if let Some(notification) = Notification::from_checkout_error(&error) {
            self.notify(notification);
        }
        SessionError::Checkout(error)
    }

    fn notify(&self, notification: Notification) {
        if let Err(error) = self.bus.publish(notification) {
            tracing::warn!(?error, "failed to publish notification");
        }
    }
}

/// Cart changes address existing lines only, so an id that cannot name a
/// product is the same as one that is not in the cart.
fn line_id(product_id: &str) -> Option<ProductId> {
    match ProductId::new(product_id) {
        Ok(id) => Some(id),
        Err(error) => {
            tracing::debug!(%error, "ignoring cart change for malformed product id");
            None
        }
    }
}
