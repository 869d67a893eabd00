//! Checkout: the three-step order wizard, the immutable order request, the
//! WhatsApp order message and its handoff.

pub mod error;
pub mod handoff;
pub mod message;
pub mod order;
pub mod wizard;

pub use error::{CheckoutError, FormField};
pub use handoff::{MessageHandoff, percent_encode};
pub use message::{MessageSettings, OrderMessage, render_message};
pub use order::{Fulfillment, FulfillmentKind, OrderRequest};
pub use wizard::{CheckoutForm, OrderWizard, SubmittedOrder, WizardStep};
