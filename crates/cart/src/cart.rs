use core::convert::Infallible;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sabores_catalog::Product;
use sabores_core::{Aggregate, AggregateRoot, Entity, OrderId, ProductId, ValueObject};
use sabores_events::Event;

/// One product in the cart and how many of it.
///
/// The quantity is always at least 1; a line that would drop to 0 is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    product: Product,
    quantity: u32,
}

impl CartLine {
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn product_id(&self) -> &ProductId {
        self.product.id_typed()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> u64 {
        self.product.price().times(self.quantity)
    }
}

impl ValueObject for CartLine {}

/// Aggregate root: Cart.
///
/// Lines keep insertion order and there is at most one line per product.
/// The id is the id the order will carry once submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: OrderId,
    lines: Vec<CartLine>,
    version: u64,
}

impl Cart {
    pub fn new() -> Self {
        Self::with_id(OrderId::new())
    }

    pub fn with_id(id: OrderId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id() == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `price × quantity` over all lines.
    ///
    /// Recomputed on every call; the cart never stores a running total.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Number of units across all lines (the badge count).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Handle a command and apply the resulting events.
    pub fn execute(&mut self, command: CartCommand) -> Vec<CartEvent> {
        let Ok(events) = self.handle(&command);
        for event in &events {
            self.apply(event);
        }
        if !events.is_empty() {
            tracing::debug!(
                cart_id = %self.id,
                version = self.version,
                lines = self.lines.len(),
                total = self.total(),
                "cart updated"
            );
        }
        events
    }

    /// Add one unit of `product`, creating the line if needed.
    pub fn add_item(&mut self, product: &Product) -> Vec<CartEvent> {
        self.execute(CartCommand::AddItem {
            product: product.clone(),
            occurred_at: Utc::now(),
        })
    }

    /// Set the quantity of an existing line; `quantity <= 0` removes it.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> Vec<CartEvent> {
        self.execute(CartCommand::SetQuantity {
            product_id: product_id.clone(),
            quantity,
            occurred_at: Utc::now(),
        })
    }

    pub fn remove_item(&mut self, product_id: &ProductId) -> Vec<CartEvent> {
        self.execute(CartCommand::RemoveItem {
            product_id: product_id.clone(),
            occurred_at: Utc::now(),
        })
    }

    /// Stepper "+" button. No-op for products not in the cart.
    pub fn increment(&mut self, product_id: &ProductId) -> Vec<CartEvent> {
        match self.line(product_id) {
            Some(line) => {
                let next = i64::from(line.quantity) + 1;
                self.set_quantity(product_id, next)
            }
            None => Vec::new(),
        }
    }

    /// Stepper "-" button; going below 1 removes the line.
    pub fn decrement(&mut self, product_id: &ProductId) -> Vec<CartEvent> {
        match self.line(product_id) {
            Some(line) => {
                let next = i64::from(line.quantity) - 1;
                self.set_quantity(product_id, next.max(0))
            }
            None => Vec::new(),
        }
    }

    /// Empty the cart and rotate its id for the next order.
    pub fn clear(&mut self) -> Vec<CartEvent> {
        self.execute(CartCommand::Clear {
            next_cart_id: OrderId::new(),
            occurred_at: Utc::now(),
        })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregateRoot for Cart {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddItem {
        product: Product,
        occurred_at: DateTime<Utc>,
    },
    SetQuantity {
        product_id: ProductId,
        quantity: i64,
        occurred_at: DateTime<Utc>,
    },
    RemoveItem {
        product_id: ProductId,
        occurred_at: DateTime<Utc>,
    },
    Clear {
        next_cart_id: OrderId,
        occurred_at: DateTime<Utc>,
    },
}

/// Event: a new line with quantity 1 was appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAdded {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Event: an existing line changed quantity (always to a value >= 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChanged {
    pub product_id: ProductId,
    pub name: String,
    pub previous: u32,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: a line was deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRemoved {
    pub product_id: ProductId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: every line was dropped and the cart got a fresh id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cleared {
    pub next_cart_id: OrderId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    LineAdded(LineAdded),
    QuantityChanged(QuantityChanged),
    LineRemoved(LineRemoved),
    Cleared(Cleared),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::LineAdded(_) => "cart.line.added",
            CartEvent::QuantityChanged(_) => "cart.line.quantity_changed",
            CartEvent::LineRemoved(_) => "cart.line.removed",
            CartEvent::Cleared(_) => "cart.cleared",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::LineAdded(e) => e.occurred_at,
            CartEvent::QuantityChanged(e) => e.occurred_at,
            CartEvent::LineRemoved(e) => e.occurred_at,
            CartEvent::Cleared(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = Infallible;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::LineAdded(e) => {
                match self.lines.iter_mut().find(|l| l.product.same_entity(&e.product)) {
                    Some(line) => line.quantity = line.quantity.saturating_add(1),
                    None => self.lines.push(CartLine {
                        product: e.product.clone(),
                        quantity: 1,
                    }),
                }
            }
            CartEvent::QuantityChanged(e) => {
                if e.quantity == 0 {
                    self.lines.retain(|l| l.product_id() != &e.product_id);
                } else if let Some(line) =
                    self.lines.iter_mut().find(|l| l.product_id() == &e.product_id)
                {
                    line.quantity = e.quantity;
                }
            }
            CartEvent::LineRemoved(e) => {
                self.lines.retain(|l| l.product_id() != &e.product_id);
            }
            CartEvent::Cleared(e) => {
                self.lines.clear();
                self.id = e.next_cart_id;
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let events = match command {
            CartCommand::AddItem {
                product,
                occurred_at,
            } => match self.line(product.id_typed()) {
                Some(line) if line.quantity == u32::MAX => Vec::new(),
                Some(line) => vec![CartEvent::QuantityChanged(QuantityChanged {
                    product_id: line.product_id().clone(),
                    name: line.product.name().to_string(),
                    previous: line.quantity,
                    quantity: line.quantity + 1,
                    occurred_at: *occurred_at,
                })],
                None => vec![CartEvent::LineAdded(LineAdded {
                    product: product.clone(),
                    occurred_at: *occurred_at,
                })],
            },
            CartCommand::SetQuantity {
                product_id,
                quantity,
                occurred_at,
            } => match self.line(product_id) {
                None => Vec::new(),
                Some(line) if *quantity <= 0 => vec![removed(line, *occurred_at)],
                Some(line) => {
                    let quantity = u32::try_from(*quantity).unwrap_or(u32::MAX);
                    if quantity == line.quantity {
                        Vec::new()
                    } else {
                        vec![CartEvent::QuantityChanged(QuantityChanged {
                            product_id: product_id.clone(),
                            name: line.product.name().to_string(),
                            previous: line.quantity,
                            quantity,
                            occurred_at: *occurred_at,
                        })]
                    }
                }
            },
            CartCommand::RemoveItem {
                product_id,
                occurred_at,
            } => self
                .line(product_id)
                .map(|line| vec![removed(line, *occurred_at)])
                .unwrap_or_default(),
            CartCommand::Clear {
                next_cart_id,
                occurred_at,
            } => {
                if self.lines.is_empty() {
                    Vec::new()
                } else {
                    vec![CartEvent::Cleared(Cleared {
                        next_cart_id: *next_cart_id,
                        occurred_at: *occurred_at,
                    })]
                }
            }
        };

        Ok(events)
    }
}

fn removed(line: &CartLine, occurred_at: DateTime<Utc>) -> CartEvent {
    CartEvent::LineRemoved(LineRemoved {
        product_id: line.product_id().clone(),
        name: line.product.name().to_string(),
        occurred_at,
    })
}
