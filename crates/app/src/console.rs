//! Line-oriented console front end for a [`MenuSession`].
//!
//! One command per line; the first word picks the action and the rest of the
//! line is its argument, so free-text fields may contain spaces.

use std::io::{self, Write};

use thiserror::Error;

use sabores_catalog::{Category, EMPTY_CATEGORY_MESSAGE};
use sabores_checkout::{FormField, FulfillmentKind, MessageHandoff, OrderMessage};
use sabores_events::EventBus;

use crate::notify::Notification;
use crate::session::MenuSession;

pub const HELP: &str = "\
comandos:
  categories                 lista las categorías
  menu [categoría]           muestra productos (cambia de categoría si se indica)
  add <id>                   agrega un producto
  inc <id> | dec <id>        +1 / -1 unidad
  set <id> <cantidad>        fija la cantidad (0 elimina)
  remove <id>                elimina el producto
  cart                       muestra el carrito
  checkout                   inicia el pedido
  type <dine-in|delivery>    tipo de pedido
  name|table|phone|address|refs|comments <texto>
  next | back                avanza / regresa un paso
  preview                    muestra el mensaje final
  submit                     envía el pedido por WhatsApp
  cancel                     cancela el pedido
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Categories,
    Menu(Option<Category>),
    Add(String),
    Increment(String),
    Decrement(String),
    SetQuantity(String, i64),
    Remove(String),
    Cart,
    Checkout,
    Fulfillment(FulfillmentKind),
    Field(FormField, String),
    Next,
    Back,
    Preview,
    Submit,
    Cancel,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "categories" => Command::Categories,
            "menu" if rest.is_empty() => Command::Menu(None),
            "menu" => Command::Menu(Some(
                rest.parse().map_err(|e: sabores_core::DomainError| {
                    ParseError::InvalidArgument(e.to_string())
                })?,
            )),
            "add" => Command::Add(arg(rest, "add", "a product id")?),
            "inc" => Command::Increment(arg(rest, "inc", "a product id")?),
            "dec" => Command::Decrement(arg(rest, "dec", "a product id")?),
            "remove" => Command::Remove(arg(rest, "remove", "a product id")?),
            "set" => {
                let mut parts = rest.split_whitespace();
                let (Some(id), Some(qty)) = (parts.next(), parts.next()) else {
                    return Err(ParseError::MissingArgument {
                        command: "set",
                        expected: "a product id and a quantity",
                    });
                };
                let qty = qty
                    .parse::<i64>()
                    .map_err(|e| ParseError::InvalidArgument(format!("quantity {qty:?}: {e}")))?;
                Command::SetQuantity(id.to_string(), qty)
            }
            "cart" => Command::Cart,
            "checkout" => Command::Checkout,
            "type" => Command::Fulfillment(
                arg(rest, "type", "dine-in or delivery")?
                    .parse()
                    .map_err(ParseError::InvalidArgument)?,
            ),
            "name" => Command::Field(FormField::CustomerName, rest.to_string()),
            "table" => Command::Field(FormField::TableNumber, rest.to_string()),
            "phone" => Command::Field(FormField::WhatsappNumber, rest.to_string()),
            "address" => Command::Field(FormField::Address, rest.to_string()),
            "refs" => Command::Field(FormField::References, rest.to_string()),
            "comments" => Command::Field(FormField::Comments, rest.to_string()),
            "next" => Command::Next,
            "back" => Command::Back,
            "preview" => Command::Preview,
            "submit" => Command::Submit,
            "cancel" => Command::Cancel,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn arg(rest: &str, command: &'static str, expected: &'static str) -> Result<String, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument { command, expected })
    } else {
        Ok(rest.to_string())
    }
}

/// Whether the console loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Hands orders off by printing the WhatsApp deep link.
#[derive(Debug)]
pub struct PrintLink<W: Write> {
    out: W,
}

impl<W: Write> PrintLink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MessageHandoff for PrintLink<W> {
    fn hand_off(&mut self, message: &OrderMessage) {
        if let Err(error) = writeln!(self.out, "{}", message.deep_link()) {
            tracing::warn!(%error, "failed to print order link");
        }
    }
}

/// Execute `command` against `session`, writing results to `out`.
///
/// Session errors are printed, not returned; only output failures are.
pub fn execute<B, H, W>(
    session: &mut MenuSession<B, H>,
    command: Command,
    out: &mut W,
) -> io::Result<Flow>
where
    B: EventBus<Notification>,
    H: MessageHandoff,
    W: Write,
{
    let result = match command {
        Command::Categories => {
            for category in Category::ALL {
                let marker = if category == session.active_category() {
                    "*"
                } else {
                    " "
                };
                writeln!(
                    out,
                    "{marker} {} {} ({})",
                    category.icon(),
                    category.display_name(),
                    category.slug()
                )?;
            }
            Ok(())
        }
        Command::Menu(category) => {
            if let Some(category) = category {
                session.select_category(category);
            }
            let products = session.visible_products();
            if products.is_empty() {
                writeln!(out, "{EMPTY_CATEGORY_MESSAGE}")?;
            }
            for product in products {
                writeln!(
                    out,
                    "{:<22} {:>6}  {}",
                    product.id_typed().as_str(),
                    product.price().to_string(),
                    product.name()
                )?;
            }
            Ok(())
        }
        Command::Add(id) => session.add_to_cart(&id),
        Command::Increment(id) => {
            session.increment(&id);
            Ok(())
        }
        Command::Decrement(id) => {
            session.decrement(&id);
            Ok(())
        }
        Command::SetQuantity(id, qty) => {
            session.set_quantity(&id, qty);
            Ok(())
        }
        Command::Remove(id) => {
            session.remove_item(&id);
            Ok(())
        }
        Command::Cart => {
            print_cart(session, out)?;
            Ok(())
        }
        Command::Checkout => match session.begin_checkout() {
            Ok(step) => {
                writeln!(out, "paso: {step:?}")?;
                Ok(())
            }
            Err(e) => Err(e),
        },
        Command::Fulfillment(kind) => session.choose_fulfillment(kind),
        Command::Field(field, value) => session.fill(field, value),
        Command::Next => match session.next_step() {
            Ok(step) => {
                writeln!(out, "paso: {step:?}")?;
                Ok(())
            }
            Err(e) => Err(e),
        },
        Command::Back => match session.previous_step() {
            Ok(step) => {
                writeln!(out, "paso: {step:?}")?;
                Ok(())
            }
            Err(e) => Err(e),
        },
        Command::Preview => match session.preview() {
            Ok(message) => {
                writeln!(out, "{}", message.body)?;
                Ok(())
            }
            Err(e) => Err(e),
        },
        Command::Submit => session.submit_order().map(|submitted| {
            tracing::debug!(order_id = %submitted.order.id(), "order handed off");
        }),
        Command::Cancel => {
            session.cancel_checkout();
            Ok(())
        }
        Command::Help => {
            writeln!(out, "{HELP}")?;
            Ok(())
        }
        Command::Quit => return Ok(Flow::Quit),
    };

    if let Err(error) = result {
        writeln!(out, "error: {error}")?;
    }
    Ok(Flow::Continue)
}

fn print_cart<B, H, W>(session: &MenuSession<B, H>, out: &mut W) -> io::Result<()>
where
    B: EventBus<Notification>,
    H: MessageHandoff,
    W: Write,
{
    let cart = session.cart();
    if cart.is_empty() {
        return writeln!(out, "carrito vacío");
    }
    for line in cart.lines() {
        writeln!(
            out,
            "{} x{} ({} c/u) = ${}",
            line.product().name(),
            line.quantity(),
            line.product().price(),
            line.line_total()
        )?;
    }
    writeln!(
        out,
        "artículos: {}  total: ${} {}",
        cart.item_count(),
        cart.total(),
        session.settings().currency_code
    )
}

/// Render a notification for the console.
pub fn render_notification(notification: &Notification, json: bool) -> String {
    if json {
        serde_json::to_string(notification)
            .unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
    } else {
        format!("» {}: {}", notification.title(), notification.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use sabores_catalog::Catalog;
    use sabores_events::InMemoryEventBus;

    #[test]
    fn parses_free_text_fields_with_spaces() {
        assert_eq!(
            Command::parse("address  Av. Central 10, Centro ").unwrap(),
            Some(Command::Field(
                FormField::Address,
                "Av. Central 10, Centro".to_string()
            ))
        );
    }

    #[test]
    fn parses_set_and_rejects_bad_quantity() {
        assert_eq!(
            Command::parse("set refresco-cola 0").unwrap(),
            Some(Command::SetQuantity("refresco-cola".to_string(), 0))
        );
        assert!(matches!(
            Command::parse("set refresco-cola muchos"),
            Err(ParseError::InvalidArgument(_))
        ));
        assert!(matches!(
            Command::parse("set"),
            Err(ParseError::MissingArgument { command: "set", .. })
        ));
    }

    #[test]
    fn parses_menu_category_and_fulfillment() {
        assert_eq!(
            Command::parse("menu bebidas").unwrap(),
            Some(Command::Menu(Some(Category::Bebidas)))
        );
        assert_eq!(
            Command::parse("type delivery").unwrap(),
            Some(Command::Fulfillment(FulfillmentKind::Delivery))
        );
        assert!(Command::parse("type pickup").is_err());
        assert!(Command::parse("menu postres").is_err());
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(
            Command::parse("dance").unwrap_err(),
            ParseError::UnknownCommand("dance".to_string())
        );
    }

    #[test]
    fn full_order_through_console() {
        let bus = InMemoryEventBus::new();
        let mut session = MenuSession::new(
            Catalog::builtin().unwrap(),
            &AppConfig::default(),
            bus,
            PrintLink::new(Vec::new()),
        );
        let mut out = Vec::new();

        for line in [
            "add hamburguesa-clasica",
            "add refresco-cola",
            "inc refresco-cola",
            "cart",
            "checkout",
            "type dine-in",
            "next",
            "name Ana",
            "table 5",
            "next",
            "submit",
        ] {
            let command = Command::parse(line).unwrap().unwrap();
            assert_eq!(execute(&mut session, command, &mut out).unwrap(), Flow::Continue);
        }

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("artículos: 3  total: $170 MXN"));
        assert!(!printed.contains("error:"));

        let links = String::from_utf8(session.handoff().out.clone()).unwrap();
        assert!(links.starts_with("https://wa.me/529614045971?text="));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn errors_are_printed_not_returned() {
        let mut session = MenuSession::new(
            Catalog::builtin().unwrap(),
            &AppConfig::default(),
            InMemoryEventBus::new(),
            Vec::<OrderMessage>::new(),
        );
        let mut out = Vec::new();

        let flow = execute(&mut session, Command::Checkout, &mut out).unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(String::from_utf8(out).unwrap(), "error: cart is empty\n");

        let mut out = Vec::new();
        assert_eq!(
            execute(&mut session, Command::Quit, &mut out).unwrap(),
            Flow::Quit
        );
    }

    #[test]
    fn notification_rendering() {
        let n = Notification::CartEmpty {
            occurred_at: chrono::Utc::now(),
        };
        assert_eq!(
            render_notification(&n, false),
            "» Carrito vacío: Agrega algunos productos antes de realizar el pedido"
        );
        assert!(render_notification(&n, true).contains("\"kind\":\"cart_empty\""));
    }
}
