use std::sync::Arc;

use sabores_app::{AppConfig, MenuSession, Notification, SessionError};
use sabores_catalog::{Catalog, Category};
use sabores_checkout::{CheckoutError, FormField, FulfillmentKind, OrderMessage, WizardStep};
use sabores_events::{EventBus, InMemoryEventBus, Subscription};

type Session = MenuSession<Arc<InMemoryEventBus<Notification>>, Vec<OrderMessage>>;

fn start() -> (Session, Subscription<Notification>) {
    let bus = Arc::new(InMemoryEventBus::new());
    let notifications = bus.subscribe();
    let session = MenuSession::new(
        Catalog::builtin().expect("builtin catalog"),
        &AppConfig::default(),
        bus,
        Vec::new(),
    );
    (session, notifications)
}

fn fill_burger_and_two_colas(session: &mut Session) {
    session.add_to_cart("hamburguesa-clasica").unwrap();
    session.add_to_cart("refresco-cola").unwrap();
    session.add_to_cart("refresco-cola").unwrap();
}

fn dine_in_for_ana(session: &mut Session) {
    session.begin_checkout().unwrap();
    session.choose_fulfillment(FulfillmentKind::DineIn).unwrap();
    session.next_step().unwrap();
    session.fill(FormField::CustomerName, "Ana").unwrap();
    session.fill(FormField::TableNumber, "5").unwrap();
    assert_eq!(session.next_step().unwrap(), WizardStep::Summary);
}

#[test]
fn cart_scenario_totals() {
    let (mut session, _) = start();
    fill_burger_and_two_colas(&mut session);

    assert_eq!(session.cart().lines().len(), 2);
    assert_eq!(session.cart().item_count(), 3);
    assert_eq!(session.cart().total(), 170);

    session.set_quantity("refresco-cola", 0);
    assert_eq!(session.cart().lines().len(), 1);
    assert_eq!(
        session.cart().lines()[0].product_id().as_str(),
        "hamburguesa-clasica"
    );
    assert_eq!(session.cart().total(), 120);
}

#[test]
fn dine_in_order_message() {
    let (mut session, notifications) = start();
    fill_burger_and_two_colas(&mut session);
    dine_in_for_ana(&mut session);

    let submitted = session.submit_order().unwrap();
    let body = &submitted.message.body;

    assert!(body.contains("👤 *Cliente:* Ana"));
    assert_eq!(body.matches("🪑 Mesa: 5").count(), 1);
    assert!(!body.contains("Envío a domicilio"));
    assert!(!body.contains("WhatsApp:"));

    let items: Vec<&str> = body.lines().filter(|l| l.starts_with("• ")).collect();
    assert_eq!(
        items,
        vec![
            "• Hamburguesa Clásica x1 - $120",
            "• Refresco de Cola x2 - $50"
        ]
    );
    assert!(body.contains("💰 *Total: $170 MXN*"));

    assert_eq!(session.handoff().as_slice(), &[submitted.message.clone()]);
    assert!(session.cart().is_empty());
    assert!(session.checkout().is_none());

    let last = notifications.drain().pop().unwrap();
    assert!(matches!(last, Notification::OrderSubmitted { total: 170, .. }));
}

#[test]
fn delivery_order_requires_address() {
    let (mut session, _) = start();
    session.add_to_cart("combo-hotdog").unwrap();
    session.begin_checkout().unwrap();
    session.choose_fulfillment(FulfillmentKind::Delivery).unwrap();
    session.next_step().unwrap();
    session.fill(FormField::CustomerName, "Luis").unwrap();
    session.fill(FormField::WhatsappNumber, "5512345678").unwrap();

    assert_eq!(
        session.next_step().unwrap_err(),
        SessionError::Checkout(CheckoutError::MissingFields(vec![FormField::Address]))
    );
    assert_eq!(
        session.checkout().unwrap().step(),
        WizardStep::CustomerDetails
    );

    session.fill(FormField::Address, "Av. Central 10").unwrap();
    session.fill(FormField::References, "Portón azul").unwrap();
    session.next_step().unwrap();

    let preview = session.preview().unwrap();
    assert!(preview.body.contains("🗺️ Referencias: Portón azul"));
    assert!(!preview.body.contains("Mesa"));
}

#[test]
fn empty_cart_checkout_is_refused() {
    let (mut session, notifications) = start();

    assert_eq!(
        session.begin_checkout().unwrap_err(),
        SessionError::Checkout(CheckoutError::EmptyCart)
    );
    assert!(session.checkout().is_none());
    assert!(matches!(
        notifications.drain().as_slice(),
        [Notification::CartEmpty { .. }]
    ));
    assert!(session.handoff().is_empty());
}

#[test]
fn emptying_cart_during_checkout_blocks_submit() {
    let (mut session, _) = start();
    fill_burger_and_two_colas(&mut session);
    dine_in_for_ana(&mut session);

    session.remove_item("hamburguesa-clasica");
    session.decrement("refresco-cola");
    session.decrement("refresco-cola");
    assert!(session.cart().is_empty());

    assert_eq!(
        session.submit_order().unwrap_err(),
        SessionError::Checkout(CheckoutError::EmptyCart)
    );
    assert!(session.handoff().is_empty());
    assert_eq!(session.checkout().unwrap().step(), WizardStep::Summary);
}

#[test]
fn category_browsing_is_stable() {
    let (mut session, _) = start();
    session.select_category(Category::Acompanantes);

    let first: Vec<String> = session
        .visible_products()
        .iter()
        .map(|p| p.id_typed().to_string())
        .collect();
    let second: Vec<String> = session
        .visible_products()
        .iter()
        .map(|p| p.id_typed().to_string())
        .collect();

    assert_eq!(first, vec!["papas-fritas", "aros-cebolla", "nachos-queso"]);
    assert_eq!(first, second);
}

#[test]
fn emptied_cart_stops_an_open_checkout() {
    let (mut session, notifications) = start();
    session.add_to_cart("hamburguesa-clasica").unwrap();
    session.begin_checkout().unwrap();
    session.choose_fulfillment(FulfillmentKind::DineIn).unwrap();
    session.remove_item("hamburguesa-clasica");
    notifications.drain();

    assert_eq!(
        session.begin_checkout().unwrap_err(),
        SessionError::Checkout(CheckoutError::EmptyCart)
    );
    assert_eq!(
        session.next_step().unwrap_err(),
        SessionError::Checkout(CheckoutError::EmptyCart)
    );
    assert_eq!(
        session.checkout().unwrap().step(),
        WizardStep::FulfillmentType
    );
    assert!(matches!(
        notifications.drain().as_slice(),
        [Notification::CartEmpty { .. }, Notification::CartEmpty { .. }]
    ));

    session.add_to_cart("hamburguesa-clasica").unwrap();
    assert_eq!(session.next_step().unwrap(), WizardStep::CustomerDetails);
}

#[test]
fn malformed_ids_leave_the_cart_alone() {
    let (mut session, notifications) = start();
    session.add_to_cart("hotdog-clasico").unwrap();
    notifications.drain();

    session.increment("hot dog");
    session.decrement("hot dog");
    session.set_quantity(" ", 3);
    session.remove_item("");

    assert_eq!(session.cart().item_count(), 1);
    assert!(notifications.drain().is_empty());
}
