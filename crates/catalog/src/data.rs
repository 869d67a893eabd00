//! The built-in menu.

use crate::product::Category;

/// Version of the built-in menu. Bump whenever an entry changes.
pub const BUILTIN_VERSION: u32 = 1;

/// Raw menu entry: id, name, description, price, image, category.
pub(crate) type Seed = (
    &'static str,
    &'static str,
    &'static str,
    u32,
    &'static str,
    Category,
);

pub(crate) const BUILTIN_PRODUCTS: &[Seed] = &[
    (
        "hamburguesa-clasica",
        "Hamburguesa Clásica",
        "Jugosa carne de res, lechuga fresca, tomate, cebolla y nuestra salsa especial",
        120,
        "assets/hamburger-classic.jpg",
        Category::Hamburguesas,
    ),
    (
        "hamburguesa-doble",
        "Hamburguesa Doble",
        "Doble carne de res, queso americano, tocino crujiente y verduras frescas",
        180,
        "assets/hamburger-classic.jpg",
        Category::Hamburguesas,
    ),
    (
        "hamburguesa-bbq",
        "Hamburguesa BBQ",
        "Carne de res con salsa BBQ, aros de cebolla, queso cheddar y tocino",
        160,
        "assets/hamburger-classic.jpg",
        Category::Hamburguesas,
    ),
    (
        "hotdog-clasico",
        "Hot Dog Clásico",
        "Salchicha de res en pan brioche con mostaza, ketchup y cebolla",
        80,
        "assets/hot-dog-classic.jpg",
        Category::Hotdogs,
    ),
    (
        "hotdog-especial",
        "Hot Dog Especial",
        "Salchicha premium con guacamole, pico de gallo y queso oaxaca",
        110,
        "assets/hot-dog-classic.jpg",
        Category::Hotdogs,
    ),
    (
        "hotdog-chilango",
        "Hot Dog Chilango",
        "Salchicha envuelta en tocino, frijoles, cebolla, jalapeño y salsa verde",
        130,
        "assets/hot-dog-classic.jpg",
        Category::Hotdogs,
    ),
    (
        "refresco-cola",
        "Refresco de Cola",
        "Refresco de cola bien frío, 500ml",
        25,
        "assets/soda-cold.jpg",
        Category::Bebidas,
    ),
    (
        "agua-natural",
        "Agua Natural",
        "Agua purificada, 600ml",
        15,
        "assets/soda-cold.jpg",
        Category::Bebidas,
    ),
    (
        "jugo-naranja",
        "Jugo de Naranja",
        "Jugo de naranja natural recién exprimido, 400ml",
        35,
        "assets/soda-cold.jpg",
        Category::Bebidas,
    ),
    (
        "papas-fritas",
        "Papas Fritas",
        "Papas doradas y crujientes con sal de mar",
        40,
        "assets/fries-golden.jpg",
        Category::Acompanantes,
    ),
    (
        "aros-cebolla",
        "Aros de Cebolla",
        "Aros de cebolla empanizados y fritos hasta quedar dorados",
        50,
        "assets/fries-golden.jpg",
        Category::Acompanantes,
    ),
    (
        "nachos-queso",
        "Nachos con Queso",
        "Totopos crujientes con queso cheddar derretido y jalapeños",
        60,
        "assets/fries-golden.jpg",
        Category::Acompanantes,
    ),
    (
        "combo-clasico",
        "Combo Clásico",
        "Hamburguesa clásica + papas fritas + refresco",
        150,
        "assets/hamburger-classic.jpg",
        Category::Promociones,
    ),
    (
        "combo-hotdog",
        "Combo Hot Dog",
        "Hot dog especial + papas fritas + bebida",
        120,
        "assets/hot-dog-classic.jpg",
        Category::Promociones,
    ),
];
