use core::str::FromStr;

use serde::{Deserialize, Serialize};

use sabores_core::{DomainError, Entity, Price, ProductId};

/// Menu category (closed set).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Hamburguesas,
    Hotdogs,
    Bebidas,
    Acompanantes,
    Promociones,
}

impl Category {
    /// All categories, in navigation order.
    pub const ALL: [Category; 5] = [
        Category::Hamburguesas,
        Category::Hotdogs,
        Category::Bebidas,
        Category::Acompanantes,
        Category::Promociones,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Hamburguesas => "hamburguesas",
            Category::Hotdogs => "hotdogs",
            Category::Bebidas => "bebidas",
            Category::Acompanantes => "acompanantes",
            Category::Promociones => "promociones",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Hamburguesas => "Hamburguesas",
            Category::Hotdogs => "Hot Dogs",
            Category::Bebidas => "Bebidas",
            Category::Acompanantes => "Acompañantes",
            Category::Promociones => "Promociones",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Hamburguesas => "🍔",
            Category::Hotdogs => "🌭",
            Category::Bebidas => "🥤",
            Category::Acompanantes => "🍟",
            Category::Promociones => "🎉",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown category: {s:?}")))
    }
}

/// An orderable menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Price,
    image: String,
    category: Category,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
        image: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            image: image.into(),
            category,
        }
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Image reference (asset path or URL); opaque to the core.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_slugs_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>().unwrap(), category);
        }
        assert!("postres".parse::<Category>().is_err());
    }

    #[test]
    fn category_serializes_as_slug() {
        let json = serde_json::to_string(&Category::Acompanantes).unwrap();
        assert_eq!(json, "\"acompanantes\"");
    }

    #[test]
    fn identity_ignores_price_and_description() {
        let id = ProductId::new("papas-fritas").unwrap();
        let old = Product::new(
            id.clone(),
            "Papas Fritas",
            "",
            Price::new(45).unwrap(),
            "",
            Category::Acompanantes,
        );
        let repriced = Product::new(
            id,
            "Papas Fritas",
            "Con sal de mar",
            Price::new(50).unwrap(),
            "",
            Category::Acompanantes,
        );
        assert!(old.same_entity(&repriced));
        assert_ne!(old, repriced);
    }

    #[test]
    fn default_category_is_first_in_navigation() {
        assert_eq!(Category::default(), Category::ALL[0]);
    }
}
