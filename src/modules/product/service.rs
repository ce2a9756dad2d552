use super::repository::{self, Product};
use crate::{
    modules::{auth::middleware::Auth, restaurant},
    utils::money,
};
use itertools::Itertools;
use serde::Serialize;
use sqlx::{types::BigDecimal, PgExecutor};
use std::collections::BTreeMap;

/// Products keyed by category name, in alphabetical order.
pub type Menu = BTreeMap<String, Vec<Product>>;

#[derive(Serialize, Clone, Debug)]
pub struct RestaurantCatalog {
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub menu: Menu,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
    ProductNotFound,
    RestaurantNotFound,
    NotRestaurantOwner,
}

impl From<restaurant::service::Error> for Error {
    fn from(err: restaurant::service::Error) -> Self {
        match err {
            restaurant::service::Error::RestaurantNotFound => Self::RestaurantNotFound,
            restaurant::service::Error::NotRestaurantOwner => Self::NotRestaurantOwner,
            restaurant::service::Error::UnexpectedError => Self::UnexpectedError,
        }
    }
}

pub fn group_by_category(products: impl IntoIterator<Item = Product>) -> Menu {
    products.into_iter().fold(Menu::new(), |mut menu, product| {
        menu.entry(product.category_name.clone())
            .or_default()
            .push(product);
        menu
    })
}

/// Groups products per restaurant (ordered by name) and then per category.
pub fn group_by_restaurant(products: Vec<Product>) -> Vec<RestaurantCatalog> {
    let chunks = products
        .into_iter()
        .sorted_by(|a, b| {
            a.restaurant_name
                .cmp(&b.restaurant_name)
                .then_with(|| a.restaurant_id.cmp(&b.restaurant_id))
        })
        .chunk_by(|product| (product.restaurant_id.clone(), product.restaurant_name.clone()));

    let mut catalog = Vec::new();
    for ((restaurant_id, restaurant_name), products) in &chunks {
        catalog.push(RestaurantCatalog {
            restaurant_id,
            restaurant_name,
            menu: group_by_category(products),
        });
    }

    catalog
}

pub fn is_valid_price(price: &BigDecimal) -> bool {
    *price >= BigDecimal::from(0) && money::is_storable(price)
}

/// Loads a product and checks the principal owns its restaurant.
pub async fn find_owned<'e, E>(e: E, id: String, auth: &Auth) -> Result<Product, Error>
where
    E: PgExecutor<'e> + Copy,
{
    let product = repository::find_by_id(e, id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::ProductNotFound)?;

    restaurant::service::find_owned(e, product.restaurant_id.clone(), auth).await?;

    Ok(product)
}

#[cfg(test)]
pub mod test {
    use super::*;
    use chrono::Utc;
    use std::str::FromStr;
    use ulid::Ulid;

    pub fn product(restaurant: (&str, &str), category: &str, name: &str, price: &str) -> Product {
        Product {
            id: Ulid::new().to_string(),
            restaurant_id: restaurant.0.to_string(),
            restaurant_name: restaurant.1.to_string(),
            category_id: format!("category-{}", category),
            category_name: category.to_string(),
            name: name.to_string(),
            description: None,
            price: BigDecimal::from_str(price).unwrap(),
            image_url: None,
            is_active: true,
            quantity: 10,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn should_group_menu_by_category_in_order() {
        let trattoria = ("r1", "Trattoria");
        let menu = group_by_category(vec![
            product(trattoria, "Pizza", "Margherita", "9.50"),
            product(trattoria, "Desserts", "Tiramisu", "6.00"),
            product(trattoria, "Pizza", "Diavola", "11.00"),
        ]);

        assert_eq!(
            menu.keys().cloned().collect::<Vec<_>>(),
            vec!["Desserts".to_string(), "Pizza".to_string()]
        );
        assert_eq!(
            menu["Pizza"]
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Margherita", "Diavola"]
        );
    }

    #[test]
    fn should_group_catalog_by_restaurant_then_category() {
        let catalog = group_by_restaurant(vec![
            product(("r2", "Zen Sushi"), "Rolls", "California", "8.00"),
            product(("r1", "Amigos"), "Tacos", "Al Pastor", "3.50"),
            product(("r2", "Zen Sushi"), "Nigiri", "Salmon", "4.00"),
            product(("r1", "Amigos"), "Tacos", "Carnitas", "3.50"),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].restaurant_name, "Amigos");
        assert_eq!(catalog[0].menu["Tacos"].len(), 2);
        assert_eq!(catalog[1].restaurant_name, "Zen Sushi");
        assert_eq!(
            catalog[1].menu.keys().cloned().collect::<Vec<_>>(),
            vec!["Nigiri".to_string(), "Rolls".to_string()]
        );
    }

    #[test]
    fn should_keep_restaurants_with_same_name_apart() {
        let catalog = group_by_restaurant(vec![
            product(("r1", "Diner"), "Mains", "Burger", "10.00"),
            product(("r2", "Diner"), "Mains", "Steak", "20.00"),
        ]);

        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn should_return_empty_catalog_for_no_products() {
        assert!(group_by_restaurant(vec![]).is_empty());
        assert!(group_by_category(vec![]).is_empty());
    }

    #[test]
    fn should_reject_negative_or_sub_cent_prices() {
        assert!(is_valid_price(&BigDecimal::from_str("0.00").unwrap()));
        assert!(is_valid_price(&BigDecimal::from_str("12.99").unwrap()));
        assert!(!is_valid_price(&BigDecimal::from_str("-1").unwrap()));
        assert!(!is_valid_price(&BigDecimal::from_str("4.999").unwrap()));
    }
}
