use super::repository::{self, Category, References};
use sqlx::PgConnection;

#[derive(Debug, PartialEq)]
pub enum Deletion {
    /// Only the restaurant's association was removed.
    Disassociated,
    DeletedGlobally,
}

/// Decides what happens to a category once a restaurant lets go of it.
/// `references` must be counted after the restaurant's own association is gone.
pub fn plan_deletion(references: &References) -> Deletion {
    if references.products == 0 && references.restaurants == 0 {
        Deletion::DeletedGlobally
    } else {
        Deletion::Disassociated
    }
}

/// Finds a category by name (case-insensitive) or creates it, then links it to the restaurant.
pub async fn attach_to_restaurant(
    conn: &mut PgConnection,
    restaurant_id: String,
    name: String,
    description: Option<String>,
) -> Result<Category, repository::Error> {
    let category = match repository::find_by_name(&mut *conn, name.clone()).await? {
        Some(category) => category,
        None => {
            repository::create(
                &mut *conn,
                repository::CreateCategoryPayload { name, description },
            )
            .await?
        }
    };

    repository::associate(&mut *conn, restaurant_id, category.id.clone()).await?;

    Ok(category)
}

/// Removes the restaurant's association and drops the category when nothing else uses it.
pub async fn detach_from_restaurant(
    conn: &mut PgConnection,
    restaurant_id: String,
    category_id: String,
) -> Result<Option<Deletion>, repository::Error> {
    if !repository::disassociate(&mut *conn, restaurant_id, category_id.clone()).await? {
        return Ok(None);
    }

    let references = repository::count_references(&mut *conn, category_id.clone()).await?;
    let deletion = plan_deletion(&references);

    if deletion == Deletion::DeletedGlobally {
        repository::delete_by_id(&mut *conn, category_id.clone()).await?;
        tracing::info!("Category {} is no longer referenced and was deleted", category_id);
    }

    Ok(Some(deletion))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_delete_globally_when_unreferenced() {
        let references = References {
            products: 0,
            restaurants: 0,
        };
        assert_eq!(plan_deletion(&references), Deletion::DeletedGlobally);
    }

    #[test]
    fn should_keep_category_used_by_products() {
        let references = References {
            products: 3,
            restaurants: 0,
        };
        assert_eq!(plan_deletion(&references), Deletion::Disassociated);
    }

    #[test]
    fn should_keep_category_used_by_other_restaurants() {
        let references = References {
            products: 0,
            restaurants: 1,
        };
        assert_eq!(plan_deletion(&references), Deletion::Disassociated);
    }

    mod database {
        use super::*;
        use crate::{
            modules::{
                fixtures,
                user::repository::Role,
            },
            types::test::database_context,
        };

        #[tokio::test]
        async fn should_delete_category_no_one_else_uses() {
            let Some(ctx) = database_context().await else {
                return;
            };
            let owner = fixtures::user(&ctx, Role::Restaurant).await;
            let restaurant = fixtures::restaurant(&ctx, &owner).await;
            let name = fixtures::unique("Starters");
            let mut conn = ctx.db_conn.pool.acquire().await.unwrap();

            let category = attach_to_restaurant(&mut conn, restaurant.id.clone(), name.clone(), None)
                .await
                .unwrap();
            let deletion = detach_from_restaurant(&mut conn, restaurant.id, category.id)
                .await
                .unwrap();

            assert_eq!(deletion, Some(Deletion::DeletedGlobally));
            assert!(repository::find_by_name(&mut *conn, name).await.unwrap().is_none());
        }

        #[tokio::test]
        async fn should_keep_category_shared_with_another_restaurant() {
            let Some(ctx) = database_context().await else {
                return;
            };
            let owner = fixtures::user(&ctx, Role::Restaurant).await;
            let first = fixtures::restaurant(&ctx, &owner).await;
            let second = fixtures::restaurant(&ctx, &owner).await;
            let name = fixtures::unique("Desserts");
            let mut conn = ctx.db_conn.pool.acquire().await.unwrap();

            let category = attach_to_restaurant(&mut conn, first.id.clone(), name.clone(), None)
                .await
                .unwrap();
            let shared = attach_to_restaurant(&mut conn, second.id.clone(), name.to_uppercase(), None)
                .await
                .unwrap();
            assert_eq!(shared.id, category.id);

            let deletion = detach_from_restaurant(&mut conn, first.id, category.id.clone())
                .await
                .unwrap();

            assert_eq!(deletion, Some(Deletion::Disassociated));
            assert_eq!(
                repository::count_references(&mut *conn, category.id).await.unwrap(),
                References {
                    products: 0,
                    restaurants: 1,
                }
            );
        }

        #[tokio::test]
        async fn should_keep_category_still_used_by_products() {
            let Some(ctx) = database_context().await else {
                return;
            };
            let owner = fixtures::user(&ctx, Role::Restaurant).await;
            let restaurant = fixtures::restaurant(&ctx, &owner).await;
            let product =
                fixtures::product(&ctx, &restaurant, &fixtures::unique("Mains"), "9.50").await;
            let mut conn = ctx.db_conn.pool.acquire().await.unwrap();

            let deletion =
                detach_from_restaurant(&mut conn, restaurant.id, product.category_id.clone())
                    .await
                    .unwrap();

            assert_eq!(deletion, Some(Deletion::Disassociated));
            assert_eq!(
                repository::count_references(&mut *conn, product.category_id)
                    .await
                    .unwrap(),
                References {
                    products: 1,
                    restaurants: 0,
                }
            );
        }

        #[tokio::test]
        async fn should_report_categories_the_restaurant_does_not_use() {
            let Some(ctx) = database_context().await else {
                return;
            };
            let owner = fixtures::user(&ctx, Role::Restaurant).await;
            let restaurant = fixtures::restaurant(&ctx, &owner).await;
            let mut conn = ctx.db_conn.pool.acquire().await.unwrap();

            let deletion = detach_from_restaurant(&mut conn, restaurant.id, "missing".to_string())
                .await
                .unwrap();

            assert_eq!(deletion, None);
        }
    }
}
