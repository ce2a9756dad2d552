use super::repository::{self, Restaurant};
use crate::modules::auth::middleware::Auth;
use sqlx::PgExecutor;

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
    RestaurantNotFound,
    NotRestaurantOwner,
}

pub fn is_owner(restaurant: &Restaurant, auth: &Auth) -> bool {
    auth.is(&restaurant.owner_email)
}

/// Loads a restaurant and checks the principal owns it.
pub async fn find_owned<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    auth: &Auth,
) -> Result<Restaurant, Error> {
    let restaurant = repository::find_by_id(e, id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::RestaurantNotFound)?;

    if !is_owner(&restaurant, auth) {
        tracing::warn!(
            "User {} attempted to modify restaurant {} they do not own",
            auth.user.id,
            restaurant.id
        );
        return Err(Error::NotRestaurantOwner);
    }

    Ok(restaurant)
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::modules::user::repository::{test::user, Role};
    use chrono::Utc;
    use ulid::Ulid;

    pub fn restaurant(owner: &crate::modules::user::repository::User) -> Restaurant {
        Restaurant {
            id: Ulid::new().to_string(),
            owner_id: owner.id.clone(),
            owner_email: owner.email.clone(),
            name: "Trattoria".to_string(),
            description: None,
            cuisine_id: Ulid::new().to_string(),
            cuisine_name: "Italian".to_string(),
            phone: None,
            email: None,
            address: None,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn should_recognise_owner_by_email() {
        let owner = user("owner@example.com", Role::Restaurant);
        let restaurant = restaurant(&owner);

        assert!(is_owner(&restaurant, &Auth { user: owner }));
    }

    #[test]
    fn should_reject_other_principals() {
        let owner = user("owner@example.com", Role::Restaurant);
        let restaurant = restaurant(&owner);
        let intruder = user("intruder@example.com", Role::Restaurant);

        assert!(!is_owner(&restaurant, &Auth { user: intruder }));
    }

    #[test]
    fn should_not_expose_owner_email() {
        let owner = user("owner@example.com", Role::Restaurant);
        let json = serde_json::to_value(restaurant(&owner)).unwrap();

        assert!(json.get("owner_email").is_none());
        assert_eq!(json["cuisine_name"], "Italian");
    }
}
