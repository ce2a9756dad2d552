use super::repository::{self, Review};
use crate::modules::auth::middleware::Auth;
use sqlx::PgExecutor;

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
    ReviewNotFound,
    NotReviewAuthor,
}

pub fn is_author(review: &Review, auth: &Auth) -> bool {
    auth.is(&review.user_email)
}

/// Mean score rounded to one decimal, `None` when nobody has reviewed yet.
pub fn average_score(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }

    let sum = reviews.iter().map(|review| review.score as f64).sum::<f64>();
    Some((sum / reviews.len() as f64 * 10.0).round() / 10.0)
}

pub async fn find_authored<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    auth: &Auth,
) -> Result<Review, Error> {
    let review = repository::find_by_id(e, id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::ReviewNotFound)?;

    if !is_author(&review, auth) {
        tracing::warn!(
            "User {} attempted to modify review {} written by someone else",
            auth.user.id,
            review.id
        );
        return Err(Error::NotReviewAuthor);
    }

    Ok(review)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::modules::user::repository::{test::user, Role};
    use ulid::Ulid;

    fn review(email: &str, score: i32) -> Review {
        Review {
            id: Ulid::new().to_string(),
            restaurant_id: Ulid::new().to_string(),
            user_id: Ulid::new().to_string(),
            user_email: email.to_string(),
            user_name: "Jane".to_string(),
            score,
            comments: None,
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn should_average_scores() {
        assert_eq!(average_score(&[]), None);
        assert_eq!(
            average_score(&[
                review("a@example.com", 7),
                review("b@example.com", 8),
                review("c@example.com", 10)
            ]),
            Some(8.3)
        );
    }

    #[test]
    fn should_only_let_author_modify() {
        let review = review("jane@example.com", 9);

        assert!(is_author(
            &review,
            &Auth {
                user: user("JANE@example.com", Role::Client)
            }
        ));
        assert!(!is_author(
            &review,
            &Auth {
                user: user("john@example.com", Role::Client)
            }
        ));
    }

    #[test]
    fn should_hide_author_email() {
        let json = serde_json::to_value(review("jane@example.com", 5)).unwrap();

        assert!(json.get("user_email").is_none());
        assert_eq!(json["user_name"], "Jane");
    }
}
