use super::types::{request, response};
use crate::{modules::user::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let deleted = repository::delete_by_id(&ctx.db_conn.pool, payload.auth.user.id.clone())
        .await
        .map_err(|_| response::Error::FailedToDeleteAccount)?;

    if !deleted {
        return Err(response::Error::AccountNotFound);
    }

    tracing::info!("Deleted account {}", payload.auth.user.id);

    Ok(response::Success::AccountDeleted)
}
