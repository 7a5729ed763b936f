use sqlx::PgPool;

use crate::db::{permissions, roles};
use crate::models::permission::BUILT_IN;
use crate::models::role::{ADMIN_ROLE_NAME, USER_ROLE_NAME};

/// Idempotently installs the built-in permissions and the static `Admin` and
/// `User` roles. Admin is granted every permission when it is first created.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for (name, display_name, description) in BUILT_IN {
        permissions::insert_if_missing(&mut *tx, name, display_name, description).await?;
    }

    let admin = roles::insert_if_missing(
        &mut *tx,
        ADMIN_ROLE_NAME,
        "Administrator",
        "System administrator with full access",
        true,
        false,
    )
    .await?;
    if let Some(admin) = admin {
        let granted = roles::grant_all_permissions(&mut *tx, admin.id).await?;
        tracing::info!(role_id = admin.id, granted, "Created admin role");
    }

    let user = roles::insert_if_missing(
        &mut *tx,
        USER_ROLE_NAME,
        "User",
        "Standard user with limited access",
        true,
        true,
    )
    .await?;
    if let Some(user) = user {
        tracing::info!(role_id = user.id, "Created default user role");
    }

    tx.commit().await?;
    Ok(())
}
