/**
 * Demo Data
 *
 * Populates an empty store with two accounts and one post so a fresh
 * checkout has something to look at:
 *
 * - `admin` / `admin123` (privileged)
 * - `user1` / `user123`
 * - "Getting Started with React" by `admin`, with one comment by `user1`
 *
 * This is the only path that creates a privileged account. It never runs
 * when any account already exists, and configuration refuses it in
 * production.
 */

use sqlx::SqlitePool;

use crate::backend::auth::accounts::{count_accounts, hash_secret, insert_account};
use crate::backend::error::BackendResult;
use crate::backend::posts::db::insert_post;
use crate::shared::{Comment, Post};

const DEMO_POST_TITLE: &str = "Getting Started with React";

const DEMO_POST_BODY: &str = "# React Basics\n\nReact is a JavaScript library for building user interfaces. It allows you to create reusable UI components.\n\n## Key Features\n\n- Component-based architecture\n- Virtual DOM for performance\n- JSX syntax\n\nLearn more at [reactjs.org](https://reactjs.org).";

/// Seed demo data if the store is empty
///
/// Returns `true` if anything was written.
pub async fn seed_demo_data(pool: &SqlitePool, bcrypt_cost: u32) -> BackendResult<bool> {
    if count_accounts(pool).await? > 0 {
        tracing::debug!("Accounts present, skipping demo data");
        return Ok(false);
    }

    let admin_hash = hash_secret("admin123", bcrypt_cost).await?;
    let admin = insert_account(pool, "admin", &admin_hash, true).await?;

    let user_hash = hash_secret("user123", bcrypt_cost).await?;
    let user = insert_account(pool, "user1", &user_hash, false).await?;

    let mut post = Post::new(DEMO_POST_TITLE, DEMO_POST_BODY, admin.identifier.as_str());
    post.comments
        .push(Comment::new("Great introduction!", user.identifier.as_str()));
    insert_post(pool, &post).await?;

    tracing::info!("Demo data seeded (admin, user1, 1 post)");
    Ok(true)
}
