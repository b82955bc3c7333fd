//! Migrate command - manual control over the `users` and `jobs` schema.

use sea_orm::DbErr;

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // `serve` migrates on connect; here the action decides
    let db = Database::connect_without_migrations(&config.database_url)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let outcome = apply(&db, args.action).await;

    if let Err(e) = db.close().await {
        tracing::warn!(error = %e, "Failed to close database after migration");
    }

    outcome.map_err(|e| AppError::internal(format!("Migration {} failed: {}", label(args.action), e)))
}

async fn apply(db: &Database, action: MigrateAction) -> Result<(), DbErr> {
    tracing::info!(action = label(action), "Running migration command");

    match action {
        MigrateAction::Up => db.run_migrations().await?,
        MigrateAction::Down => db.rollback_migration().await?,
        MigrateAction::Fresh => {
            tracing::warn!("Dropping users and jobs tables before re-applying migrations");
            db.fresh_migrations().await?
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            print!("{}", render_status(&status));
            return Ok(());
        }
    }

    tracing::info!(action = label(action), "Migration command completed");
    Ok(())
}

fn label(action: MigrateAction) -> &'static str {
    match action {
        MigrateAction::Up => "up",
        MigrateAction::Down => "down",
        MigrateAction::Status => "status",
        MigrateAction::Fresh => "fresh",
    }
}

/// One line per migration, then a pending count.
fn render_status(status: &[(String, bool)]) -> String {
    let width = status.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let pending = status.iter().filter(|(_, applied)| !applied).count();

    let mut out = String::new();
    for (name, applied) in status {
        let state = if *applied { "applied" } else { "pending" };
        out.push_str(&format!("{:<width$}  {}\n", name, state, width = width));
    }
    out.push_str(&format!("{} of {} pending\n", pending, status.len()));
    out
}
