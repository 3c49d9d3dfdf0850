//! Application state and composition root.

use std::sync::Arc;

use fintrack_core::goals::{GoalService, GoalServiceTrait};
use fintrack_core::transactions::{TransactionService, TransactionServiceTrait};
use fintrack_core::users::{UserService, UserServiceTrait};
use fintrack_storage_sqlite::db::write_actor::spawn_writer;
use fintrack_storage_sqlite::goals::GoalRepository;
use fintrack_storage_sqlite::transactions::TransactionRepository;
use fintrack_storage_sqlite::users::UserRepository;
use fintrack_storage_sqlite::{create_pool, init, run_migrations, DbPool};

use crate::auth::AuthManager;
use crate::config::Config;

pub struct AppState {
    pub pool: Arc<DbPool>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub auth: AuthManager,
}

pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let json = std::env::var("FT_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }
}

/// Opens the database, runs migrations, spawns the writer actor and wires
/// repositories into services. Must run inside a tokio runtime.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = init(&config.db_path)?;
    let pool = create_pool(&db_path)?;
    run_migrations(&pool)?;
    tracing::info!(path = %db_path, "database ready");

    let writer = spawn_writer((*pool).clone());

    let user_repo = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let transaction_repo = Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let goal_repo = Arc::new(GoalRepository::new(pool.clone(), writer));

    let user_service = Arc::new(UserService::new(user_repo));
    let transaction_service = Arc::new(TransactionService::new(transaction_repo.clone()));
    let goal_service = Arc::new(GoalService::new(goal_repo, transaction_repo));

    let auth = AuthManager::new(&config.jwt_secret, config.token_ttl);

    Ok(Arc::new(AppState {
        pool,
        user_service,
        transaction_service,
        goal_service,
        auth,
    }))
}
