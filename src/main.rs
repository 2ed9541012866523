use student_management::{
    application::department_service::{DepartmentService, DepartmentServiceImpl},
    config::{self, AppConfig},
    infrastructure::sqlite_repo::SqliteDepartmentRepository,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    config::prepare_sqlite_file(&cfg.database_url)?;
    let repo = SqliteDepartmentRepository::connect(&cfg.database_url, cfg.max_connections).await?;
    repo.init().await?;
    let service = DepartmentServiceImpl::new(repo);

    let departments = service.get_all_departments().await?;
    tracing::info!(
        database_url = %cfg.database_url,
        in_memory = cfg.is_in_memory(),
        count = departments.len(),
        "department store ready"
    );
    Ok(())
}
