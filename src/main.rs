use roster_query_api::domain::repositories::PlayerQueryRepository;
use roster_query_api::infrastructure::config::{AppConfig, QueryConfig};
use roster_query_api::infrastructure::repositories::PostgresPlayerRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    let query = QueryConfig::from_env()?;

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Database connected successfully");

    let repository = PostgresPlayerRepository::new(pool);
    let page = repository
        .find_filtered_page_optimized(&query.param, &query.request)
        .await?;

    tracing::info!(
        total_elements = page.total_elements,
        total_pages = page.total_pages,
        "Query finished"
    );
    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}
