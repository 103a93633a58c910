//! Seeds the category and subcategory tables from the configured catalog.
//!
//! Runs pending migrations, then the category seeder, then the subcategory
//! seeder, acting as the configured single user. Each result is printed as
//! a JSON line.

use anyhow::Context;
use gigboard_core::{catalog::Catalog, config::load_config};
use gigboard_db::{
    db::{DbProvider, connection::create_pool, migrate::run_pending_migrations},
    depot_types::DepotUser,
};
use gigboard_service::{
    auth::{Identity, resolve_user},
    seed::{CategorySeeder, SeedReport, Seeder, SubcategorySeeder},
};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    fmt()
        .with_env_filter(
            EnvFilter::try_new(config.logging.level.as_str())
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let catalog = Catalog::load(config.seed.catalog_path.as_deref())?;
    tracing::info!(
        version = catalog.version(),
        categories = catalog.category_count(),
        subcategories = catalog.subcategory_count(),
        "Seed catalog loaded"
    );

    let single_user = config
        .auth
        .single_user
        .as_ref()
        .context("The seed command acts as the single user; configure auth.single_user")?;

    run_pending_migrations(&config.database.url).await?;

    let pool = create_pool(&config.database.url, 1).await?;
    let mut conn = pool.get_connection().await?;

    let user = resolve_user(&mut conn, &Identity::from_single_user(single_user)).await?;
    let caller = DepotUser::User(user);

    let categories = CategorySeeder::new(&catalog).seed(&mut conn, &caller).await?;
    println!("{}", serde_json::to_string(&SeedReport::from(categories))?);

    let subcategories = SubcategorySeeder::new(&catalog)
        .seed(&mut conn, &caller)
        .await?;
    println!("{}", serde_json::to_string(&SeedReport::from(subcategories))?);

    Ok(())
}
