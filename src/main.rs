use anyhow::Result;
use brokerage_store::{Filters, ListingService, StoreConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏠 Brokerage Store");

    let config = StoreConfig::from_env()?;
    info!(data_dir = %config.data_dir.display(), "Opening record store");
    let service = ListingService::from_config(&config)?;

    let stats = service.dashboard_stats();
    info!(
        properties = stats.properties,
        projects = stats.projects,
        blogs = stats.blogs,
        developers = stats.developers,
        testimonials = stats.testimonials,
        contacts = stats.contact_submissions,
        wishlist = stats.wishlist,
        "Collections ready"
    );

    for (i, property) in service
        .get_featured_properties(None)
        .await
        .iter()
        .enumerate()
    {
        println!("{}. {} ({} AED)", i + 1, property.title, property.price);
        println!("   {} · {}", property.location, property.category);
        println!("   ID: {}", property.meta.id);
    }

    let blogs = service.get_blogs(&Filters::new().limit(3)).await?;
    for blog in &blogs.data {
        println!("📰 {} [{}]", blog.title, blog.category);
    }

    Ok(())
}
