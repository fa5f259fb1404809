//! Export static artifacts

use anyhow::Result;

use crate::export::Exporter;
use crate::store::ContentStore;
use crate::Site;

/// Seed the content store and export its static artifact set
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let store = ContentStore::seeded();
    tracing::info!(
        "Loaded {} posts ({} featured) from the content store",
        store.posts().len(),
        store.featured_posts().len()
    );

    let exporter = Exporter::new(&site.content_dir);
    let summary = exporter.export(&store)?;

    tracing::info!(
        "Exported {} posts ({} featured) to {:?}",
        summary.posts,
        summary.featured,
        site.content_dir
    );

    let duration = start.elapsed();
    tracing::info!("Completed in {:.2}s", duration.as_secs_f64());

    Ok(())
}
