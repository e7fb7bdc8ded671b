//! # Postview Binary
//!
//! Host for the post list view: mounts it, prints the placeholder frame,
//! then waits for the fetch to settle and prints the final frame. On fetch
//! failure the two frames are identical and the diagnostic lands in the log.

use std::sync::Arc;

use anyhow::Result;
use pv_component::PostListView;
use pv_source_http::HttpPostSource;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let source = Arc::new(HttpPostSource::new());
    info!(endpoint = source.endpoint(), "mounting post list view");

    let view = PostListView::mount(source);
    println!("{}", view.render());

    view.settled().await;
    info!(phase = ?view.phase(), "fetch settled");

    println!("{}", view.render());
    Ok(())
}
