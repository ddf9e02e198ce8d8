//! Development server for the generated site

use anyhow::Result;
use axum::http::StatusCode;
use axum::Router;
use std::net::SocketAddr;

use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_status::SetStatus;
use tower_http::trace::TraceLayer;

use crate::Site;

/// Start the development server over the public directory
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let not_found = SetStatus::new(
        ServeFile::new(site.public_dir.join("404.html")),
        StatusCode::NOT_FOUND,
    );
    let files = ServeDir::new(&site.public_dir)
        .append_index_html_on_directories(true)
        .not_found_service(not_found);

    let app = Router::new()
        .fallback_service(files)
        .layer(TraceLayer::new_for_http());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
