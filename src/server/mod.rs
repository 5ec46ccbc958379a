//! Local preview server
//!
//! Pages are rendered per request from the resolver, so a new slug shows up
//! without regenerating. Anything else falls back to the files in the public
//! directory.

use anyhow::Result;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::Utc;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::Domain;
use crate::generator::Sitemap;
use crate::seo::StaticPage;
use crate::templates::{RenderedPage, SiteRenderer};
use crate::Site;

/// Server state
struct ServerState {
    renderer: SiteRenderer,
    public_dir: PathBuf,
}

/// Build the application router for a site
pub fn router(site: &Site) -> Result<Router> {
    let state = Arc::new(ServerState {
        renderer: site.renderer()?,
        public_dir: site.public_dir.clone(),
    });

    let mut app = Router::new();
    for page in StaticPage::ALL {
        app = app.route(
            &format!("/{}", page.path()),
            get(move |State(state): State<Arc<ServerState>>| async move {
                static_page(&state, page)
            }),
        );
    }

    Ok(app
        .route("/blog/:slug", get(blog_post_handler))
        .route("/services/:slug", get(service_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Start the preview server
pub async fn start(site: &Site, ip: &str, port: u16, open: bool) -> Result<()> {
    let app = router(site)?;

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn static_page(state: &ServerState, page: StaticPage) -> Response {
    match state.renderer.render_static(page) {
        Ok(html) => Html(html).into_response(),
        Err(e) => internal_error(e),
    }
}

fn record_page(state: &ServerState, domain: Domain, slug: &str) -> Response {
    match state.renderer.render_record(domain, slug) {
        Ok(RenderedPage::Found(html)) => Html(html).into_response(),
        Ok(RenderedPage::NotFound(html)) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => internal_error(e),
    }
}

fn not_found_page(state: &ServerState) -> Response {
    match state.renderer.render_not_found(None) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => internal_error(e),
    }
}

fn internal_error(e: anyhow::Error) -> Response {
    tracing::error!("Render failed: {:#}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
}

async fn blog_post_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    record_page(&state, Domain::Blog, &slug)
}

async fn service_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    record_page(&state, Domain::Service, &slug)
}

async fn sitemap_handler(State(state): State<Arc<ServerState>>) -> Response {
    let sitemap = Sitemap::build(state.renderer.resolver(), Utc::now());
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap.to_xml(),
    )
        .into_response()
}

/// Serve generated or static files; unknown paths get the not-found page
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let mut service = ServeDir::new(&state.public_dir).append_index_html_on_directories(true);
    match service.try_call(request).await {
        Ok(response) if response.status() == StatusCode::NOT_FOUND => not_found_page(&state),
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!("Static file error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
        }
    }
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn state(dir: &TempDir) -> Arc<ServerState> {
        let site = Site::new(dir.path()).unwrap();
        Arc::new(ServerState {
            renderer: site.renderer().unwrap(),
            public_dir: site.public_dir.clone(),
        })
    }

    async fn body(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_known_post() {
        let dir = TempDir::new().unwrap();
        let response = blog_post_handler(
            State(state(&dir)),
            Path("seo-importance-digital-marketing".to_string()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body(response).await.contains(r#""@type":"BlogPosting""#));
    }

    #[tokio::test]
    async fn test_unknown_service_is_404() {
        let dir = TempDir::new().unwrap();
        let response =
            service_handler(State(state(&dir)), Path("web-design".to_string())).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = body(response).await;
        assert!(html.contains("<title>Service Not Found | "));
        assert!(!html.contains("application/ld+json"));
    }

    #[tokio::test]
    async fn test_sitemap() {
        let dir = TempDir::new().unwrap();
        let response = sitemap_handler(State(state(&dir))).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/xml; charset=utf-8"
        );
        assert_eq!(body(response).await.matches("<url>").count(), 16);
    }

    #[tokio::test]
    async fn test_fallback_serves_public_files() {
        let dir = TempDir::new().unwrap();
        let public = dir.path().join("public");
        fs::create_dir_all(&public).unwrap();
        fs::write(public.join("robots.txt"), "User-agent: *\n").unwrap();

        let request = Request::builder()
            .uri("/robots.txt")
            .body(Body::empty())
            .unwrap();
        let response = fallback_handler(State(state(&dir)), request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body(response).await, "User-agent: *\n");
    }

    #[tokio::test]
    async fn test_fallback_unknown_path() {
        let dir = TempDir::new().unwrap();
        let request = Request::builder()
            .uri("/careers")
            .body(Body::empty())
            .unwrap();
        let response = fallback_handler(State(state(&dir)), request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = body(response).await;
        assert!(html.contains("<title>Page Not Found | "));
        assert!(html.contains(r#"<meta name="robots" content="noindex">"#));
    }

    #[test]
    fn test_router_builds() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert!(router(&site).is_ok());
    }
}
