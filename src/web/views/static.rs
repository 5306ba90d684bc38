use poem::{handler, IntoResponse};

const CACHE_CONTROL: &str = "public, max-age=86400";

#[handler]
pub async fn get_theme_css() -> impl IntoResponse {
    include_bytes!("static/theme.css")
        .with_content_type("text/css")
        .with_header("Cache-Control", CACHE_CONTROL)
}

#[handler]
pub async fn get_robots_txt() -> impl IntoResponse {
    include_bytes!("static/robots.txt")
        .with_content_type("text/plain")
        .with_header("Cache-Control", CACHE_CONTROL)
}
