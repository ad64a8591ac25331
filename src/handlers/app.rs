use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /app: the single-page front end, compiled into the binary.
pub async fn app_view() -> Html<&'static str> {
    Html(INDEX_HTML)
}
