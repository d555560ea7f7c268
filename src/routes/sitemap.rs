use actix_web::{http::header::ContentType, web, HttpResponse};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(sitemap)));
}

/// Every route the service exposes, as (method, path).
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/people"),
    ("GET", "/people/{id}"),
    ("GET", "/planets"),
    ("GET", "/planets/{id}"),
    ("GET", "/users"),
    ("GET", "/users/favorites?user_id={user_id}"),
    ("POST", "/favorite/planet/{id}?user_id={user_id}"),
    ("POST", "/favorite/people/{id}?user_id={user_id}"),
    ("DELETE", "/favorite/planet/{id}?user_id={user_id}"),
    ("DELETE", "/favorite/people/{id}?user_id={user_id}"),
];

async fn sitemap() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render(ROUTES))
}

fn render(routes: &[(&str, &str)]) -> String {
    let items = routes
        .iter()
        .map(|(method, path)| {
            if *method == "GET" && !path.contains('{') {
                format!("<li>{} <a href=\"{}\">{}</a></li>", method, path, path)
            } else {
                format!("<li>{} {}</li>", method, path)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "<!DOCTYPE html>\n<html><head><title>Star Wars API</title></head><body>\n<h1>Star Wars API</h1>\n<ul>\n{}\n</ul>\n</body></html>",
        items
    )
}
