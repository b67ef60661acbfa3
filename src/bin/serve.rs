//! Development server for gitlearn
//!
//! A minimal static file server for `index.html` and the wasm-pack output
//! in `pkg/`. No dependencies beyond tiny_http.

use std::fs;
use std::path::Path;
use tiny_http::{Header, Response, Server};

const DEFAULT_PORT: u16 = 8080;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BoxError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let port = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr = format!("0.0.0.0:{}", port);
    let server = Server::http(&addr)?;

    println!("┌─────────────────────────────────────┐");
    println!("│  gitlearn dev server                │");
    println!("├─────────────────────────────────────┤");
    println!("│  http://localhost:{}              │", port);
    println!("└─────────────────────────────────────┘");

    for request in server.incoming_requests() {
        let file_path = request_path(request.url());
        log::debug!("{} {}", request.method(), request.url());

        let response = match file_path {
            Some(path) => serve_file(&path)?,
            None => not_found()?,
        };
        if let Err(e) = request.respond(response) {
            log::warn!("respond failed: {}", e);
        }
    }
    Ok(())
}

/// Map a request URL to a relative file path. Refuses `..` segments.
fn request_path(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    if path.split('/').any(|seg| seg == "..") {
        return None;
    }
    match path.trim_start_matches('/') {
        "" => Some("index.html".to_string()),
        rest => Some(rest.to_string()),
    }
}

fn content_type(value: &str) -> Result<Header, BoxError> {
    Header::from_bytes("Content-Type", value).map_err(|_| "bad header".into())
}

fn not_found() -> Result<Response<std::io::Cursor<Vec<u8>>>, BoxError> {
    Ok(Response::from_string("404 Not Found")
        .with_status_code(404)
        .with_header(content_type("text/plain")?))
}

fn serve_file(path: &str) -> Result<Response<std::io::Cursor<Vec<u8>>>, BoxError> {
    let path = Path::new(path);

    match fs::read(path) {
        Ok(contents) => Ok(Response::from_data(contents).with_header(content_type(mime_type(path))?)),
        Err(_) => not_found(),
    }
}

fn mime_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
