// src/api/handlers/static_files.rs
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, warn};

/// Directory the web frontend is served from.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Maps a request path onto a file below the root. `/` serves
    /// `index.html`; anything that would leave the root yields `None`.
    pub fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let decoded = urlencoding::decode(request_path).ok()?;
        let mut path = self.root.clone();
        let mut pushed = false;

        for segment in decoded.split('/').filter(|s| !s.is_empty()) {
            if segment == "." || segment == ".." || segment.contains('\\') || segment.contains('\0') {
                return None;
            }
            path.push(segment);
            pushed = true;
        }

        if !pushed {
            path.push("index.html");
        }
        Some(path)
    }
}

pub fn mime_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

pub async fn serve_static(req: HttpRequest, files: web::Data<StaticFiles>) -> HttpResponse {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return HttpResponse::NotFound().finish();
    }

    let path = match files.resolve(req.path()) {
        Some(path) => path,
        None => {
            warn!("Rejected static path {}", req.path());
            return HttpResponse::NotFound().finish();
        }
    };

    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return HttpResponse::NotFound().finish(),
        Err(e) if e.kind() == ErrorKind::NotFound => return HttpResponse::NotFound().finish(),
        Err(e) => {
            warn!("Failed to stat {}: {}", path.display(), e);
            return HttpResponse::InternalServerError().finish();
        }
    }

    match tokio::fs::read(&path).await {
        Ok(content) => {
            debug!("Serving {}", path.display());
            HttpResponse::Ok().content_type(mime_type(&path)).body(content)
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
