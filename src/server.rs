//! Static file server for the entrance page
//!
//! Serves the built Leptos WASM bundle from the dist/ directory on port 8080

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Component, Path, PathBuf};

fn main() {
    let addr = "127.0.0.1:8080";
    let listener = TcpListener::bind(addr).expect("Failed to bind to port 8080");

    println!("Entrance server running at http://{}", addr);
    println!("Serving from dist/ directory");
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                handle_client(stream);
            }
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    // Parse the request path and drop any query string
    let full_path = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("/");

    let (path, _query) = match full_path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (full_path, None),
    };

    // There is no client-side router, so unknown paths are plain 404s.
    let (status_line, content_type, body) = match resolve_path(path) {
        Some(file_path) => match fs::read(&file_path) {
            Ok(contents) => ("HTTP/1.1 200 OK", content_type_for(&file_path), contents),
            Err(_) => {
                eprintln!("Not found: {}", file_path.display());
                not_found()
            }
        },
        None => not_found(),
    };

    let headers = format!(
        "{}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status_line,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }

    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write body: {}", e);
    }

    let _ = stream.flush();
}

fn not_found() -> (&'static str, &'static str, Vec<u8>) {
    (
        "HTTP/1.1 404 NOT FOUND",
        "text/html; charset=utf-8",
        b"<!DOCTYPE html><html><body><h1>404 Not Found</h1></body></html>".to_vec(),
    )
}

/// Maps a request path to a file under dist/. Returns None for anything
/// that would escape the directory.
fn resolve_path(path: &str) -> Option<PathBuf> {
    if path == "/" || path.is_empty() {
        return Some(PathBuf::from("dist/index.html"));
    }

    let relative = path.strip_prefix('/').unwrap_or(path);

    // Only plain relative segments are servable.
    let requested = Path::new(relative);
    if requested
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }

    let mut file_path = PathBuf::from("dist");
    file_path.push(requested);
    Some(file_path)
}

/// Content types for everything the bundle can contain.
fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("mp4") => "video/mp4",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
