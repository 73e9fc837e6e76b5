//! Адрес backend-а для запросов из браузера.

/// Порт backend-а (см. `[server] port` в config.toml)
const BACKEND_PORT: u16 = 3000;

/// Base URL of the backend, derived from the current page location.
/// Empty when there is no window.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// `path` should start with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
