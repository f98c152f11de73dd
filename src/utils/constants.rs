/// Base URL of the REST API.
/// Configured at compile time via the API_BASE env var (see build.rs / .env);
/// defaults to the local Django development server.
pub const API_BASE: &str = match option_env!("API_BASE") {
    Some(url) => url,
    None => "http://127.0.0.1:8000/api",
};
