//! Hello-world service.

/// Greeting served at `GET /` by the hello service.
pub const GREETING: &str = "hello from the web side";

/// GET /
pub async fn hello() -> &'static str {
    GREETING
}
