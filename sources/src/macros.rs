//! Define our own macro to simplify the code
//!

/// Call the HTTP client with the proper arguments
///
/// - unauth call to fetch data, we only want JSON back
///
#[macro_export]
macro_rules! http_get {
    ($client:expr, $url:expr) => {
        $client
            .get($url)
            .header(
                "user-agent",
                format!("{}/{}", crate_name!(), crate_version!()),
            )
            .header("accept", "application/json")
            .send()
    };
}
