/// HTTP client for the TwelveData REST API
pub mod http_client;
