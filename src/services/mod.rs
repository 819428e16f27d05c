pub mod api_client;

pub use api_client::{extract_server_message, ApiClient};
