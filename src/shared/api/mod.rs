mod json_config;
mod not_found;
mod response;

pub use json_config::{custom_json_config, custom_path_config, custom_query_config};
pub use not_found::route_not_found;
pub use response::ApiResponse;
