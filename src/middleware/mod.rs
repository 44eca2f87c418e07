pub mod auth;
pub mod cache;
pub mod minify;
pub mod role;

pub use auth::{identify_middleware, require_auth};
pub use cache::cache_control_middleware;
pub use minify::minify_html_middleware;
pub use role::{require_admin, require_staff};
