pub mod admin;
pub mod maintenance;

pub use admin::require_admin;
pub use maintenance::storefront_gate;
