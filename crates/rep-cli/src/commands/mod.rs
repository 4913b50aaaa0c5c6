pub mod dispatch;
pub mod resolve;
pub mod schema;
pub mod show;
pub mod stats;
