pub mod client;
pub mod constant;
pub mod encoding;
pub mod response;
pub mod user_agent;
