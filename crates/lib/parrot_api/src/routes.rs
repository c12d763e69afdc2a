//! Route paths.

pub const POST_API_CHAT: &str = "/api/chat";
pub const GET_HEALTH: &str = "/health";
