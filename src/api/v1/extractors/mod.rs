pub mod auth_ctx;
pub mod json;
pub mod path;

pub use auth_ctx::{AuthCtx, AuthCtxExtractor};
pub use json::JsonBody;
pub use path::PathParam;
