pub mod manager;
pub mod request;

pub use manager::{AiClientError, AiClientManager, AiHandle, InitOutcome};
pub use request::build_request_params;
