mod client;

pub use client::{UpstreamError, ensure_success, new_client};
