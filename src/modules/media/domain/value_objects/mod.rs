pub mod head_response;

pub use head_response::HeadResponse;
