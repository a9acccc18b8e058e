pub mod head_client;
pub mod http_image_validator;

pub use head_client::{HeadClient, NoRedirectHttpClient};
pub use http_image_validator::HttpImageValidator;
