pub mod domain;
pub mod infrastructure;

pub use domain::HeadResponse;
pub use infrastructure::{HeadClient, HttpImageValidator, NoRedirectHttpClient};
