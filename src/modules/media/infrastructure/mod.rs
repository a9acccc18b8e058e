pub mod http;

pub use http::{HeadClient, HttpImageValidator, NoRedirectHttpClient};
