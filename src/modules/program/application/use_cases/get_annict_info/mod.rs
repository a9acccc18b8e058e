mod handler;
mod query;
mod result;

pub use handler::AnnictInfoGetter;
pub use query::GetAnnictInfoQuery;
pub use result::AnnictInfoOutput;
