mod entities;
mod error;
mod link;
mod request;
mod response;

pub use entities::*;
pub use error::*;
pub use link::*;
pub use request::*;
pub use response::*;
