mod connect;
mod schema;
mod sink;

pub use connect::*;
pub use schema::*;
pub use sink::*;
