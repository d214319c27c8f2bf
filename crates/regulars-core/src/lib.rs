pub mod category;
pub mod codec;
pub mod config;
pub mod error;
pub mod extra;
pub mod household;
pub mod io;
pub mod item;
pub mod migrate;
pub mod paths;
pub mod projection;
pub mod session;
pub mod share;
pub mod share_id;
pub mod types;

pub use error::{RegularsError, Result};
