pub mod config;
pub mod error;
pub mod names;
pub mod output;
pub mod resolve;
pub mod sparql;

pub use config::Config;
pub use error::{BiohopError, Result};
pub use resolve::{resolve, resolve_flat, AnswerNode, ROOT_RELATION};
pub use sparql::{GraphClient, QueryResult, SparqlClient, ERROR, UNKNOWN};
