pub mod db;

mod utils;
pub use utils::*;

mod errors;
pub use errors::*;

mod cli;
pub use cli::*;

mod dates;
pub use dates::*;

mod state;
pub use state::*;

pub mod routes;
