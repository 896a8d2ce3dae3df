mod handle;
use handle::handle;

pub mod response;

mod server;
pub use server::Server;
