mod handle;
use handle::handle;

mod response;
pub use response::DispatchResponse;

mod server;
pub use server::Server;
