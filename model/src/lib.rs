mod snowflake;
pub use snowflake::Snowflake;

pub mod interaction;

mod util;
