mod rest;
pub use rest::{RestClient, DISCORD_API_BASE};
