use crate::commandline::Commandline;
use crate::error::WatchPartyError;
use clap::Parser;

mod commandline;
mod configuration;
mod connection;
mod context;
mod error;
mod lifecycle;
mod message;
mod room;
mod server;
mod utils;

#[tokio::main]
async fn main() -> Result<(), WatchPartyError> {
	let commandline = Commandline::parse();
	commandline.run().await
}
