// Copyright © 2025 Akira Miyakoda
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use clap::Parser;
use log::info;

mod almanac;
mod api;
mod query;

#[derive(Debug, Parser)]
#[command(name = "suntimes", version, about = "Sunrise, sunset and moon times service")]
struct Args {
    /// Port to listen on.
    #[arg(default_value_t = 8500)]
    port: u16,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logger::init();

    let args = Args::parse();

    info!("Suntimes: almanac service started");

    api::serve(args.port).await
}
