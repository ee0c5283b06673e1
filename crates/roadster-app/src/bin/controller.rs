//! Controller process: answers every sensor datagram with the pursuit law's
//! control input.

use tracing::info;

use roadster_net::{ControllerServer, NetConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    roadster_app::init_tracing();

    let config = NetConfig::from_env();
    let mut server = ControllerServer::bind(&config.listen_addr)?;
    info!(listen = %config.listen_addr, "roadster controller ready");
    server.serve()?;
    Ok(())
}
