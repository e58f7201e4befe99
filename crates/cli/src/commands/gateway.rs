//! `frontdesk gateway`: Start the HTTP API server.

use frontdesk_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("Frontdesk Gateway: {}", config.hotel_name);
    println!("   Listening: {}:{}", config.gateway.host, config.gateway.port);
    println!("   Widget origin: {}", config.gateway.allowed_origin);
    if !config.has_api_key() {
        println!("   No API key: unscripted messages get canned replies");
    }

    frontdesk_gateway::start(config).await?;

    Ok(())
}
