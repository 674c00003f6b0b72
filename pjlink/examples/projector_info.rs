//! Projector identification example
//!
//! Runs one session per query; class 1 sessions carry a single command.

use pjlink::constants::commands;
use pjlink::{PjRequest, execute};

#[tokio::main]
async fn main() -> pjlink::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let address = std::env::var("PJLINK_ADDR").unwrap_or_else(|_| "10.1.1.3".to_string());
    let password = std::env::var("PJLINK_PWD").unwrap_or_default();

    for (label, command) in [
        ("Name", commands::NAME),
        ("Manufacturer", commands::MANUFACTURER),
        ("Product", commands::PRODUCT),
        ("Lamp hours", commands::LAMP),
    ] {
        let request = PjRequest {
            address: address.clone(),
            port: pjlink::constants::DEFAULT_PORT,
            class: "1".to_string(),
            password: password.clone(),
            command: command.to_string(),
            param: "?".to_string(),
        };

        let response = execute(&request).await?;
        println!("{}: {}", label, response.code);
    }

    Ok(())
}
