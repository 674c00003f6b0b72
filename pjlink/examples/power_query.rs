//! Power status query example

use pjlink::{PjRequest, execute};

#[tokio::main]
async fn main() -> pjlink::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Change to your projector IP
    let address = std::env::var("PJLINK_ADDR").unwrap_or_else(|_| "10.1.1.3".to_string());
    let password = std::env::var("PJLINK_PWD").unwrap_or_else(|_| "magic123".to_string());

    let request = PjRequest {
        address,
        port: pjlink::constants::DEFAULT_PORT,
        class: "1".to_string(),
        password,
        command: pjlink::constants::commands::POWER.to_string(),
        param: "?".to_string(),
    };

    let response = execute(&request).await?;

    if response.is_auth_failure() {
        println!("✗ Projector rejected the password");
    } else {
        // 0 = standby, 1 = lamp on, 2 = cooling, 3 = warming up
        println!("✓ Power status: {}", response.code);
    }

    Ok(())
}
