use std::io;

use descom_sms::{Auth, DescomClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("DESCOM_USER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DESCOM_USER environment variable is required",
        )
    })?;
    let password = std::env::var("DESCOM_PASS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DESCOM_PASS environment variable is required",
        )
    })?;

    let client = DescomClient::new(Auth::user_password(username, password)?);
    let balance = client.get_balance().await?;

    println!("balance: {balance}");

    Ok(())
}
