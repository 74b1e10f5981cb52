use std::io;

use descom_sms::{Auth, DescomClient, Message, MessageText, RawPhoneNumber};

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
    let phone = std::env::var("DESCOM_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DESCOM_PHONE environment variable is required",
        )
    })?;
    let text = std::env::var("DESCOM_MESSAGE")
        .unwrap_or_else(|_| "Hello from the descom-sms demo.".to_owned());

    let mut client = DescomClient::new(Auth::user_password(username, password)?);
    client.set_dryrun(std::env::var("DESCOM_DRYRUN").is_ok());

    let mut message = Message::new(MessageText::new(text)?);
    message.add_to(RawPhoneNumber::new(phone)?);

    client.add_message(message)?;
    let receipt = client.send().await?;

    println!("receipt: {receipt}");

    Ok(())
}
