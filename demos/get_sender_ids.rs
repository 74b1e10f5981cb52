use std::io;

use descom_sms::{Auth, DescomClient, DescomError};

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

    match client.get_sender_ids(false).await {
        Ok(senders) => {
            println!("authorized sender ids:");
            if let Some(list) = senders.as_array() {
                for sender in list {
                    println!("\t- {sender}");
                }
            } else {
                println!("{senders}");
            }
        }
        Err(DescomError::RequestFailed { status, message }) => {
            eprintln!("request failed: status {status}, message: {message}");
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
