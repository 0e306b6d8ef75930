mod api;
mod error;
mod fetcher;
mod types;

use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    fetcher::run().await?;
    Ok(())
}
