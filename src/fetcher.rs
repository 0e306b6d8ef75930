use std::fs;
use std::path::Path;

use crate::api::client::GithubClient;
use crate::error::FetcherError;

/// Folder to mirror, addressed through the GitHub contents API.
const LISTING_URL: &str =
    "https://api.github.com/repos/sxxyrry/23XRVirusSampleDatabase/contents/Virus";
const TARGET_DIR: &str = "./Virus/";

/// Certificate verification is skipped when talking to the upstream
/// host, matching how the folder was originally mirrored.
const ACCEPT_INVALID_CERTS: bool = true;

/// Downloads every file of the fixed remote folder into the fixed
/// target directory.
pub async fn run() -> Result<(), FetcherError> {
    let client = GithubClient::new(ACCEPT_INVALID_CERTS);
    fetch_folder(&client, LISTING_URL, Path::new(TARGET_DIR)).await
}

/// One straight-line pass: list the folder, then fetch and persist each
/// `"file"` entry in listing order.
///
/// A non-success listing response is reported and ends the run without
/// touching any file; a non-success download response is reported and
/// skipped. Transport, parse and I/O faults propagate to the caller.
async fn fetch_folder(
    client: &GithubClient,
    listing_url: &str,
    target_dir: &Path,
) -> Result<(), FetcherError> {
    fs::create_dir_all(target_dir)?;

    let entries = match client.list_directory(listing_url).await {
        Ok(entries) => entries,
        Err(FetcherError::StatusError { url, .. }) => {
            println!("✗ Unable to access listing endpoint: {}", url);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    for entry in entries.iter().filter(|e| e.is_file()) {
        let Some(download_url) = entry.download_url.as_deref() else {
            println!("✗ Download failed: {} (no download URL)", entry.name);
            continue;
        };

        match client.download(download_url).await {
            Ok(bytes) => {
                fs::write(target_dir.join(&entry.name), &bytes)?;
                println!("✓ Downloaded: {}", entry.name);
            }
            Err(FetcherError::StatusError { .. }) => {
                println!("✗ Download failed: {}", entry.name);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
