use serde::Deserialize;

/// One entry of a GitHub contents-API directory listing.
///
/// `download_url` is `null` for directories, so it stays optional here.
#[derive(Debug, Deserialize)]
pub struct FileEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub download_url: Option<String>,
}

impl FileEntry {
    pub fn is_file(&self) -> bool {
        self.entry_type == "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_contents_api_listing() {
        let body = r#"[
            {
                "name": "sample.exe",
                "path": "Virus/sample.exe",
                "sha": "3f786850e387550fdab836ed7e6dc881de23001b",
                "size": 1024,
                "type": "file",
                "download_url": "https://raw.githubusercontent.com/o/r/main/Virus/sample.exe"
            },
            {
                "name": "sub",
                "path": "Virus/sub",
                "sha": "89e6c98d92887913cadf06b2adb97f26cde4849b",
                "size": 0,
                "type": "dir",
                "download_url": null
            }
        ]"#;

        let entries: Vec<FileEntry> = serde_json::from_str(body).unwrap();
        assert_eq!(entries.len(), 2);

        assert!(entries[0].is_file());
        assert_eq!(entries[0].name, "sample.exe");
        assert_eq!(
            entries[0].download_url.as_deref(),
            Some("https://raw.githubusercontent.com/o/r/main/Virus/sample.exe")
        );

        assert!(!entries[1].is_file());
        assert_eq!(entries[1].download_url, None);
    }
}
