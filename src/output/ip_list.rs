//! IP list YAML export

use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::heroku::IpList;

/// Write the IP list to `path` as YAML, replacing any existing file
pub fn write_ip_list(ip_list: &IpList, path: &Path) -> Result<()> {
    debug!(
        "Writing {} IP list items to {}",
        ip_list.items.len(),
        path.display()
    );
    let mut writer = BufWriter::new(File::create(path)?);
    serde_yml::to_writer(&mut writer, ip_list)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heroku::IpListItem;

    fn sample_list() -> IpList {
        IpList {
            name: "heroku-ips-listing".to_string(),
            description: "ips from heroku spaces".to_string(),
            items: vec![IpListItem {
                name: "corp/prod".to_string(),
                description: "IP list from `corp > prod`".to_string(),
                ips: vec!["52.1.1.1".to_string(), "52.1.1.2".to_string()],
            }],
        }
    }

    #[test]
    fn test_write_ip_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ips.yml");

        write_ip_list(&sample_list(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("name: heroku-ips-listing"));
        assert!(content.contains("corp/prod"));
        assert!(content.contains("52.1.1.2"));

        let parsed: IpList = serde_yml::from_str(&content).unwrap();
        assert_eq!(parsed, sample_list());
    }

    #[test]
    fn test_write_ip_list_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ips.yml");
        std::fs::write(&path, "stale content that is much longer than nothing").unwrap();

        let empty = IpList {
            name: "n".to_string(),
            description: "d".to_string(),
            items: vec![],
        };
        write_ip_list(&empty, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
    }

    #[test]
    fn test_write_ip_list_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("ips.yml");
        assert!(write_ip_list(&sample_list(), &path).is_err());
    }
}
