//! Plain-text report of tracks the catalog search did not find.

use std::path::Path;

use crate::clients::{entities::BeatportTrack, errors::Result};
use crate::matcher::build_search_query;

/// Overwrite `path` with one line per unmatched track: the search query the
/// matcher used, the `" :: "` separator, then the full track record.
pub async fn save_report(tracks: &[BeatportTrack], path: &Path) -> Result<()> {
    let mut report = String::new();
    for track in tracks {
        report.push_str(&format!("{} :: {track:?}\n", build_search_query(track)));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, report).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(title: &str, remixed: &str, artists: &[&str]) -> BeatportTrack {
        BeatportTrack::new(
            title.to_string(),
            remixed.to_string(),
            artists.iter().map(ToString::to_string).collect(),
        )
    }

    #[tokio::test]
    async fn writes_one_line_per_track() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let tracks = vec![
            track("Test", "Extended Mix", &["DJ A", "DJ B"]),
            track("Second", "Original Mix", &["Solo"]),
        ];

        save_report(&tracks, &path).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Test DJ A DJ B Extended :: "));
        assert!(lines[1].starts_with("Second Solo :: "));
        assert!(lines[1].contains("Original Mix"));
    }

    #[tokio::test]
    async fn overwrites_the_previous_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        let first = vec![
            track("One", "", &["A"]),
            track("Two", "", &["B"]),
        ];
        save_report(&first, &path).await.unwrap();

        let second = vec![track("Three", "", &["C"])];
        save_report(&second, &path).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.starts_with("Three C :: "));
    }

    #[tokio::test]
    async fn empty_input_writes_an_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        save_report(&[], &path).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[tokio::test]
    async fn creates_the_report_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("report.txt");

        save_report(&[track("Test", "", &["A"])], &path).await.unwrap();

        assert!(path.exists());
    }
}
