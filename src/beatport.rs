//! Parsing of saved Beatport playlist pages.
//!
//! A Beatport playlist export is a regular HTML document; the playlist name
//! and the track rows are located by the CSS classes Beatport renders them
//! with. These functions are pure: they take the document text and return
//! structured data.

use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::clients::{
    entities::BeatportTrack,
    errors::{Error, Result},
};

/// Extract the playlist name, or `None` when the page carries no name
/// element. The caller decides the fallback title.
pub fn playlist_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(".library-playlist__name").unwrap();
    document.select(&selector).next().map(element_text)
}

/// Extract all track rows in document order.
///
/// A row missing its title or remix label is malformed and fails the whole
/// extraction. A page with no track rows is a valid empty playlist.
pub fn collect_tracks(html: &str) -> Result<Vec<BeatportTrack>> {
    let document = Html::parse_document(html);
    let item_selector = Selector::parse(".tracks__item").unwrap();
    let title_selector = Selector::parse(".track-title__primary").unwrap();
    let remixed_selector = Selector::parse(".track-title__remixed").unwrap();
    let artist_selector = Selector::parse(".track-artists__artist").unwrap();

    let mut tracks = Vec::new();
    for item in document.select(&item_selector) {
        let title = item
            .select(&title_selector)
            .next()
            .map(element_text)
            .ok_or_else(|| Error::ExtractionError("track item is missing a title".into()))?;
        let remixed = item.select(&remixed_selector).next().map(element_text).ok_or_else(|| {
            Error::ExtractionError(format!("track item '{title}' is missing a remix label"))
        })?;
        let artists: Vec<String> = item.select(&artist_selector).map(element_text).collect();
        tracks.push(BeatportTrack::new(title, remixed, artists));
    }

    debug!("Extracted {} track rows from the export", tracks.len());
    Ok(tracks)
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = r#"
        <html><body>
        <h1 class="library-playlist__name">My Mix</h1>
        <ul>
          <li class="tracks__item">
            <span class="track-title__primary">Test</span>
            <span class="track-title__remixed">Extended Mix</span>
            <a class="track-artists__artist">DJ A</a>
            <a class="track-artists__artist">DJ B</a>
          </li>
          <li class="tracks__item">
            <span class="track-title__primary">Second</span>
            <span class="track-title__remixed">Original Mix</span>
            <a class="track-artists__artist">Solo</a>
          </li>
        </ul>
        </body></html>
    "#;

    #[test]
    fn reads_playlist_title() {
        assert_eq!(playlist_title(EXPORT), Some("My Mix".to_string()));
    }

    #[test]
    fn missing_title_element_yields_none() {
        assert_eq!(playlist_title("<html><body><p>no name here</p></body></html>"), None);
    }

    #[test]
    fn collects_tracks_in_document_order() {
        let tracks = collect_tracks(EXPORT).unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].title, "Test");
        assert_eq!(tracks[0].remixed, "Extended Mix");
        assert_eq!(tracks[0].artists, vec!["DJ A", "DJ B"]);
        assert_eq!(tracks[0].artists_clear, vec!["dj a", "dj b"]);
        assert_eq!(tracks[1].title, "Second");
        assert_eq!(tracks[1].artists, vec!["Solo"]);
    }

    #[test]
    fn page_without_track_rows_is_a_valid_empty_playlist() {
        let tracks = collect_tracks("<html><body></body></html>").unwrap();
        assert!(tracks.is_empty());
    }

    #[test]
    fn track_row_without_title_fails_extraction() {
        let html = r#"
            <div class="tracks__item">
              <span class="track-title__remixed">Original Mix</span>
              <a class="track-artists__artist">Solo</a>
            </div>
        "#;
        assert!(matches!(collect_tracks(html), Err(Error::ExtractionError(_))));
    }

    #[test]
    fn track_row_without_remix_label_fails_extraction() {
        let html = r#"
            <div class="tracks__item">
              <span class="track-title__primary">Test</span>
            </div>
        "#;
        assert!(matches!(collect_tracks(html), Err(Error::ExtractionError(_))));
    }
}
