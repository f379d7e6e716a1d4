use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use fs_err as fs;
use std::path::PathBuf;

use crate::session::Session;
use crate::wire::Blob;

fn stamp() -> String {
    Utc::now().format("%Y%m%d-%H%M%S").to_string()
}

fn extension_for(mime_type: &str) -> &'static str {
    match mime_type {
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        // the image model answers png unless told otherwise
        _ => "png",
    }
}

/// Save the press-release Markdown into the session directory.
pub fn save_markdown(session: &Session, text: &str) -> Result<PathBuf> {
    let path = session.export_path(&format!("persbericht-{}.md", stamp()))?;
    fs::write(&path, text)?;
    Ok(path)
}

/// Decode the poster blob and save it as an image file.
pub fn save_poster(session: &Session, blob: &Blob) -> Result<PathBuf> {
    let bytes = BASE64
        .decode(&blob.data)
        .context("poster bevat geen geldige base64 data")?;
    let path = session.export_path(&format!(
        "poster-{}.{}",
        stamp(),
        extension_for(&blob.mime_type)
    ))?;
    fs::write(&path, bytes)?;
    Ok(path)
}

/// Save the generated promo website as a standalone HTML file.
pub fn save_website(session: &Session, html: &str) -> Result<PathBuf> {
    let path = session.export_path(&format!("event-promo-{}.html", stamp()))?;
    fs::write(&path, html)?;
    Ok(path)
}

/// Render an inline image as a data URI, the portable form handed back to
/// the caller of the image operation.
pub fn poster_data_uri(blob: &Blob) -> String {
    format!("data:{};base64,{}", blob.mime_type, blob.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> (tempfile::TempDir, Session) {
        let tmp = tempfile::tempdir().unwrap();
        let s = Session::new(tmp.path().to_str().unwrap(), false);
        (tmp, s)
    }

    #[test]
    fn markdown_lands_in_session_dir() {
        let (_tmp, s) = session();
        let path = save_markdown(&s, "# Kop\n\nEINDE PERSBERICHT").unwrap();
        assert!(path.starts_with(s.dir()));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# Kop\n\nEINDE PERSBERICHT"
        );
    }

    #[test]
    fn poster_bytes_round_trip() {
        let (_tmp, s) = session();
        let blob = Blob {
            mime_type: "image/png".into(),
            data: BASE64.encode(b"pngbytes"),
        };
        let path = save_poster(&s, &blob).unwrap();
        assert!(path.to_string_lossy().ends_with(".png"));
        assert_eq!(fs::read(&path).unwrap(), b"pngbytes");
    }

    #[test]
    fn poster_with_bad_base64_fails() {
        let (_tmp, s) = session();
        let blob = Blob {
            mime_type: "image/png".into(),
            data: "geen base64!!".into(),
        };
        assert!(save_poster(&s, &blob).is_err());
    }

    #[test]
    fn data_uri_has_the_expected_shape() {
        let blob = Blob {
            mime_type: "image/webp".into(),
            data: "QUJD".into(),
        };
        assert_eq!(poster_data_uri(&blob), "data:image/webp;base64,QUJD");
    }

    #[test]
    fn website_export_is_verbatim() {
        let (_tmp, s) = session();
        let html = "<!DOCTYPE html><html></html>";
        let path = save_website(&s, html).unwrap();
        assert!(path.to_string_lossy().ends_with(".html"));
        assert_eq!(fs::read_to_string(&path).unwrap(), html);
    }
}
