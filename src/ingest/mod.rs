use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use fs_err as fs;
use std::path::Path;

use crate::form::{PressReleaseForm, UploadedImage};

/// Extensions surfaced in the upload hint. Advisory only: classification goes
/// by the declared media type, not the extension.
pub const SUPPORTED_EXTENSIONS: &str = ".txt, .md, .csv, .json, .png, .jpg, .jpeg, .webp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ingested {
    Image,
    Text,
}

/// Read one user-selected file into the form. Files whose media type starts
/// with "image/" are base64-encoded and appended to the image list; anything
/// else is read as text and replaces the supplementary document wholesale.
/// On any read error the form is left untouched.
pub fn ingest_file(path: &Path, form: &mut PressReleaseForm) -> Result<Ingested> {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    if mime.essence_str().starts_with("image/") {
        let bytes = fs::read(path)
            .with_context(|| format!("kan afbeelding niet lezen: {}", path.display()))?;
        form.push_image(UploadedImage {
            mime_type: mime.essence_str().to_string(),
            data: BASE64.encode(bytes),
        });
        Ok(Ingested::Image)
    } else {
        let text = fs::read_to_string(path)
            .with_context(|| format!("kan tekstbestand niet lezen: {}", path.display()))?;
        form.set_file_content(text);
        Ok(Ingested::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PressReleaseForm {
        PressReleaseForm::default()
    }

    #[test]
    fn image_upload_appends_and_leaves_text_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playlist.png");
        fs::write(&path, b"\x89PNG\r\n\x1a\nfake").unwrap();

        let mut form = form();
        form.set_file_content("bestaande bio");
        let kind = ingest_file(&path, &mut form).unwrap();

        assert_eq!(kind, Ingested::Image);
        assert_eq!(form.uploaded_images.len(), 1);
        assert_eq!(form.uploaded_images[0].mime_type, "image/png");
        assert_eq!(
            BASE64.decode(&form.uploaded_images[0].data).unwrap(),
            b"\x89PNG\r\n\x1a\nfake"
        );
        assert_eq!(form.file_content, "bestaande bio");
    }

    #[test]
    fn text_upload_replaces_content_and_leaves_images_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bio.txt");
        fs::write(&path, "eerste versie").unwrap();

        let mut form = form();
        form.push_image(UploadedImage {
            mime_type: "image/jpeg".into(),
            data: "Zm9v".into(),
        });
        assert_eq!(ingest_file(&path, &mut form).unwrap(), Ingested::Text);
        assert_eq!(form.file_content, "eerste versie");

        // last write wins
        fs::write(&path, "tweede versie").unwrap();
        ingest_file(&path, &mut form).unwrap();
        assert_eq!(form.file_content, "tweede versie");
        assert_eq!(form.uploaded_images.len(), 1);
    }

    #[test]
    fn unknown_extension_is_treated_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("setlist.csv");
        fs::write(&path, "song,duur\nNight Sky,3:41").unwrap();

        let mut form = form();
        assert_eq!(ingest_file(&path, &mut form).unwrap(), Ingested::Text);
        assert!(form.uploaded_images.is_empty());
    }

    #[test]
    fn missing_file_leaves_form_unmodified() {
        let dir = tempfile::tempdir().unwrap();
        let mut form = form();
        assert!(ingest_file(&dir.path().join("weg.txt"), &mut form).is_err());
        assert!(form.file_content.is_empty());
        assert!(form.uploaded_images.is_empty());
    }
}
