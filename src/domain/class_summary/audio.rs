//! Lecture recordings for `POST /api/class-summary/upload-audio`.

use crate::error::{HttpError, SdkError};
use crate::shared::CourseId;
use reqwest::multipart::{Form, Part};
use std::path::Path;

const FALLBACK_MIME: &str = "application/octet-stream";

/// An audio recording held in memory, ready for multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioFile {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl AudioFile {
    /// Wrap raw bytes. The MIME type is guessed from the file name's extension.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let file_name = file_name.into();
        let mime_type = guess_mime_type(&file_name).map(str::to_string);
        Self {
            file_name,
            mime_type,
            bytes: bytes.into(),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Read a recording from disk.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, SdkError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                SdkError::Validation(format!("Audio path has no file name: {}", path.display()))
            })?
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(file_name, bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn mime_type(&self) -> &str {
        self.mime_type.as_deref().unwrap_or(FALLBACK_MIME)
    }

    /// Build the upload form: an `audioFile` file part and a `courseId` text field.
    pub(crate) fn into_form(self, course_id: CourseId) -> Result<Form, HttpError> {
        let mime = self.mime_type().to_string();
        let part = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&mime)?;
        Ok(Form::new()
            .part("audioFile", part)
            .text("courseId", course_id.to_string()))
    }
}

/// MIME type for common recording formats, by file extension.
pub fn guess_mime_type(file_name: &str) -> Option<&'static str> {
    let ext = Path::new(file_name)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    let mime = match ext.as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        "ogg" => "audio/ogg",
        "webm" => "audio/webm",
        "flac" => "audio/flac",
        "aac" => "audio/aac",
        _ => return None,
    };
    Some(mime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_guess_mime_type() {
        assert_eq!(guess_mime_type("lecture.mp3"), Some("audio/mpeg"));
        assert_eq!(guess_mime_type("LECTURE.WAV"), Some("audio/wav"));
        assert_eq!(guess_mime_type("voice.m4a"), Some("audio/mp4"));
        assert_eq!(guess_mime_type("notes.txt"), None);
        assert_eq!(guess_mime_type("no_extension"), None);
    }

    #[test]
    fn test_new_guesses_and_override() {
        let audio = AudioFile::new("a.ogg", vec![1, 2, 3]);
        assert_eq!(audio.mime_type(), "audio/ogg");
        assert_eq!(audio.len(), 3);

        let audio = AudioFile::new("blob", Vec::<u8>::new());
        assert_eq!(audio.mime_type(), FALLBACK_MIME);
        assert!(audio.is_empty());

        let audio = audio.with_mime_type("audio/amr");
        assert_eq!(audio.mime_type(), "audio/amr");
    }

    #[test]
    fn test_invalid_mime_rejected() {
        let audio = AudioFile::new("a.mp3", vec![0]).with_mime_type("not a mime");
        assert!(audio.into_form(CourseId::new(1)).is_err());
    }

    #[tokio::test]
    async fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("week1.flac");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"fLaC-data")
            .unwrap();

        let audio = AudioFile::from_path(&path).await.unwrap();
        assert_eq!(audio.file_name, "week1.flac");
        assert_eq!(audio.mime_type(), "audio/flac");
        assert_eq!(audio.bytes, b"fLaC-data");
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let err = AudioFile::from_path("/definitely/not/here.mp3").await.unwrap_err();
        assert!(matches!(err, SdkError::Io(_)));
    }
}
