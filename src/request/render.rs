//! Response renderers
//!
//! Each renderer turns a response body into a [`Fragment`] and performs no
//! further I/O. Media bodies are materialized into temp files; the file lives
//! as long as any clone of its [`MediaHandle`] does.

use crate::error::RequestError;
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Content family a response is dispatched on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFamily {
    Image,
    Audio,
    Video,
    Json,
    Text,
}

impl ContentFamily {
    /// Match a content type in priority order: image, audio, video, json, anything else as text
    pub fn classify(content_type: &str) -> Self {
        let content_type = content_type.to_ascii_lowercase();

        if content_type.starts_with("image/") {
            ContentFamily::Image
        } else if content_type.contains("audio/") {
            ContentFamily::Audio
        } else if content_type.contains("video/") {
            ContentFamily::Video
        } else if content_type.contains("application/json") {
            ContentFamily::Json
        } else {
            ContentFamily::Text
        }
    }
}

/// Local reference to a materialized media body
#[derive(Debug, Clone)]
pub struct MediaHandle {
    file: Arc<NamedTempFile>,
}

impl MediaHandle {
    pub fn materialize(bytes: &[u8], content_type: &str) -> std::io::Result<Self> {
        let suffix = format!(".{}", media_extension(content_type));
        let mut file = tempfile::Builder::new()
            .prefix("api-console-")
            .suffix(&suffix)
            .tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;

        Ok(Self {
            file: Arc::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// `image/png; charset=binary` -> `png`
fn media_extension(content_type: &str) -> String {
    let subtype = content_type
        .split(';')
        .next()
        .and_then(|essence| essence.split('/').nth(1))
        .unwrap_or("bin");

    let ext: String = subtype
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();

    if ext.is_empty() {
        "bin".to_string()
    } else {
        ext
    }
}

#[derive(Debug, Clone)]
pub struct Media {
    pub handle: MediaHandle,
    pub content_type: String,
    pub size: usize,
    /// Audio or video, meant to be opened in a player
    pub playable: bool,
}

/// Display fragment produced for a successful response
#[derive(Debug, Clone)]
pub enum Fragment {
    Json { pretty: String },
    Text { text: String },
    Image(Media),
    Audio(Media),
    Video(Media),
}

impl Fragment {
    /// Text placed on the clipboard by "copy response"
    pub fn copy_text(&self) -> String {
        match self {
            Fragment::Json { pretty } => pretty.clone(),
            Fragment::Text { text } => text.clone(),
            Fragment::Image(media) | Fragment::Audio(media) | Fragment::Video(media) => {
                media.handle.path().display().to_string()
            }
        }
    }
}

/// Render a 2xx response body according to its declared content type
pub fn render(content_type: &str, body: &[u8]) -> Result<Fragment, RequestError> {
    match ContentFamily::classify(content_type) {
        ContentFamily::Image => Ok(Fragment::Image(media(content_type, body, false)?)),
        ContentFamily::Audio => Ok(Fragment::Audio(media(content_type, body, true)?)),
        ContentFamily::Video => Ok(Fragment::Video(media(content_type, body, true)?)),
        ContentFamily::Json => render_json(body),
        ContentFamily::Text => Ok(render_text(body)),
    }
}

fn media(content_type: &str, body: &[u8], playable: bool) -> Result<Media, RequestError> {
    let handle = MediaHandle::materialize(body, content_type)
        .map_err(|e| RequestError::Media(e.to_string()))?;

    Ok(Media {
        handle,
        content_type: content_type.to_string(),
        size: body.len(),
        playable,
    })
}

pub fn render_json(body: &[u8]) -> Result<Fragment, RequestError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| RequestError::MalformedJson(e.to_string()))?;

    if let Some(error) = value.as_object().and_then(|obj| obj.get("error")) {
        if is_truthy(error) {
            let message = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Err(RequestError::ApiReported { message });
        }
    }

    let pretty = serde_json::to_string_pretty(&value)
        .map_err(|e| RequestError::MalformedJson(e.to_string()))?;

    Ok(Fragment::Json { pretty })
}

pub fn render_text(body: &[u8]) -> Fragment {
    let text = String::from_utf8_lossy(body);
    Fragment::Text {
        text: escape_for_terminal(&text),
    }
}

/// `null`, `false`, `0` and `""` do not signal an error
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Replace control characters so a body can not drive the terminal
pub fn escape_for_terminal(text: &str) -> String {
    text.replace("\r\n", "\n")
        .chars()
        .map(|c| match c {
            '\n' | '\t' => c,
            c if (c as u32) < 0x20 => char::from_u32(0x2400 + c as u32).unwrap_or('\u{FFFD}'),
            '\u{7f}' => '\u{2421}',
            c if c.is_control() => '\u{FFFD}',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_priority() {
        assert_eq!(ContentFamily::classify("image/png"), ContentFamily::Image);
        assert_eq!(ContentFamily::classify("audio/mpeg"), ContentFamily::Audio);
        assert_eq!(ContentFamily::classify("video/mp4"), ContentFamily::Video);
        assert_eq!(
            ContentFamily::classify("application/json; charset=utf-8"),
            ContentFamily::Json
        );
        assert_eq!(ContentFamily::classify("text/html"), ContentFamily::Text);
        assert_eq!(ContentFamily::classify(""), ContentFamily::Text);
    }

    #[test]
    fn test_classify_image_is_prefix_only() {
        // image/ must lead; audio/video match anywhere
        assert_eq!(
            ContentFamily::classify("application/x-image/png"),
            ContentFamily::Text
        );
        assert_eq!(
            ContentFamily::classify("application/x-audio/ogg"),
            ContentFamily::Audio
        );
    }

    #[test]
    fn test_render_json_pretty_two_spaces() {
        let fragment = render("application/json", br#"{"status":true,"result":[1,2]}"#).unwrap();
        match fragment {
            Fragment::Json { pretty } => {
                assert_eq!(
                    pretty,
                    "{\n  \"status\": true,\n  \"result\": [\n    1,\n    2\n  ]\n}"
                );
            }
            other => panic!("expected json fragment, got {other:?}"),
        }
    }

    #[test]
    fn test_render_json_keeps_server_key_order() {
        let body = br#"{"zeta":1,"alpha":{"y":2,"b":3},"mid":null}"#;
        let Fragment::Json { pretty } = render("application/json", body).unwrap() else {
            panic!("expected json fragment");
        };

        let keys: Vec<&str> = pretty
            .lines()
            .filter_map(|l| l.trim_start().strip_prefix('"'))
            .filter_map(|l| l.split('"').next())
            .collect();
        assert_eq!(keys, ["zeta", "alpha", "y", "b", "mid"]);
    }

    #[test]
    fn test_render_json_error_field_is_api_error() {
        let err = render("application/json", br#"{"error":"rate limited"}"#).unwrap_err();
        assert_eq!(
            err,
            RequestError::ApiReported {
                message: "rate limited".to_string()
            }
        );
    }

    #[test]
    fn test_render_json_falsy_error_field_is_success() {
        assert!(render("application/json", br#"{"error":null,"ok":1}"#).is_ok());
        assert!(render("application/json", br#"{"error":false}"#).is_ok());
        assert!(render("application/json", br#"{"error":""}"#).is_ok());
    }

    #[test]
    fn test_render_json_structured_error_message() {
        let err = render("application/json", br#"{"error":{"code":7}}"#).unwrap_err();
        assert_eq!(
            err,
            RequestError::ApiReported {
                message: r#"{"code":7}"#.to_string()
            }
        );
    }

    #[test]
    fn test_render_malformed_json() {
        let err = render("application/json", b"{not json").unwrap_err();
        assert!(matches!(err, RequestError::MalformedJson(_)));
    }

    #[test]
    fn test_render_text_escapes_control_chars() {
        let fragment = render("text/plain", b"line1\r\nline2\x1b[31mred\ttab").unwrap();
        match fragment {
            Fragment::Text { text } => {
                assert_eq!(text, "line1\nline2\u{241b}[31mred\ttab");
            }
            other => panic!("expected text fragment, got {other:?}"),
        }
    }

    #[test]
    fn test_render_text_does_not_interpret_json_without_content_type() {
        let fragment = render("", br#"{"error":"x"}"#).unwrap();
        assert_eq!(fragment.copy_text(), r#"{"error":"x"}"#);
    }

    #[test]
    fn test_render_image_materializes_file() {
        let fragment = render("image/png", b"\x89PNG fake").unwrap();
        let path = match &fragment {
            Fragment::Image(media) => {
                assert_eq!(media.size, 9);
                assert!(!media.playable);
                media.handle.path().to_path_buf()
            }
            other => panic!("expected image fragment, got {other:?}"),
        };

        assert!(path.exists());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
        assert_eq!(std::fs::read(&path).unwrap(), b"\x89PNG fake");
    }

    #[test]
    fn test_media_released_with_last_handle() {
        let fragment = render("audio/mpeg", b"ID3").unwrap();
        let copy = fragment.clone();
        let path = match &fragment {
            Fragment::Audio(media) => {
                assert!(media.playable);
                media.handle.path().to_path_buf()
            }
            other => panic!("expected audio fragment, got {other:?}"),
        };

        drop(fragment);
        assert!(path.exists());
        drop(copy);
        assert!(!path.exists());
    }

    #[test]
    fn test_media_extension() {
        assert_eq!(media_extension("video/mp4; codecs=avc1"), "mp4");
        assert_eq!(media_extension("image/svg+xml"), "svg");
        assert_eq!(media_extension("garbage"), "bin");
    }
}
