use std::fmt;

/// Image types the photo endpoint will serve.
///
/// The mapping from extension is explicit; anything outside it is rejected by the retriever
/// rather than guessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Png,
    Jpeg,
}

impl MediaType {
    /// Maps an extension (with or without the leading `.`, any case) to a media type.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        if extension.eq_ignore_ascii_case("png") {
            Some(MediaType::Png)
        } else if extension.eq_ignore_ascii_case("jpg") || extension.eq_ignore_ascii_case("jpeg") {
            Some(MediaType::Jpeg)
        } else {
            None
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            MediaType::Png => "image/png",
            MediaType::Jpeg => "image/jpeg",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(MediaType::from_extension(".png"), Some(MediaType::Png));
        assert_eq!(MediaType::from_extension("PNG"), Some(MediaType::Png));
        assert_eq!(MediaType::from_extension(".jpg"), Some(MediaType::Jpeg));
        assert_eq!(MediaType::from_extension(".JPG"), Some(MediaType::Jpeg));
        assert_eq!(MediaType::from_extension(".jpeg"), Some(MediaType::Jpeg));
    }

    #[test]
    fn test_unknown_extensions() {
        assert_eq!(MediaType::from_extension(".gif"), None);
        assert_eq!(MediaType::from_extension(""), None);
        assert_eq!(MediaType::from_extension(".png.exe"), None);
    }

    #[test]
    fn test_mime_strings() {
        assert_eq!(MediaType::Png.mime_type(), "image/png");
        assert_eq!(MediaType::Jpeg.to_string(), "image/jpeg");
    }
}
