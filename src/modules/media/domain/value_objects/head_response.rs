/// Status and content type of a HEAD response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadResponse {
    pub status: u16,
    pub content_type: Option<String>,
}

impl HeadResponse {
    pub fn new(status: u16, content_type: Option<&str>) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_string),
        }
    }

    /// 2xx only; redirects are not followed, so 3xx counts as failure
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.trim().to_ascii_lowercase().starts_with("image/"))
            .unwrap_or(false)
    }

    pub fn is_live_image(&self) -> bool {
        self.is_success() && self.is_image()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_image() {
        assert!(HeadResponse::new(200, Some("image/png")).is_live_image());
        assert!(HeadResponse::new(204, Some("Image/JPEG")).is_live_image());
    }

    #[test]
    fn test_rejections() {
        assert!(!HeadResponse::new(404, Some("image/png")).is_live_image());
        assert!(!HeadResponse::new(301, Some("image/png")).is_live_image());
        assert!(!HeadResponse::new(200, Some("text/html")).is_live_image());
        assert!(!HeadResponse::new(200, None).is_live_image());
    }
}
