//! Feed server configuration.

/// Configuration for the feed server.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Page size used when the request does not specify one.
    pub default_page_size: u32,
    /// Maximum page size a request may ask for.
    pub max_page_size: u32,
}

impl FeedConfig {
    /// Creates a configuration with the default limits.
    pub fn new() -> Self {
        Self {
            default_page_size: 100,
            max_page_size: 500,
        }
    }

    /// Sets the default page size.
    pub fn with_default_page_size(mut self, size: u32) -> Self {
        self.default_page_size = size;
        self
    }

    /// Sets the maximum page size.
    pub fn with_max_page_size(mut self, size: u32) -> Self {
        self.max_page_size = size;
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new()
    }
}
