//! Built-in demo catalog used whenever `/settings` can not be loaded

use super::{Category, Endpoint, EndpointStatus, Settings};

fn endpoint(name: &str, path: &str, desc: &str, status: EndpointStatus) -> Endpoint {
    Endpoint {
        name: name.to_string(),
        path: path.to_string(),
        method: "GET".to_string(),
        desc: desc.to_string(),
        status,
    }
}

impl Settings {
    /// Fixed demo catalog
    pub fn fallback() -> Self {
        Self {
            name: "API Console".to_string(),
            creator: "demo".to_string(),
            description: "Interactive API documentation with real-time testing".to_string(),
            links: None,
            categories: fallback_categories(),
        }
    }
}

pub(crate) fn fallback_categories() -> Vec<Category> {
    use EndpointStatus::*;

    vec![
        Category {
            name: "Downloader".to_string(),
            items: vec![
                endpoint(
                    "YouTube Downloader",
                    "/api/downloader/youtube?url=&apikey=YOUR_API_KEY",
                    "Download a YouTube video or audio track",
                    Ready,
                ),
                endpoint(
                    "TikTok Downloader",
                    "/api/downloader/tiktok?url=&apikey=YOUR_API_KEY",
                    "Download a TikTok video without watermark",
                    Ready,
                ),
                endpoint(
                    "Instagram Downloader",
                    "/api/downloader/instagram?url=&apikey=YOUR_API_KEY",
                    "Download Instagram posts and reels",
                    Update,
                ),
            ],
        },
        Category {
            name: "Image Creator".to_string(),
            items: vec![endpoint(
                "Text to Image",
                "/api/imagecreator/text2img?prompt=&size=&apikey=YOUR_API_KEY",
                "Generate an image from a text prompt",
                Ready,
            )],
        },
        Category {
            name: "AI Tools".to_string(),
            items: vec![endpoint(
                "Chat Assistant",
                "/api/ai/chat?question=&apikey=YOUR_API_KEY",
                "Ask the assistant a question",
                Ready,
            )],
        },
        Category {
            name: "Random".to_string(),
            items: vec![
                endpoint(
                    "Random Anime Image",
                    "/api/random/anime",
                    "Return a random anime illustration",
                    Ready,
                ),
                endpoint(
                    "Random Quote",
                    "/api/random/quote?lang=en",
                    "Return a random quote",
                    Error,
                ),
            ],
        },
        Category {
            name: "Tools".to_string(),
            items: vec![endpoint(
                "Web Search",
                "/api/tools/search?query=&limit=",
                "Search the web and return the top results",
                Ready,
            )],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_not_empty() {
        let settings = Settings::fallback();
        assert!(settings.total_categories() > 0);
        assert!(settings.total_endpoints() > settings.total_categories());
    }

    #[test]
    fn test_fallback_is_fixed() {
        assert_eq!(Settings::fallback(), Settings::fallback());
    }
}
