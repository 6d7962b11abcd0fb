use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageExt {
    Jpg,
    #[default]
    Png,
}

impl ImageExt {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Png => "png",
        }
    }
}

impl fmt::Display for ImageExt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where card images are hosted. Only builds URLs, never fetches them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ImageHost {
    pub host: String,
    pub account: String,
    pub repository: String,
    pub branch: String,
    pub folder: String,
    pub ext: ImageExt,
    pub card_back: String,
}

impl Default for ImageHost {
    fn default() -> Self {
        Self {
            host: "raw.githubusercontent.com".to_string(),
            account: "Digital-Void-divo".to_string(),
            repository: "Oracle-of-the-Moon".to_string(),
            branch: "main".to_string(),
            folder: "card_images".to_string(),
            ext: ImageExt::Png,
            card_back: "card-back".to_string(),
        }
    }
}

impl ImageHost {
    pub fn url_for(&self, slug: &str) -> String {
        let segments = [
            self.host.as_str(),
            self.account.as_str(),
            self.repository.as_str(),
            self.branch.as_str(),
            self.folder.as_str(),
        ];
        let base = segments
            .iter()
            .map(|segment| segment.trim_matches('/'))
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        format!("https://{base}/{slug}.{}", self.ext)
    }

    pub fn card_back_url(&self) -> String {
        self.url_for(&self.card_back)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_host_layout() {
        let host = ImageHost::default();
        assert_eq!(
            host.url_for("the-fool"),
            "https://raw.githubusercontent.com/Digital-Void-divo/Oracle-of-the-Moon/main/card_images/the-fool.png"
        );
        assert_eq!(
            host.card_back_url(),
            "https://raw.githubusercontent.com/Digital-Void-divo/Oracle-of-the-Moon/main/card_images/card-back.png"
        );
    }

    #[test]
    fn stray_slashes_are_trimmed() {
        let host = ImageHost {
            host: "cdn.example.org/".to_string(),
            account: "acct".to_string(),
            repository: "/deck".to_string(),
            branch: "dev".to_string(),
            folder: "art/".to_string(),
            ext: ImageExt::Jpg,
            card_back: "back".to_string(),
        };
        assert_eq!(host.url_for("the-sun"), "https://cdn.example.org/acct/deck/dev/art/the-sun.jpg");
    }
}
