use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "natural")]
    Natural,
    #[serde(rename = "man-made")]
    ManMade,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Natural => "natural",
            Category::ManMade => "man-made",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
