use crate::errors::{NewsError, NewsResult};

const HINDI_STOPWORDS: &[&str] = &[
    "के", "का", "की", "है", "में", "और", "को", "से", "पर", "यह", "था", "थी", "थे",
    "कि", "एक", "हैं", "भी", "ने", "लिए", "तो", "ही", "जो", "कर", "इस", "नहीं",
    "वह", "गया", "गई", "रहा", "रही", "हो", "साथ", "बाद", "तक", "किया", "कहा",
    "अपने", "उन्होंने", "जा", "सकता", "होने", "वे", "या", "दिया",
];

const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "are", "as", "at", "be",
    "been", "but", "by", "for", "from", "had", "has", "have", "he", "her", "his",
    "in", "into", "is", "it", "its", "more", "not", "of", "on", "one", "or",
    "said", "she", "that", "the", "their", "they", "this", "to", "was", "were",
    "which", "who", "will", "with",
];

/// Content language driving the body-text heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Hindi,
    English,
}

impl Language {
    pub fn from_code(code: &str) -> NewsResult<Self> {
        match code.trim().to_lowercase().as_str() {
            "hi" | "hindi" => Ok(Language::Hindi),
            "en" | "english" => Ok(Language::English),
            other => Err(NewsError::Config(format!(
                "unsupported language: {}",
                other
            ))),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Hindi => "hi",
            Language::English => "en",
        }
    }

    fn stopwords(&self) -> &'static [&'static str] {
        match self {
            Language::Hindi => HINDI_STOPWORDS,
            Language::English => ENGLISH_STOPWORDS,
        }
    }

    /// Number of words in `text` that are stopwords of this language.
    pub fn stopword_count(&self, text: &str) -> usize {
        let stopwords = self.stopwords();

        text.split(|c: char| c.is_whitespace() || c.is_ascii_punctuation() || c == '।')
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .filter(|w| stopwords.contains(&w.as_str()))
            .count()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
