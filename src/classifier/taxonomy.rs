/// Natural-disaster terms, in match order.
pub const HINDI_NATURAL: &[&str] = &[
    "भूकंप",
    "बाढ़",
    "सुनामी",
    "चक्रवात",
    "हरिकेन",
    "भूस्खलन",
    "सूखा",
    "जंगल की आग",
    "ज्वालामुखी",
    "टोर्नेडो",
    "तूफान",
    "हिमस्खलन",
    "लू",
    "शीत लहर",
];

/// Man-made-disaster terms, in match order.
pub const HINDI_MAN_MADE: &[&str] = &[
    "विस्फोट",
    "आग",
    "पतन",
    "दुर्घटना",
    "रासायनिक रिसाव",
    "तेल रिसाव",
    "परमाणु",
    "संदूषण",
    "पटरी से उतरना",
    "भवन पतन",
    "औद्योगिक दुर्घटना",
];

/// Two ordered keyword lists used by the classifier.
///
/// Keywords are lowercased on construction so matching against lowercased
/// text stays case-insensitive for scripts that have case. Surrounding
/// whitespace is kept; empty keywords are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    natural: Vec<String>,
    man_made: Vec<String>,
}

impl Taxonomy {
    pub fn new<N, M>(natural: N, man_made: M) -> Self
    where
        N: IntoIterator,
        N::Item: AsRef<str>,
        M: IntoIterator,
        M::Item: AsRef<str>,
    {
        Self {
            natural: normalize_keywords(natural),
            man_made: normalize_keywords(man_made),
        }
    }

    /// Hindi vocabulary used for the default feed set
    pub fn hindi() -> Self {
        Self::new(HINDI_NATURAL.iter(), HINDI_MAN_MADE.iter())
    }

    pub fn natural(&self) -> &[String] {
        &self.natural
    }

    pub fn man_made(&self) -> &[String] {
        &self.man_made
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::hindi()
    }
}

fn normalize_keywords<I>(keywords: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|k| k.as_ref().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}
