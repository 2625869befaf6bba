use crate::error::ParseCategoryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of labels an email can be classified into.
///
/// Declaration order matters: it is the table order, the scoring order and
/// the tie-break order when two categories end up with the same score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Spam,
    NotSpam,
    Promotional,
    Phishing,
    Newsletter,
    Social,
}

/// Static per-category data: lexical keywords, keyword weight and the
/// display metadata the rendering side uses.
#[derive(Debug)]
pub struct CategoryInfo {
    pub id: &'static str,
    pub display_name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub keywords: &'static [&'static str],
    pub weight: f64,
}

impl CategoryInfo {
    /// Multi-word keywords earn a phrase bonus in the keyword scorer.
    pub fn is_phrase(keyword: &str) -> bool {
        keyword.split_whitespace().nth(1).is_some()
    }
}

static CATEGORY_TABLE: [CategoryInfo; Category::COUNT] = [
    CategoryInfo {
        id: "spam",
        display_name: "Spam",
        color: "#dc3545",
        icon: "⚠️",
        keywords: &[
            "free",
            "money",
            "cash",
            "winner",
            "lottery",
            "congratulations",
            "urgent",
            "act now",
            "limited time",
            "guaranteed",
            "bonus",
            "win",
            "prize",
            "claim",
            "inheritance",
            "million",
            "dollars",
            "viagra",
            "pills",
            "weight loss",
            "make money fast",
            "earn money",
        ],
        weight: 3.0,
    },
    CategoryInfo {
        id: "not_spam",
        display_name: "Not Spam",
        color: "#28a745",
        icon: "✅",
        keywords: &[
            "meeting",
            "schedule",
            "regards",
            "best",
            "thank you",
            "please",
            "project",
            "work",
            "team",
            "update",
            "sincerely",
            "business",
            "attached",
            "report",
            "deadline",
            "conference",
            "colleague",
        ],
        weight: 1.0,
    },
    CategoryInfo {
        id: "promotional",
        display_name: "Promotional",
        color: "#fd7e14",
        icon: "🏷️",
        keywords: &[
            "sale",
            "discount",
            "offer",
            "promotion",
            "coupon",
            "save",
            "special",
            "exclusive",
            "deal",
            "shop now",
            "buy",
            "store",
            "black friday",
            "cyber monday",
            "clearance",
            "markdown",
        ],
        weight: 2.0,
    },
    CategoryInfo {
        id: "phishing",
        display_name: "Phishing",
        color: "#dc3545",
        icon: "🎣",
        keywords: &[
            "verify account",
            "suspended",
            "security alert",
            "update payment",
            "confirm identity",
            "account locked",
            "expires today",
            "click here immediately",
            "immediate action",
            "suspended account",
            "security breach",
            "verify now",
            "update billing",
            "confirm details",
        ],
        weight: 4.0,
    },
    CategoryInfo {
        id: "newsletter",
        display_name: "Newsletter",
        color: "#17a2b8",
        icon: "📰",
        keywords: &[
            "newsletter",
            "subscribe",
            "unsubscribe",
            "monthly",
            "weekly",
            "updates",
            "news",
            "insights",
            "industry",
            "publication",
            "digest",
            "edition",
            "issue",
            "article",
            "blog post",
        ],
        weight: 1.0,
    },
    CategoryInfo {
        id: "social",
        display_name: "Social",
        color: "#6f42c1",
        icon: "👥",
        keywords: &[
            "friend request",
            "notification",
            "tagged",
            "liked",
            "shared",
            "comment",
            "follow",
            "connect",
            "facebook",
            "instagram",
            "twitter",
            "linkedin",
            "social media",
            "profile",
            "post",
        ],
        weight: 1.5,
    },
];

/// Descriptor handed out for identifiers outside the fixed table.
pub static UNKNOWN_CATEGORY: CategoryInfo = CategoryInfo {
    id: "unknown",
    display_name: "Unknown",
    color: "#6c757d",
    icon: "❓",
    keywords: &[],
    weight: 0.0,
};

impl Category {
    pub const COUNT: usize = 6;

    pub const ALL: [Category; Category::COUNT] = [
        Category::Spam,
        Category::NotSpam,
        Category::Promotional,
        Category::Phishing,
        Category::Newsletter,
        Category::Social,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn info(self) -> &'static CategoryInfo {
        &CATEGORY_TABLE[self.index()]
    }

    pub fn id(self) -> &'static str {
        self.info().id
    }

    pub fn weight(self) -> f64 {
        self.info().weight
    }

    pub fn keywords(self) -> &'static [&'static str] {
        self.info().keywords
    }
}

/// Metadata lookup by identifier, falling back to [`UNKNOWN_CATEGORY`].
pub fn lookup(id: &str) -> &'static CategoryInfo {
    id.parse::<Category>()
        .map(Category::info)
        .unwrap_or(&UNKNOWN_CATEGORY)
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.id() == wanted)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
