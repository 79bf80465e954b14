use std::fmt;
use std::str::FromStr;

use super::icon::IconKind;

/// Display range for model ratings.
pub const RATING_RANGE: std::ops::RangeInclusive<f32> = 0.0..=5.0;

/// A sample model shown in the featured grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeaturedModel {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub downloads: &'static str,
    pub rating: f32,
    pub size: &'static str,
    pub tags: &'static [&'static str],
}

pub static FEATURED_MODELS: [FeaturedModel; 3] = [
    FeaturedModel {
        id: 1,
        name: "TinyBERT",
        description: "Compact language model for text classification",
        author: "Google Research",
        downloads: "12.5k",
        rating: 4.8,
        size: "4.2MB",
        tags: &["NLP", "Classification", "BERT"],
    },
    FeaturedModel {
        id: 2,
        name: "MobileNetV3",
        description: "Efficient image classification for mobile devices",
        author: "TensorFlow",
        downloads: "25.3k",
        rating: 4.9,
        size: "2.1MB",
        tags: &["Vision", "Mobile", "Classification"],
    },
    FeaturedModel {
        id: 3,
        name: "DistilGPT-2",
        description: "Lightweight text generation model",
        author: "Hugging Face",
        downloads: "8.7k",
        rating: 4.6,
        size: "6.8MB",
        tags: &["NLP", "Generation", "GPT"],
    },
];

/// Benefit card in the "Why MLShelf?" grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [Feature; 4] = [
    Feature {
        icon: IconKind::Zap,
        title: "Lightning Fast",
        description: "Deploy tiny ML models with minimal latency and maximum performance.",
    },
    Feature {
        icon: IconKind::Shield,
        title: "Secure & Reliable",
        description: "Enterprise-grade security with 99.9% uptime guarantee.",
    },
    Feature {
        icon: IconKind::Globe,
        title: "Global CDN",
        description: "Worldwide distribution for low-latency access anywhere.",
    },
    Feature {
        icon: IconKind::Users,
        title: "Community Driven",
        description: "Collaborative platform with thousands of ML practitioners.",
    },
];

/// One entry of the "How It Works" explainer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub static STEPS: [Step; 4] = [
    Step {
        icon: IconKind::Search,
        title: "Discover",
        description: "Browse our extensive library of tiny ML models",
    },
    Step {
        icon: IconKind::Code,
        title: "Integrate",
        description: "Simple APIs and SDKs for quick integration",
    },
    Step {
        icon: IconKind::Play,
        title: "Deploy",
        description: "Deploy to edge devices or cloud infrastructure",
    },
    Step {
        icon: IconKind::Share,
        title: "Share",
        description: "Contribute your own models to the community",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommunityStat {
    pub value: &'static str,
    pub label: &'static str,
    pub tone: &'static str,
}

pub static COMMUNITY_STATS: [CommunityStat; 3] = [
    CommunityStat { value: "10k+", label: "Active Users", tone: "blue" },
    CommunityStat { value: "2.5k+", label: "Models Shared", tone: "purple" },
    CommunityStat { value: "50M+", label: "Downloads", tone: "green" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    /// (label, href)
    pub links: &'static [(&'static str, &'static str)],
}

pub static FOOTER_COLUMNS: [FooterColumn; 2] = [
    FooterColumn {
        title: "Product",
        links: &[
            ("Explore Models", "/explore"),
            ("Pricing", "/pricing"),
            ("Documentation", "/docs"),
            ("API", "/api"),
        ],
    },
    FooterColumn {
        title: "Company",
        links: &[
            ("About", "/about"),
            ("Contact", "/contact"),
            ("Blog", "/blog"),
            ("Careers", "/careers"),
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: IconKind,
    pub label: &'static str,
    pub href: &'static str,
}

pub const CONTACT_EMAIL: &str = "hello@mlshelf.com";
pub const CONTACT_LOCATION: &str = "San Francisco, CA";

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { icon: IconKind::Github, label: "GitHub", href: "https://github.com" },
    SocialLink { icon: IconKind::Twitter, label: "Twitter", href: "https://twitter.com" },
    SocialLink { icon: IconKind::Linkedin, label: "LinkedIn", href: "https://linkedin.com" },
    SocialLink { icon: IconKind::Mail, label: "Email", href: "mailto:hello@mlshelf.com" },
];

/// URL of a seeded placeholder image
pub fn placeholder_image(seed: &str, width: u32, height: u32) -> String {
    format!("https://picsum.photos/seed/{seed}/{width}/{height}")
}

/// Category options offered by the search bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Nlp,
    Vision,
    Audio,
    Mobile,
}

/// Error returned when a select value names no category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Value carried by the `<option>` element
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Nlp => "nlp",
            Category::Vision => "vision",
            Category::Audio => "audio",
            Category::Mobile => "mobile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All Categories",
            Category::Nlp => "NLP",
            Category::Vision => "Computer Vision",
            Category::Audio => "Audio",
            Category::Mobile => "Mobile",
        }
    }

    pub fn all() -> [Category; 5] {
        [
            Category::All,
            Category::Nlp,
            Category::Vision,
            Category::Audio,
            Category::Mobile,
        ]
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Category::All),
            "nlp" => Ok(Category::Nlp),
            "vision" => Ok(Category::Vision),
            "audio" => Ok(Category::Audio),
            "mobile" => Ok(Category::Mobile),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
