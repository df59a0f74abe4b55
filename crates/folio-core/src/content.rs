//! Static page copy: skills, services, projects and the owner's profile.

use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Url(String);

crate::impl_string_newtype!(Url);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct EmailAddress(String);

crate::impl_string_newtype!(EmailAddress);

impl EmailAddress {
    pub fn mailto(&self) -> Url {
        Url::new(format!("mailto:{}", self.0))
    }
}

/// Pictogram next to an item. The host maps it to whatever icon set it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Icon {
    ShoppingBag,
    ShoppingCart,
    Code,
    Layers,
    Globe,
    Cpu,
    Sparkles,
    Workflow,
    Zap,
    Bot,
    Search,
    Settings,
    Mail,
    Phone,
    MapPin,
    Facebook,
    Github,
    Linkedin,
    Twitter,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub category: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

impl Service {
    pub const CARD_FEATURES: usize = 4;

    /// Features shown on the card.
    pub fn highlights(&self) -> &'static [&'static str] {
        &self.features[..self.features.len().min(Self::CARD_FEATURES)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub technologies: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub source_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: Icon,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "Shopify",
        category: "E-Commerce",
        icon: Icon::ShoppingBag,
    },
    Skill {
        name: "Liquid",
        category: "Templating",
        icon: Icon::Code,
    },
    Skill {
        name: "Hydrogen",
        category: "Framework",
        icon: Icon::Layers,
    },
    Skill {
        name: "Storefront API",
        category: "API",
        icon: Icon::Globe,
    },
    Skill {
        name: "WordPress",
        category: "CMS",
        icon: Icon::Globe,
    },
    Skill {
        name: "React",
        category: "Frontend",
        icon: Icon::Code,
    },
    Skill {
        name: "TypeScript",
        category: "Language",
        icon: Icon::Code,
    },
    Skill {
        name: "Node.js",
        category: "Backend",
        icon: Icon::Cpu,
    },
    Skill {
        name: "AI Agents",
        category: "AI/ML",
        icon: Icon::Sparkles,
    },
    Skill {
        name: "n8n",
        category: "Automation",
        icon: Icon::Workflow,
    },
    Skill {
        name: "Zapier",
        category: "Automation",
        icon: Icon::Zap,
    },
    Skill {
        name: "Wix",
        category: "CMS",
        icon: Icon::Globe,
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        value: "50+",
        label: "Projects Completed",
    },
    Stat {
        value: "30+",
        label: "Happy Clients",
    },
    Stat {
        value: "5+",
        label: "Years Experience",
    },
    Stat {
        value: "100%",
        label: "Client Satisfaction",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        icon: Icon::ShoppingCart,
        title: "Shopify Development",
        description: "Complete Shopify solutions from theme customization to headless commerce implementations.",
        features: &[
            "Custom Theme Development",
            "Liquid Templating",
            "Hydrogen & Oxygen",
            "Storefront API Integration",
            "App Development",
            "SEO Optimization",
        ],
    },
    Service {
        icon: Icon::Globe,
        title: "WordPress Solutions",
        description: "Custom WordPress websites and plugins tailored to your specific business requirements.",
        features: &[
            "Custom Theme Design",
            "Plugin Development",
            "WooCommerce Integration",
            "Headless WordPress",
            "Performance Optimization",
            "Security Hardening",
        ],
    },
    Service {
        icon: Icon::Bot,
        title: "AI & Automation",
        description: "Intelligent automation solutions that streamline workflows and boost productivity.",
        features: &[
            "AI Agent Development",
            "n8n Workflow Automation",
            "Zapier Integration",
            "Chatbot Development",
            "Process Automation",
            "API Integrations",
        ],
    },
    Service {
        icon: Icon::Code,
        title: "Custom Development",
        description: "Bespoke web applications built with modern technologies and best practices.",
        features: &[
            "React & Next.js Apps",
            "TypeScript Development",
            "Node.js Backend",
            "Database Design",
            "API Development",
            "Cloud Deployment",
        ],
    },
    Service {
        icon: Icon::Search,
        title: "SEO & Performance",
        description: "Optimize your digital presence for search engines and user experience.",
        features: &[
            "Technical SEO Audit",
            "Page Speed Optimization",
            "Schema Markup",
            "Core Web Vitals",
            "Analytics Setup",
            "Conversion Tracking",
        ],
    },
    Service {
        icon: Icon::Settings,
        title: "Maintenance & Support",
        description: "Ongoing support and maintenance to keep your digital assets running smoothly.",
        features: &[
            "24/7 Monitoring",
            "Security Updates",
            "Backup Management",
            "Bug Fixes",
            "Feature Updates",
            "Technical Support",
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Lumina Fashion",
        category: "Shopify",
        description: "A premium fashion e-commerce store with custom Liquid theme, advanced filtering, and seamless checkout experience.",
        icon: Icon::ShoppingCart,
        technologies: &["Liquid", "Shopify", "JavaScript", "SCSS"],
        live_url: Some("#"),
        source_url: Some("#"),
    },
    Project {
        title: "Hydrogen Analytics",
        category: "Headless Commerce",
        description: "Modern headless commerce dashboard built with Shopify Hydrogen and React for real-time analytics.",
        icon: Icon::Code,
        technologies: &["Hydrogen", "React", "TypeScript", "GraphQL"],
        live_url: Some("#"),
        source_url: Some("#"),
    },
    Project {
        title: "AutoFlow AI",
        category: "Automation",
        description: "Intelligent workflow automation system connecting multiple services with AI-powered decision making.",
        icon: Icon::Bot,
        technologies: &["n8n", "OpenAI", "Node.js", "Python"],
        live_url: Some("#"),
        source_url: Some("#"),
    },
    Project {
        title: "Corporate Pro",
        category: "WordPress",
        description: "Custom WordPress theme for a corporate client with advanced custom fields and performance optimization.",
        icon: Icon::Globe,
        technologies: &["WordPress", "PHP", "ACF", "Webpack"],
        live_url: Some("#"),
        source_url: Some("#"),
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Facebook",
        url: "https://www.facebook.com/profile.php?id=61587000095360",
        icon: Icon::Facebook,
    },
    SocialLink {
        label: "GitHub",
        url: "https://github.com",
        icon: Icon::Github,
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://linkedin.com",
        icon: Icon::Linkedin,
    },
    SocialLink {
        label: "Twitter",
        url: "https://twitter.com",
        icon: Icon::Twitter,
    },
];

pub const PORTFOLIO_URL: &str = "https://github.com";

/// Owner details used by the hero, contact and footer sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub author: String,
    pub role: String,
    pub summary: String,
    pub email: EmailAddress,
    pub phone: String,
    pub location: String,
    pub experience: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Iffy Dev".to_string(),
            author: "Gansallo Samuel".to_string(),
            role: "Shopify & WordPress Developer".to_string(),
            summary: "I specialize in building high-converting e-commerce experiences and \
                      intelligent automation solutions. From custom Liquid themes to AI-driven \
                      workflows, I turn complex problems into elegant digital reality."
                .to_string(),
            email: EmailAddress::new("ganzzydeveloper@gmail.com"),
            phone: "07061438188".to_string(),
            location: "Available Worldwide (Remote)".to_string(),
            experience: "5+".to_string(),
        }
    }
}

impl Profile {
    pub fn tel(&self) -> Url {
        Url::new(format!("tel:{}", self.phone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_highlights_limited_to_four() {
        for service in SERVICES {
            assert_eq!(service.highlights().len(), Service::CARD_FEATURES);
            assert_eq!(service.highlights()[0], service.features[0]);
        }
    }

    #[test]
    fn test_icon_names() {
        assert_eq!(Icon::ShoppingBag.name(), "shopping-bag");
        assert_eq!(Icon::MapPin.name(), "map-pin");
    }

    #[test]
    fn test_profile_partial_override() {
        let profile: Profile = serde_json::from_str(r#"{ "name": "Ada" }"#).unwrap();
        assert_eq!(profile.name, "Ada");
        let mailto = profile.email.mailto();
        assert_eq!(mailto.as_str(), "mailto:ganzzydeveloper@gmail.com");
        assert_eq!(profile.tel().to_string(), "tel:07061438188");
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(SKILLS.len(), 12);
        assert_eq!(SERVICES.len(), 6);
        assert_eq!(PROJECTS.len(), 4);
        assert!(PROJECTS.iter().all(|p| p.live_url.is_some()));
    }
}
