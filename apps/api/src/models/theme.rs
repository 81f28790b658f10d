use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::render::RenderError;

/// The closed set of portfolio themes. Every id has exactly one renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    Minimal,
    Bold,
    Creative,
    Professional,
    Developer,
    Elegant,
    Monochrome,
    Bauhaus,
    Linear,
}

impl ThemeId {
    pub const ALL: [ThemeId; 9] = [
        ThemeId::Minimal,
        ThemeId::Bold,
        ThemeId::Creative,
        ThemeId::Professional,
        ThemeId::Developer,
        ThemeId::Elegant,
        ThemeId::Monochrome,
        ThemeId::Bauhaus,
        ThemeId::Linear,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Minimal => "minimal",
            ThemeId::Bold => "bold",
            ThemeId::Creative => "creative",
            ThemeId::Professional => "professional",
            ThemeId::Developer => "developer",
            ThemeId::Elegant => "elegant",
            ThemeId::Monochrome => "monochrome",
            ThemeId::Bauhaus => "bauhaus",
            ThemeId::Linear => "linear",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| RenderError::UnknownTheme(s.to_string()))
    }
}

/// Three-colour swatch shown in the theme picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

/// Presentation metadata for a theme. Static; never derived from resume data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeMeta {
    pub id: ThemeId,
    pub name: &'static str,
    pub description: &'static str,
    pub colors: ThemeColors,
}

pub static THEMES: [ThemeMeta; 9] = [
    ThemeMeta {
        id: ThemeId::Minimal,
        name: "Minimal",
        description: "White, clean, generous whitespace, system fonts",
        colors: ThemeColors {
            primary: "#1a1a1a",
            secondary: "#f5f5f5",
            accent: "#555555",
        },
    },
    ThemeMeta {
        id: ThemeId::Bold,
        name: "Bold",
        description: "Dark background, large type, gradient accents",
        colors: ThemeColors {
            primary: "#0a0a0a",
            secondary: "#3b82f6",
            accent: "#8b5cf6",
        },
    },
    ThemeMeta {
        id: ThemeId::Creative,
        name: "Creative",
        description: "Asymmetric grid, pastels, CSS animations, card-based",
        colors: ThemeColors {
            primary: "#faf5ff",
            secondary: "#a855f7",
            accent: "#ec4899",
        },
    },
    ThemeMeta {
        id: ThemeId::Professional,
        name: "Professional",
        description: "Navy/white, serif headings, two-column, formal",
        colors: ThemeColors {
            primary: "#1e3a5f",
            secondary: "#ffffff",
            accent: "#2c5282",
        },
    },
    ThemeMeta {
        id: ThemeId::Developer,
        name: "Developer",
        description: "Terminal aesthetic, monospace, dark + green/amber",
        colors: ThemeColors {
            primary: "#0d1117",
            secondary: "#4ade80",
            accent: "#fbbf24",
        },
    },
    ThemeMeta {
        id: ThemeId::Elegant,
        name: "Elegant",
        description: "Warm cream, gold accents, editorial typography",
        colors: ThemeColors {
            primary: "#fdf8f0",
            secondary: "#b8860b",
            accent: "#d4a853",
        },
    },
    ThemeMeta {
        id: ThemeId::Monochrome,
        name: "Monochrome",
        description: "Pure black & white, serif editorial, oversized type",
        colors: ThemeColors {
            primary: "#000000",
            secondary: "#ffffff",
            accent: "#525252",
        },
    },
    ThemeMeta {
        id: ThemeId::Bauhaus,
        name: "Bauhaus",
        description: "Geometric constructivism, primary colors, hard shadows",
        colors: ThemeColors {
            primary: "#F0F0F0",
            secondary: "#D02020",
            accent: "#1040C0",
        },
    },
    ThemeMeta {
        id: ThemeId::Linear,
        name: "Linear",
        description: "Cinematic dark mode, ambient lighting, glass effects",
        colors: ThemeColors {
            primary: "#050506",
            secondary: "#5E6AD2",
            accent: "#6872D9",
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_matches_id_order() {
        for (index, id) in ThemeId::ALL.into_iter().enumerate() {
            assert_eq!(THEMES[index].id, id);
            assert_eq!(THEMES[id as usize].id, id);
        }
    }

    #[test]
    fn test_parse_known_ids() {
        for id in ThemeId::ALL {
            assert_eq!(id.as_str().parse::<ThemeId>().unwrap(), id);
            assert_eq!(id.to_string(), id.as_str());
        }
    }

    #[test]
    fn test_parse_unknown_id_names_value() {
        let err = "neon".parse::<ThemeId>().unwrap_err();
        assert!(err.to_string().contains("neon"));
        // ids are case-sensitive on the wire
        assert!("Minimal".parse::<ThemeId>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        assert_eq!(
            serde_json::to_string(&ThemeId::Bauhaus).unwrap(),
            r#""bauhaus""#
        );
        let id: ThemeId = serde_json::from_str(r#""linear""#).unwrap();
        assert_eq!(id, ThemeId::Linear);
    }

    #[test]
    fn test_meta_serializes_swatch() {
        let value = serde_json::to_value(&THEMES[ThemeId::Elegant as usize]).unwrap();
        assert_eq!(value["id"], "elegant");
        assert_eq!(value["colors"]["secondary"], "#b8860b");
    }
}
