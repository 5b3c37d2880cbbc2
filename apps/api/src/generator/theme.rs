//! Profession visual themes — a fixed, read-only lookup from profession
//! category to color palette, typography, and theme tag.
//!
//! `resolve_config` is a total function: any category the classifier can emit
//! has an exact entry, and anything unrecognized (including categories coming
//! straight from the AI extraction step) resolves to the `Engineer` entry.

use serde::Serialize;

/// Visual configuration for one profession category.
///
/// `theme` is a coarse intent tag (tech / engineering / creative / business /
/// medical / academic). It documents the entry and is not branched on
/// downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfessionConfig {
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub accent_color: &'static str,
    pub bg_gradient: &'static str,
    pub font_family: &'static str,
    pub theme: &'static str,
}

const SANS_STACK: &str = "'Inter', 'Roboto', sans-serif";

const SLATE_GRADIENT: &str = "linear-gradient(135deg, #1e293b 0%, #0f172a 100%)";
const GRAY_GRADIENT: &str = "linear-gradient(135deg, #1f2937 0%, #111827 100%)";
const STEEL_GRADIENT: &str = "linear-gradient(135deg, #374151 0%, #1f2937 100%)";
const INDIGO_GRADIENT: &str = "linear-gradient(135deg, #312e81 0%, #1e1b4b 100%)";
const CYAN_GRADIENT: &str = "linear-gradient(135deg, #164e63 0%, #0c4a6e 100%)";
const EMBER_GRADIENT: &str = "linear-gradient(135deg, #7c2d12 0%, #451a03 100%)";
const EARTH_GRADIENT: &str = "linear-gradient(135deg, #451a03 0%, #1c1917 100%)";
const STONE_GRADIENT: &str = "linear-gradient(135deg, #292524 0%, #1c1917 100%)";

/// Default configuration for unrecognized categories.
const ENGINEER: ProfessionConfig = ProfessionConfig {
    primary_color: "#059669",
    secondary_color: "#047857",
    accent_color: "#10b981",
    bg_gradient: GRAY_GRADIENT,
    font_family: SANS_STACK,
    theme: "engineering",
};

/// Resolves the visual configuration for a profession category.
///
/// Exact-string lookup; unrecognized categories deliberately fall back to the
/// `Engineer` entry instead of erroring.
pub fn resolve_config(category: &str) -> ProfessionConfig {
    match category {
        "Software Engineer" => ProfessionConfig {
            primary_color: "#2563eb",
            secondary_color: "#1e40af",
            accent_color: "#3b82f6",
            bg_gradient: SLATE_GRADIENT,
            font_family: "'Fira Code', 'JetBrains Mono', monospace",
            theme: "tech",
        },
        "Computer Engineer" => ProfessionConfig {
            primary_color: "#1d4ed8",
            secondary_color: "#1e3a8a",
            accent_color: "#3b82f6",
            bg_gradient: SLATE_GRADIENT,
            font_family: SANS_STACK,
            theme: "tech",
        },
        "Civil Engineer" => ProfessionConfig {
            primary_color: "#059669",
            secondary_color: "#047857",
            accent_color: "#10b981",
            bg_gradient: GRAY_GRADIENT,
            font_family: SANS_STACK,
            theme: "engineering",
        },
        "Electrical Engineer" => ProfessionConfig {
            primary_color: "#dc2626",
            secondary_color: "#b91c1c",
            accent_color: "#ef4444",
            bg_gradient: STEEL_GRADIENT,
            font_family: SANS_STACK,
            theme: "engineering",
        },
        "Electronics Engineer" => ProfessionConfig {
            primary_color: "#7c2d12",
            secondary_color: "#92400e",
            accent_color: "#f59e0b",
            bg_gradient: STEEL_GRADIENT,
            font_family: SANS_STACK,
            theme: "engineering",
        },
        "Mechanical Engineer" => ProfessionConfig {
            primary_color: "#4b5563",
            secondary_color: "#374151",
            accent_color: "#6b7280",
            bg_gradient: GRAY_GRADIENT,
            font_family: SANS_STACK,
            theme: "engineering",
        },
        "Chemical Engineer" => ProfessionConfig {
            primary_color: "#7c3aed",
            secondary_color: "#6d28d9",
            accent_color: "#8b5cf6",
            bg_gradient: INDIGO_GRADIENT,
            font_family: SANS_STACK,
            theme: "engineering",
        },
        "Aerospace Engineer" => ProfessionConfig {
            primary_color: "#1e40af",
            secondary_color: "#1e3a8a",
            accent_color: "#3b82f6",
            bg_gradient: SLATE_GRADIENT,
            font_family: SANS_STACK,
            theme: "engineering",
        },
        "Biomedical Engineer" => ProfessionConfig {
            primary_color: "#0891b2",
            secondary_color: "#0e7490",
            accent_color: "#06b6d4",
            bg_gradient: CYAN_GRADIENT,
            font_family: SANS_STACK,
            theme: "engineering",
        },
        "Environmental Engineer" => ProfessionConfig {
            primary_color: "#16a34a",
            secondary_color: "#15803d",
            accent_color: "#22c55e",
            bg_gradient: GRAY_GRADIENT,
            font_family: SANS_STACK,
            theme: "engineering",
        },
        "Industrial Engineer" => ProfessionConfig {
            primary_color: "#ea580c",
            secondary_color: "#dc2626",
            accent_color: "#f97316",
            bg_gradient: EMBER_GRADIENT,
            font_family: SANS_STACK,
            theme: "engineering",
        },
        "Petroleum Engineer" => ProfessionConfig {
            primary_color: "#a16207",
            secondary_color: "#92400e",
            accent_color: "#d97706",
            bg_gradient: EARTH_GRADIENT,
            font_family: SANS_STACK,
            theme: "engineering",
        },
        "Mining Engineer" => ProfessionConfig {
            primary_color: "#78716c",
            secondary_color: "#57534e",
            accent_color: "#a8a29e",
            bg_gradient: STONE_GRADIENT,
            font_family: SANS_STACK,
            theme: "engineering",
        },
        "Materials Engineer" => ProfessionConfig {
            primary_color: "#6366f1",
            secondary_color: "#4f46e5",
            accent_color: "#818cf8",
            bg_gradient: INDIGO_GRADIENT,
            font_family: SANS_STACK,
            theme: "engineering",
        },
        "Nuclear Engineer" => ProfessionConfig {
            primary_color: "#059669",
            secondary_color: "#047857",
            accent_color: "#10b981",
            bg_gradient: GRAY_GRADIENT,
            font_family: SANS_STACK,
            theme: "engineering",
        },
        "Agricultural Engineer" => ProfessionConfig {
            primary_color: "#65a30d",
            secondary_color: "#4d7c0f",
            accent_color: "#84cc16",
            bg_gradient: GRAY_GRADIENT,
            font_family: SANS_STACK,
            theme: "engineering",
        },
        "Marine Engineer" => ProfessionConfig {
            primary_color: "#0284c7",
            secondary_color: "#0369a1",
            accent_color: "#0ea5e9",
            bg_gradient: CYAN_GRADIENT,
            font_family: SANS_STACK,
            theme: "engineering",
        },
        "Designer" => ProfessionConfig {
            primary_color: "#7c3aed",
            secondary_color: "#6d28d9",
            accent_color: "#8b5cf6",
            bg_gradient: INDIGO_GRADIENT,
            font_family: "'Poppins', 'Inter', sans-serif",
            theme: "creative",
        },
        "Marketing Professional" => ProfessionConfig {
            primary_color: "#ea580c",
            secondary_color: "#dc2626",
            accent_color: "#f97316",
            bg_gradient: EMBER_GRADIENT,
            font_family: SANS_STACK,
            theme: "business",
        },
        "Healthcare Professional" => ProfessionConfig {
            primary_color: "#0891b2",
            secondary_color: "#0e7490",
            accent_color: "#06b6d4",
            bg_gradient: CYAN_GRADIENT,
            font_family: SANS_STACK,
            theme: "medical",
        },
        "Educator" => ProfessionConfig {
            primary_color: "#7c2d12",
            secondary_color: "#92400e",
            accent_color: "#f59e0b",
            bg_gradient: STEEL_GRADIENT,
            font_family: SANS_STACK,
            theme: "academic",
        },
        // "Engineer" exact key and the unrecognized-category fallback share
        // one entry; the distinction is not observable to callers.
        _ => ENGINEER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_resolves_to_engineer_entry() {
        assert_eq!(
            resolve_config("Underwater Basket Weaver"),
            resolve_config("Engineer")
        );
    }

    #[test]
    fn test_civil_engineer_palette() {
        let config = resolve_config("Civil Engineer");
        assert_eq!(config.primary_color, "#059669");
        assert_eq!(config.secondary_color, "#047857");
        assert_eq!(config.theme, "engineering");
    }

    #[test]
    fn test_software_engineer_uses_monospace_stack() {
        let config = resolve_config("Software Engineer");
        assert!(config.font_family.contains("Fira Code"));
        assert_eq!(config.theme, "tech");
    }

    #[test]
    fn test_designer_uses_poppins() {
        let config = resolve_config("Designer");
        assert!(config.font_family.contains("Poppins"));
        assert_eq!(config.theme, "creative");
    }

    #[test]
    fn test_lookup_is_case_sensitive_exact_match() {
        // "software engineer" (lowercase) is not a table key and must fall back.
        assert_eq!(resolve_config("software engineer"), resolve_config("Engineer"));
    }

    #[test]
    fn test_every_classifier_category_has_an_intended_entry() {
        // Each category the classifier can emit maps to a non-fallback entry,
        // except the generic Engineer rule which IS the fallback entry.
        let categories = [
            "Software Engineer",
            "Civil Engineer",
            "Electrical Engineer",
            "Electronics Engineer",
            "Mechanical Engineer",
            "Chemical Engineer",
            "Aerospace Engineer",
            "Biomedical Engineer",
            "Environmental Engineer",
            "Industrial Engineer",
            "Computer Engineer",
            "Petroleum Engineer",
            "Mining Engineer",
            "Materials Engineer",
            "Nuclear Engineer",
            "Agricultural Engineer",
            "Marine Engineer",
            "Designer",
            "Marketing Professional",
            "Healthcare Professional",
            "Educator",
        ];
        for category in categories {
            let config = resolve_config(category);
            assert!(
                config.primary_color.starts_with('#'),
                "{category} has no palette"
            );
        }
        // Nuclear and Civil intentionally share the Engineer palette in the
        // observed table; spot-check one category that must differ.
        assert_ne!(resolve_config("Electrical Engineer"), ENGINEER);
    }
}
