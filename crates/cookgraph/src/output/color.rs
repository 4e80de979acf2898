//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Reference: cyan    (node and relationship IDs)
//!   - Accent:    magenta (labels)
//!   - Type:      blue    (relationship types)
//!   - Warning:   yellow  (load warnings)
//!   - Error:     red     (failed validation)
//!   - Success:   green   (clean validation)
//!   - Muted:     dimmed  (field names, arrows)
//!   - Emphasis:  bold    (section headers)

use crate::domain::RelationshipType;
use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Colorize a node or relationship ID (cyan).
pub(crate) fn colorize_id(id: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return id.to_string();
    }
    id.cyan().to_string()
}

/// Colorize a relationship type code (blue).
pub(crate) fn colorize_type(rel_type: RelationshipType, config: &OutputConfig) -> String {
    let text = rel_type.as_str();
    if !config.use_colors {
        return text.to_string();
    }
    text.blue().to_string()
}

/// Format labels as `:A:B`, magenta.
pub(crate) fn colorize_labels<'a>(
    labels: impl IntoIterator<Item = &'a String>,
    config: &OutputConfig,
) -> String {
    let text: String = labels.into_iter().map(|l| format!(":{l}")).collect();
    if !config.use_colors {
        return text;
    }
    text.magenta().to_string()
}

pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> OutputConfig {
        OutputConfig { use_colors: false }
    }

    #[test]
    fn plain_config_leaves_text_untouched() {
        let config = plain();
        assert_eq!(success("ok", &config), "ok");
        assert_eq!(error("bad", &config), "bad");
        assert_eq!(warning("hm", &config), "hm");
        assert_eq!(colorize_id("R1", &config), "R1");
        assert_eq!(
            colorize_type(RelationshipType::NextStep, &config),
            "NEXT_STEP"
        );
    }

    #[test]
    fn labels_are_prefixed_with_colons() {
        let labels = ["Recipe".to_string(), "家常菜".to_string()];
        assert_eq!(colorize_labels(&labels, &plain()), ":Recipe:家常菜");
    }

    #[test]
    fn colored_config_adds_escape_codes() {
        colored::control::set_override(true);
        let colored = colorize_id("R1", &OutputConfig { use_colors: true });
        colored::control::unset_override();
        assert!(colored.contains("R1"));
        assert_ne!(colored, "R1");
    }
}
