//! Single-plugin detail view.

use crate::plugin::interface::{BuildConfiguration, PluginRecord};

/// RGB color for chat markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Field labels
    pub const VIOLET: Color = Color::rgb(238, 130, 238);
    /// Debug builds
    pub const ORANGE_RED: Color = Color::rgb(255, 69, 0);
    /// Release builds
    pub const LIME_GREEN: Color = Color::rgb(50, 205, 50);

    /// Create a color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase hex form, e.g. `ee82ee`.
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Wrap text in a `[c/RRGGBB:text]` color tag.
pub fn color_tag(text: &str, color: Color) -> String {
    format!("[c/{}:{}]", color.to_hex(), text)
}

fn configuration_token(config: BuildConfiguration, rich: bool) -> String {
    if !rich {
        return config.to_string();
    }
    let color = match config {
        BuildConfiguration::Debug => Color::ORANGE_RED,
        BuildConfiguration::Release => Color::LIME_GREEN,
    };
    color_tag(&config.to_string(), color)
}

fn labelled(label: &str, value: &str, rich: bool) -> String {
    if rich {
        format!("{}: {}", color_tag(label, Color::VIOLET), value)
    } else {
        format!("{}: {}", label, value)
    }
}

/// Name, Author and Description lines for one plugin.
pub fn detail_lines(record: &PluginRecord, rich: bool) -> Vec<String> {
    let name = format!(
        "{} (v{}) ({})",
        record.name,
        record.version,
        configuration_token(record.build_configuration, rich)
    );

    vec![
        labelled("Name", &name, rich),
        labelled("Author", &record.author, rich),
        labelled("Description", &record.description, rich),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::interface::PluginVersion;

    fn sample() -> PluginRecord {
        PluginRecord::new("Alpha", PluginVersion::new(&[1, 0]))
            .with_author("Bob")
            .with_description("First letter")
    }

    #[test]
    fn test_plain_detail() {
        let lines = detail_lines(&sample(), false);

        assert_eq!(
            lines,
            vec![
                "Name: Alpha (v1.0) (Release)",
                "Author: Bob",
                "Description: First letter",
            ]
        );
    }

    #[test]
    fn test_rich_detail() {
        let record = sample().with_build_configuration(BuildConfiguration::Debug);
        let lines = detail_lines(&record, true);

        assert_eq!(lines[0], "[c/ee82ee:Name]: Alpha (v1.0) ([c/ff4500:Debug])");
        assert_eq!(lines[1], "[c/ee82ee:Author]: Bob");
    }

    #[test]
    fn test_release_color() {
        let lines = detail_lines(&sample(), true);
        assert!(lines[0].ends_with("([c/32cd32:Release])"));
    }
}
