//! Report Module
//!
//! Renders plugin query results for each kind of receiver:
//! - Console: fixed-width table
//! - Interactive: paginated chat lines
//! - Raw: count plus a comma separated list
//!
//! Rendering builds every message before anything is sent, so a rejected
//! request produces no output.

pub mod detail;
pub mod paging;
pub mod receiver;
pub mod table;

pub use detail::{detail_lines, Color};
pub use paging::{PagedView, PaginationSettings};
pub use receiver::{BufferedReceiver, Message, MessageKind, Receiver, ReceiverKind, StdoutReceiver};
pub use table::{align_centre, TableWriter};

use crate::core::Result;
use crate::plugin::PluginRecord;

/// Column headers of the console table.
pub const TABLE_HEADER: [&str; 4] = ["Name", "Author", "Version", "Configuration"];

/// Renders plugin lists and details into receiver messages.
#[derive(Clone, Debug)]
pub struct ReportFormatter {
    table: TableWriter,
    paging: PaginationSettings,
}

impl ReportFormatter {
    /// Create a formatter.
    pub fn new(table: TableWriter, paging: PaginationSettings) -> Self {
        Self { table, paging }
    }

    /// Render a plugin list for a receiver kind.
    ///
    /// `page` is only consulted by the paged strategy.
    pub fn render_list(
        &self,
        kind: ReceiverKind,
        plugins: &[&PluginRecord],
        page: usize,
    ) -> Result<Vec<Message>> {
        match kind {
            ReceiverKind::Console => Ok(self.render_table(plugins)),
            ReceiverKind::InteractivePaged => self.render_paged(plugins, page),
            ReceiverKind::RawList => Ok(self.render_raw(plugins)),
        }
    }

    /// Bordered console table.
    pub fn render_table(&self, plugins: &[&PluginRecord]) -> Vec<Message> {
        let rows: Vec<Vec<String>> = plugins
            .iter()
            .map(|p| {
                vec![
                    p.name.clone(),
                    p.author.clone(),
                    p.version.to_string(),
                    p.build_configuration.to_string(),
                ]
            })
            .collect();

        self.table
            .render(&TABLE_HEADER, &rows)
            .into_iter()
            .map(Message::plain)
            .collect()
    }

    /// One page of plugin names.
    pub fn render_paged(&self, plugins: &[&PluginRecord], page: usize) -> Result<Vec<Message>> {
        let view = PagedView::from_terms(plugins.iter().map(|p| p.name.as_str()), &self.paging);
        let lines = view.render(page, &self.paging)?;
        Ok(lines.into_iter().map(Message::info).collect())
    }

    /// Count line followed by every name.
    pub fn render_raw(&self, plugins: &[&PluginRecord]) -> Vec<Message> {
        let names: Vec<&str> = plugins.iter().map(|p| p.name.as_str()).collect();
        vec![
            Message::info(format!("Plugin count: {}", plugins.len())),
            Message::info(names.join(paging::TERM_SEPARATOR)),
        ]
    }

    /// Detail view of a single plugin.
    pub fn render_detail(&self, plugin: &PluginRecord, rich_text: bool) -> Vec<Message> {
        detail_lines(plugin, rich_text)
            .into_iter()
            .map(Message::info)
            .collect()
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new(TableWriter::default(), PaginationSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::{BuildConfiguration, PluginVersion};

    fn sample() -> Vec<PluginRecord> {
        vec![
            PluginRecord::new("Alpha", PluginVersion::new(&[1, 0])).with_author("Bob"),
            PluginRecord::new("beta", PluginVersion::new(&[2, 0]))
                .with_author("bob")
                .with_build_configuration(BuildConfiguration::Debug),
        ]
    }

    fn texts(messages: &[Message]) -> Vec<&str> {
        messages.iter().map(|m| m.text.as_str()).collect()
    }

    #[test]
    fn test_console_table() {
        let records = sample();
        let refs: Vec<&PluginRecord> = records.iter().collect();
        let out = ReportFormatter::default()
            .render_list(ReceiverKind::Console, &refs, 1)
            .unwrap();

        let rule = "-".repeat(77);
        assert_eq!(
            texts(&out),
            vec![
                rule.as_str(),
                "|       Name       |      Author      |     Version      |  Configuration   |",
                rule.as_str(),
                "|      Alpha       |       Bob        |       1.0        |     Release      |",
                "|       beta       |       bob        |       2.0        |      Debug       |",
                rule.as_str(),
            ]
        );
        assert!(out.iter().all(|m| m.kind == MessageKind::Plain));
    }

    #[test]
    fn test_console_table_empty() {
        let out = ReportFormatter::default().render_table(&[]);
        assert_eq!(out.len(), 4);
        assert!(texts(&out)[1].contains("Configuration"));
    }

    #[test]
    fn test_paged_list() {
        let records = sample();
        let refs: Vec<&PluginRecord> = records.iter().collect();
        let out = ReportFormatter::default()
            .render_list(ReceiverKind::InteractivePaged, &refs, 1)
            .unwrap();

        assert_eq!(texts(&out), vec!["Plugin List (1/1):", "Alpha, beta"]);
    }

    #[test]
    fn test_paged_rejects_bad_page() {
        let formatter = ReportFormatter::default();
        assert!(formatter.render_paged(&[], 0).is_err());
        assert!(formatter.render_paged(&[], 2).is_err());
    }

    #[test]
    fn test_paged_empty() {
        let out = ReportFormatter::default().render_paged(&[], 1).unwrap();
        assert_eq!(texts(&out), vec!["No plugins were found."]);
    }

    #[test]
    fn test_raw_list() {
        let records = sample();
        let refs: Vec<&PluginRecord> = records.iter().collect();
        let out = ReportFormatter::default()
            .render_list(ReceiverKind::RawList, &refs, 99)
            .unwrap();

        assert_eq!(texts(&out), vec!["Plugin count: 2", "Alpha, beta"]);
    }

    #[test]
    fn test_raw_list_empty() {
        let out = ReportFormatter::default().render_raw(&[]);
        assert_eq!(texts(&out), vec!["Plugin count: 0", ""]);
    }
}
