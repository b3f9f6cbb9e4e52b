//! List command report data structures.

use super::output::{Output, Report};

/// One documented type.
#[derive(Debug)]
pub struct ListEntry {
    pub name: String,
    pub kind: String,
    pub path: String,
}

/// Every documented type with the stub it maps to.
#[derive(Debug)]
pub struct ListReport {
    pub entries: Vec<ListEntry>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.entries.is_empty() {
            out.preformatted("No documented types");
            return;
        }

        let width = self.entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
        out.section(&format!("Types ({})", self.entries.len()));
        for entry in &self.entries {
            let kind = if entry.kind.is_empty() {
                String::new()
            } else {
                format!(" ({})", entry.kind)
            };
            out.preformatted(&format!(
                "  {:width$}  {}{}",
                entry.name,
                entry.path,
                kind,
                width = width
            ));
        }
    }
}
