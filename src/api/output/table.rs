use chrono::{DateTime, Utc};
use comfy_table::{presets::NOTHING, Table};

use crate::core::resource::kind_groups::KindGroups;
use crate::core::resource::resource_kind::ResourceKind;
use crate::core::resource::summary::{headers, SummaryResource};

/// Gap between columns, as kubectl prints them.
const COLUMN_GAP: u16 = 3;

const NAMESPACE_HEADER: &str = "NAMESPACE";

pub struct TableFormatter;

impl TableFormatter {
    /// One table per kind, each followed by a blank line.
    pub fn format(
        groups: &KindGroups<SummaryResource>,
        all_namespaces: bool,
        now: DateTime<Utc>,
    ) -> String {
        let mut output = String::new();

        for (kind, items) in groups.iter() {
            let table = Self::build(kind, items, all_namespaces, now);
            for line in table.to_string().lines() {
                output.push_str(line.trim_end());
                output.push('\n');
            }
            output.push('\n');
        }

        output
    }

    fn build(
        kind: ResourceKind,
        items: &[SummaryResource],
        all_namespaces: bool,
        now: DateTime<Utc>,
    ) -> Table {
        let mut table = Table::new();
        table.load_preset(NOTHING);

        let mut header: Vec<&str> = Vec::new();
        if all_namespaces {
            header.push(NAMESPACE_HEADER);
        }
        header.extend_from_slice(headers(kind));
        table.set_header(header);

        for item in items {
            let mut row = Vec::new();
            if all_namespaces {
                row.push(item.metadata().namespace().to_string());
            }
            row.extend(item.columns(now));
            table.add_row(row);
        }

        for column in table.column_iter_mut() {
            column.set_padding((0, COLUMN_GAP));
        }

        table
    }
}
