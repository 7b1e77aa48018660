use iplog_core::ResolvedRecord;

const HEADERS: [&str; 3] = ["", "Hostname", "IP Address"];

/// Render records as a grid, one row per record, indexed by the record id.
pub(crate) fn render_table(records: &[ResolvedRecord]) -> String {
    let rows: Vec<[String; 3]> = records
        .iter()
        .map(|it| [it.id.to_string(), it.hostname.clone(), it.ip_address.clone()])
        .collect();

    let mut widths = HEADERS.map(|it| it.chars().count());
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = usize::max(widths[i], cell.chars().count());
        }
    }

    let line = |left: &str, mid: &str, right: &str| -> String {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };

    let cells = |cells: [&str; 3]| -> String {
        let mut s = String::from("│");
        for (i, cell) in cells.iter().enumerate() {
            // the id column is right aligned
            if i == 0 {
                s.push_str(&format!(" {:>width$} │", cell, width = widths[i]));
            } else {
                s.push_str(&format!(" {:<width$} │", cell, width = widths[i]));
            }
        }
        s
    };

    let mut out = vec![line("┌", "┬", "┐"), cells(HEADERS)];
    for row in &rows {
        out.push(line("├", "┼", "┤"));
        out.push(cells([row[0].as_str(), row[1].as_str(), row[2].as_str()]));
    }
    out.push(line("└", "┴", "┘"));

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table() {
        let records = vec![
            ResolvedRecord {
                id: 1,
                hostname: "example.com".to_string(),
                ip_address: "93.184.216.34".to_string(),
            },
            ResolvedRecord {
                id: 12,
                hostname: "www.rust-lang.org".to_string(),
                ip_address: "2600:9000::1".to_string(),
            },
        ];

        let expect = "\
┌────┬───────────────────┬───────────────┐
│    │ Hostname          │ IP Address    │
├────┼───────────────────┼───────────────┤
│  1 │ example.com       │ 93.184.216.34 │
├────┼───────────────────┼───────────────┤
│ 12 │ www.rust-lang.org │ 2600:9000::1  │
└────┴───────────────────┴───────────────┘";

        assert_eq!(expect, render_table(&records));
    }

    #[test]
    fn test_render_empty_table() {
        let expect = "\
┌──┬──────────┬────────────┐
│  │ Hostname │ IP Address │
└──┴──────────┴────────────┘";
        assert_eq!(expect, render_table(&[]));
    }
}
