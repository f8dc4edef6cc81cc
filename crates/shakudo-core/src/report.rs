//! Printable reference report.
//!
//! Renders every spacing and typography token for all three
//! breakpoints as a self-contained HTML document with print styles,
//! written to a temp file so the desktop app can hand it to the
//! system browser.

use std::path::PathBuf;

use crate::error::ShakudoError;
use crate::model::{Breakpoint, SpacingField};
use crate::store::SettingsStore;
use crate::typography::{font_stack, style_for, TextRole};

/// Values on the 8pt grid read cleanly in the table; others get a marker.
fn spacing_cell(field: SpacingField, value: u32) -> String {
    if field.breaks_grid(value) {
        format!("<td class=\"off-grid\">{value}px *</td>")
    } else {
        format!("<td>{value}px</td>")
    }
}

fn spacing_table(store: &SettingsStore) -> String {
    let mut rows = String::new();
    for field in SpacingField::ALL {
        rows.push_str("<tr>");
        rows.push_str(&format!(
            "<td class=\"token\">{}</td><td class=\"usage\">{}</td>",
            field.label(),
            field.usage()
        ));
        for &bp in Breakpoint::ALL {
            rows.push_str(&spacing_cell(*field, field.get(store.spacing.get(bp))));
        }
        rows.push_str("</tr>\n");
    }
    format!(
        "<table>\n<thead><tr><th>Token</th><th>Usage</th>\
         <th>Desktop</th><th>Tablet</th><th>Mobile</th></tr></thead>\n\
         <tbody>\n{rows}</tbody>\n</table>"
    )
}

fn typography_section(store: &SettingsStore, breakpoint: Breakpoint) -> String {
    let config = store.typography.get(breakpoint);
    let mut rows = String::new();
    for &role in TextRole::ALL {
        let style = style_for(config, role);
        rows.push_str(&format!(
            "<tr><td class=\"token\">{}</td><td>{}px</td><td>{}</td>\
             <td>{}em</td><td>{}</td></tr>\n",
            role.label(),
            style.font_size,
            style.line_height,
            style.letter_spacing,
            style.font_weight,
        ));
    }
    format!(
        "<h3>{} ({}px)</h3>\n<p class=\"stack\">Font stack: {}</p>\n\
         <table>\n<thead><tr><th>Style</th><th>Size</th><th>Line height</th>\
         <th>Letter spacing</th><th>Weight</th></tr></thead>\n\
         <tbody>\n{rows}</tbody>\n</table>",
        breakpoint.label(),
        breakpoint.preview_width() as u32,
        font_stack(config.font_family),
    )
}

/// Render the full reference document.
pub fn render_report(store: &SettingsStore) -> String {
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M");
    let spacing = spacing_table(store);
    let typography: String = Breakpoint::ALL
        .iter()
        .map(|&bp| typography_section(store, bp))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Design Token Reference</title>\n<style>\n{CSS}\n</style>\n</head>\n<body>\n\
         <h1>Design Token Reference</h1>\n\
         <p class=\"meta\">Generated {generated}</p>\n\
         <h2>Spacing</h2>\n{spacing}\n\
         <p class=\"legend\">* value is off the 8pt grid</p>\n\
         <h2>Typography</h2>\n{typography}\n\
         </body>\n</html>\n"
    )
}

/// Write the report next to the other temp files and return its path.
pub fn write_report(store: &SettingsStore) -> Result<PathBuf, ShakudoError> {
    let path = std::env::temp_dir().join("shakudo-reference.html");
    std::fs::write(&path, render_report(store))?;
    Ok(path)
}

const CSS: &str = "\
body { font-family: system-ui, -apple-system, sans-serif; margin: 2rem auto; \
max-width: 60rem; color: #1f2937; }
h1 { font-size: 1.6rem; }
h2 { font-size: 1.2rem; margin-top: 2rem; border-bottom: 1px solid #d1d5db; }
h3 { font-size: 1rem; margin-top: 1.5rem; }
table { border-collapse: collapse; width: 100%; font-size: 0.85rem; }
th, td { text-align: left; padding: 0.3rem 0.6rem; border-bottom: 1px solid #e5e7eb; }
th { background: #f3f4f6; }
td.token { font-weight: 600; white-space: nowrap; }
td.usage { color: #6b7280; }
td.off-grid { color: #c2410c; font-weight: 600; }
p.meta, p.legend, p.stack { color: #6b7280; font-size: 0.8rem; }
@media print {
  body { margin: 0.5in; max-width: none; }
  h2 { page-break-after: avoid; }
  table { page-break-inside: avoid; }
}";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Breakpoint, SpacingField};

    fn store() -> SettingsStore {
        SettingsStore::load_from(None)
    }

    #[test]
    fn report_lists_every_spacing_token() {
        let html = render_report(&store());
        for field in SpacingField::ALL {
            assert!(html.contains(field.label()), "missing {}", field.label());
        }
    }

    #[test]
    fn report_has_a_section_per_breakpoint() {
        let html = render_report(&store());
        assert!(html.contains("Desktop (1200px)"));
        assert!(html.contains("Tablet (768px)"));
        assert!(html.contains("Mobile (390px)"));
    }

    #[test]
    fn off_grid_values_are_flagged() {
        let mut store = store();
        store.set_spacing(Breakpoint::Desktop, SpacingField::MajorSections, 50);
        let html = render_report(&store);
        assert!(html.contains("class=\"off-grid\">50px *"));
        // The max-width token is exempt from the grid.
        store.set_spacing(Breakpoint::Desktop, SpacingField::SingleColumnMaxWidth, 700);
        let html = render_report(&store);
        assert!(!html.contains("700px *"));
    }

    #[test]
    fn report_is_standalone_html() {
        let html = render_report(&store());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("@media print"));
    }
}
