use otawatch_core::{canonical_file_name, parse_version_cell, UpdateRecord};
use scraper::{Html, Selector};
use watch_logging::watch_warn;

/// Turns the fetched page into candidate records, preserving row order.
///
/// Trait seam so the page-shape-specific parsing strategy can be swapped
/// without touching selection or merge logic.
pub trait RowExtractor: Send + Sync {
    fn extract(&self, html: &str, device: &str) -> Vec<UpdateRecord>;
}

/// CSS-selector traversal of the vendor's update table:
/// - a candidate is any `<tr>` whose `id` starts with the device token
/// - the first `<td>` holds the version cell text
/// - the first `<a href>` holds the download link
///
/// Rows that fail any of these are skipped with a diagnostic; a malformed
/// vendor row never blocks discovery of a valid one.
#[derive(Debug, Default)]
pub struct ScraperRowExtractor;

impl RowExtractor for ScraperRowExtractor {
    fn extract(&self, html: &str, device: &str) -> Vec<UpdateRecord> {
        let doc = Html::parse_document(html);
        let row_sel = Selector::parse("tr").ok();
        let cell_sel = Selector::parse("td").ok();
        let link_sel = Selector::parse("a[href]").ok();
        let (Some(row_sel), Some(cell_sel), Some(link_sel)) = (row_sel, cell_sel, link_sel)
        else {
            return Vec::new();
        };

        let mut records = Vec::new();
        for row in doc.select(&row_sel) {
            let Some(row_id) = row.value().attr("id") else {
                continue;
            };
            if !row_id.starts_with(device) {
                continue;
            }

            let Some(cell) = row.select(&cell_sel).next() else {
                watch_warn!("skipping row {row_id}: no version cell");
                continue;
            };
            let text = cell.text().collect::<String>();
            let Some(version_cell) = parse_version_cell(&text) else {
                watch_warn!("skipping row {row_id}: unrecognized version cell {:?}", text.trim());
                continue;
            };

            let Some(href) = row
                .select(&link_sel)
                .next()
                .and_then(|link| link.value().attr("href"))
            else {
                watch_warn!("skipping row {row_id}: no download link");
                continue;
            };
            if canonical_file_name(href).is_empty() {
                watch_warn!("skipping row {row_id}: no artifact name in {href}");
                continue;
            }

            records.push(UpdateRecord::from_parts(version_cell, href));
        }
        records
    }
}
