use crate::record::UpdateRecord;

/// Region filter for extracted rows.
///
/// A record qualifies when it carries no region tag at all, or when its tag
/// equals the configured acceptance marker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionCriterion {
    marker: Option<String>,
}

impl SelectionCriterion {
    pub fn new(marker: Option<String>) -> Self {
        Self { marker }
    }

    pub fn accepts(&self, record: &UpdateRecord) -> bool {
        match &record.region_tag {
            None => true,
            Some(tag) => self.marker.as_deref() == Some(tag.as_str()),
        }
    }
}

/// Picks the authoritative latest release from page candidates.
///
/// Page order is the only recency order trusted; release dates are never
/// parsed or compared. The sequence is scanned in reverse document order and
/// the first qualifying record wins, i.e. the last qualifying row as printed
/// on the page. When several qualifying rows share a build id the bottommost
/// one wins for the same reason.
pub fn select_release<'a>(
    records: &'a [UpdateRecord],
    criterion: &SelectionCriterion,
) -> Option<&'a UpdateRecord> {
    records.iter().rev().find(|record| criterion.accepts(record))
}
