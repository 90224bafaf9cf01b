use super::model::{LaunchRecord, PayloadRange};

// ---------------------------------------------------------------------------
// Payload filter: records whose mass falls inside the slider interval
// ---------------------------------------------------------------------------

/// Return the records whose payload mass lies in `range` (inclusive).
///
/// The result keeps the input order. Any iterator of record references is
/// accepted, so an already-filtered view can be narrowed again.
///
/// An inverted range selects nothing.
pub fn filter_by_payload<'a, I>(records: I, range: PayloadRange) -> Vec<&'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    if range.is_inverted() {
        log::warn!("Inverted payload range {range}, selecting no launches");
        return Vec::new();
    }
    records
        .into_iter()
        .filter(|rec| range.contains(rec.payload_mass_kg))
        .collect()
}
