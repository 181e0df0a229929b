//! Base trait for snapshot analyzers.

/// Trait that all analyzers implement.
///
/// Analyzers are plain values with no state between calls: the same snapshot
/// always produces the same report, and the snapshot is only borrowed for the
/// duration of the call.
pub trait Analyzer {
    type Snapshot: ?Sized;
    type Report;

    /// Name used to look up the display tag.
    fn name(&self) -> &'static str;

    /// Analyze one snapshot.
    fn analyze(&self, snapshot: &Self::Snapshot) -> Self::Report;
}
