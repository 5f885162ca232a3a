/// Where a [`Store`](crate::Store) stands relative to the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSyncStatus {
    /// Nothing has been reduced yet.
    #[default]
    Init,
    /// Actions are queued on the channel but not applied.
    Pending,
    /// The snapshot changed since the host last marked it clean.
    Dirty,
    Clean,
}
