use crate::state::SessionState;

/// Notifications emitted by the [`crate::SignatureController`]
#[derive(Debug, Clone, PartialEq)]
pub enum SignatureEvent {
    StateChanged {
        old: SessionState,
        new: SessionState,
    },
    /// A vertex was appended; `count` is the new vertex count
    VertexRecorded {
        count: usize,
    },
    /// A stroke boundary was recorded at `index`
    StrokeBroken {
        index: usize,
    },
    Cleared,
    /// A bitmap was produced and handed to the save callback
    Finished {
        width: u32,
        height: u32,
    },
    Cancelled,
}
