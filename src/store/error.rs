//! Store-specific error types.

use uuid::Uuid;

/// Errors that can occur during store operations.
///
/// Both variants are contract violations on the caller's side rather than
/// recoverable runtime conditions; they must be surfaced loudly, never
/// silently corrected.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// `update_editing_item` was called while no item was under edit
    #[error("No item is currently under edit")]
    NoItemUnderEdit,

    /// `update_editing_item` was called for an item other than the one
    /// under edit
    #[error("Cannot change item {actual}: item under edit is {expected}")]
    EditTargetMismatch { expected: Uuid, actual: Uuid },
}
