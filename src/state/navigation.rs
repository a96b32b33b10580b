//! Navigation-related state types.

/// Specifying the different foci.
///
/// `Entry` routes keystrokes into the new-item input at the top of the
/// screen; `List` routes them into todo row navigation. While an item is
/// under edit, keystrokes bypass focus and go to the inline editor.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Entry,
    List,
}
