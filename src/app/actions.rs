//! Actions representing side effects on the host.
//!
//! The event handler returns a `Vec<Action>` after processing each event. Actions
//! cover what lies outside the widget's own markup; re-rendering the markup is
//! signalled separately by the handler's boolean.
//!
//! # Example
//!
//! ```rust
//! use cardgallery::app::{handle_event, Action, Event, GalleryState, Labels};
//! use cardgallery::{Columns, Record};
//!
//! let mut state = GalleryState::new(
//!     Some(vec![Record::from_pairs([("title", "Sword")])]),
//!     Columns::default(),
//!     Labels::default(),
//! );
//! let (_, actions) = handle_event(&mut state, &Event::ActivateCard(0));
//! assert_eq!(actions, vec![Action::LockScroll]);
//! ```

/// Host-level side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Suppress background page scroll (overlay just opened).
    LockScroll,

    /// Restore background page scroll (overlay just closed).
    UnlockScroll,
}
