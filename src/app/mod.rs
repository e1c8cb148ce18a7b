//! Application layer coordinating state, events, and actions.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → (render?, Actions)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Host side effects emitted by the event handler
//! - [`filter`]: Substring search over records
//! - [`handler`]: Event processing and state transitions
//! - [`image`]: Card image source with placeholder fallback
//! - [`overlay`]: Detail overlay state machine
//! - [`state`]: Gallery state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use cardgallery::app::{handle_event, Event, GalleryState, Labels};
//! use cardgallery::Columns;
//!
//! let mut state = GalleryState::new(Some(vec![]), Columns::default(), Labels::default());
//! let (render, actions) = handle_event(&mut state, &Event::Input("sp".into()));
//! assert!(render && actions.is_empty());
//! ```

pub mod actions;
pub mod filter;
pub mod handler;
pub mod image;
pub mod overlay;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event, CANCEL_KEY};
pub use overlay::{Overlay, Snapshot};
pub use state::{Card, DataSource, GalleryState, Labels};
