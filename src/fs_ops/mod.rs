//! Filesystem operations used by the menus.
//! Everything returns `Result<_, FmError>` so callers can report and carry on.

mod copy;
mod create;
mod helpers;
mod list;
mod probe;
mod transfer;
mod util;
mod view;

pub use copy::safe_copy_and_rename;
pub use create::{create_directory, ensure_directory};
pub use helpers::io_error_with_help;
pub use list::{list_entries, ListItem, ListMode, Listing};
pub use probe::{exists, probe, PathKind};
pub use transfer::{TransferKind, TransferPlan, TransferRequest};
pub use view::{open_text, TextLines};
