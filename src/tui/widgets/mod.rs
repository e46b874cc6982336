//! Reusable widgets for the TUI
//!
//! Contains custom widgets for common UI elements

pub mod error_dialog;
pub mod input;
pub mod notification;

pub use error_dialog::{error_dialog_area, ErrorDialog, ErrorInfo};
pub use input::{render_input_with_cursor, TextField};
pub use notification::{
    notification_area, Notification, NotificationQueue, NotificationType, NotificationWidget,
};
