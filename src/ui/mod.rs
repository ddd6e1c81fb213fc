/// UI layer: picker rendering and the modal overlays, kept out of the
/// application logic so the latter stays testable without a terminal.
pub mod helpers;
pub mod modals;
pub mod render;

pub use helpers::centered_rect;
pub use modals::{render_confirm_modal, render_path_input_modal};
pub use render::{render_footer, render_header, render_picker, render_status_line};
