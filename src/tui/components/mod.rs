pub mod input;
pub mod status;
pub mod suggestion_popup;

pub use input::Input;
pub use status::StatusLines;
pub use suggestion_popup::SuggestionPopupWidget;
