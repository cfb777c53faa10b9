pub mod dialogs;
pub mod form;
pub mod statusbar;
pub mod toast;
