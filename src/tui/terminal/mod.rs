mod lifecycle;

pub use lifecycle::TypeaheadTerminal;
pub use lifecycle::init_terminal;
pub use lifecycle::restore_terminal;
