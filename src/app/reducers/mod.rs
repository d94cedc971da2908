mod commands;
mod form;
mod shell;

pub use commands::reduce_commands;
pub use form::reduce_form;
pub use shell::reduce_shell;
