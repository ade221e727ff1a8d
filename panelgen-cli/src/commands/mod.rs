//! CLI command implementations

pub mod generate;
pub mod inspect;
pub mod serve;
pub mod templates;

pub use generate::GenerateCommand;
pub use inspect::InspectCommand;
pub use serve::ServeCommand;
pub use templates::TemplatesCommand;
