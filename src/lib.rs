pub mod bind;
pub mod error;
pub mod inifile;
pub mod parse;
pub mod write;

pub use bind::{Binder, SectionBinder};
pub use error::Error;
pub use inifile::{COMMON_SECTION, IniFile};
pub use parse::{load_ini, parse_ini};
pub use write::write_ini;
