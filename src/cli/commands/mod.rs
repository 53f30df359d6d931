pub mod codes;
pub mod info;
pub mod list;
pub mod remove;
pub mod serve;

pub use codes::{cmd_codes_list, cmd_codes_seed};
pub use info::cmd_resume_info;
pub use list::cmd_list_resumes;
pub use remove::cmd_remove_resume;
pub use serve::cmd_serve;
