//! Git operations as subprocess calls
//!
//! Every operation shells out to the `git` binary with an explicit working
//! directory; nothing here touches the process-wide current directory.

mod clone;
mod init;
mod push;

pub use clone::{check_git_available, clone_template, clone_to_temp};
pub use init::init_repository;
pub use push::{push_to_origin, remote_url};
