pub mod cancel;
pub mod completion;
pub mod config;
pub mod debouncer;
pub mod debug;
pub mod prefix;
pub mod process;
pub mod utils;
pub mod view;

pub use cancel::{catch_cancel, CommandError, CommandResult};
pub use completion::is_member_completion;
pub use debouncer::{debounce, DebounceTimer, Debouncer};
pub use debug::{debug, Classification};
pub use prefix::{get_prefix, MemberKind};
pub use utils::files::{file_exists, hash_file, read_and_decode_json_file, read_file};
pub use utils::paths::{filename2key, filename2linux, fn2k, fn2l};
