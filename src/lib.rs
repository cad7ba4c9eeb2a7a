//! # pk-support
//!
//! Small building blocks shared by a package-management client:
//!
//! - [`Files`]: the files owned by one package, as reported by a
//!   `get-files` transaction, together with the [`Source`] header every
//!   transaction result carries. Finished records are passed around as
//!   [`SharedFiles`] handles.
//! - [`SelfTest`]: a counter-and-report harness for hand-written self
//!   tests, filtered by [`Class`] and [`Level`].
//! - [`package_id`]: helpers for the `name;version;arch;data` package
//!   identifier layout.
//!
//! ## Quick Start
//!
//! ```rust
//! use pk_support::{Class, Files, SelfTest, SelfTestConfig};
//!
//! let mut files = Files::new();
//! files.set_package_id(Some("powertop;1.8-1.fc8;i386;fedora"));
//! files.set_files(["/usr/bin/powertop", "/usr/share/man/man1/powertop.1.gz"]);
//!
//! let mut test = SelfTest::with_sink(Vec::new());
//! test.init(SelfTestConfig::default());
//! if test.start("PkFiles", Class::Auto) {
//!     test.title("file count");
//!     if files.files().len() == 2 {
//!         test.success(None);
//!     } else {
//!         test.failed(Some("wrong file count"));
//!     }
//!     test.end();
//! }
//! assert_eq!(test.finish(), 0);
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (setter traces, ignored-call
//! warnings, report sink errors) and never installs a subscriber.

pub mod files;
pub mod package_id;
pub mod selftest;
pub mod source;

pub use files::{Files, FilesBuilder, SharedFiles};
pub use package_id::{PackageIdError, PackageIdParts};
pub use selftest::{
    Class, EXIT_FAILURE, EXIT_SUCCESS, Failure, Level, SelfTest, SelfTestConfig, SelfTestError,
    State, Summary,
};
pub use source::{Role, RoleParseError, Source};
