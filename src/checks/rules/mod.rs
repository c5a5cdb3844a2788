//! Built-in Beman Standard checks.
//!
//! Each check enforces exactly one rule of the standard and is registered
//! in [`CheckRegistry::with_builtins`](crate::checks::CheckRegistry::with_builtins).

pub mod directory;
pub mod license;
pub mod license_id;
pub mod readme;
pub mod repository;
pub mod toplevel;

pub use directory::DirectoryInterfaceHeadersCheck;
pub use license::LicenseApacheLlvmCheck;
pub use license_id::FileLicenseIdCheck;
pub use readme::{ReadmeBadgesCheck, ReadmeTitleCheck};
pub use repository::RepositoryNameCheck;
pub use toplevel::{ToplevelCmakeCheck, ToplevelLicenseCheck, ToplevelReadmeCheck};
