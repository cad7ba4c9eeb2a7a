//! # Files Module
//!
//! A [`Files`] record pairs one package identifier with the ordered list
//! of absolute paths that package owns. Records are produced by a
//! `get-files` transaction and typically collected into a result list or
//! handed around between client components.
//!
//! ## Ownership
//!
//! Every setter deep-copies its input; a record never aliases a
//! caller-supplied buffer. Getters hand out borrowed views.
//!
//! Once a record is complete it is shared through [`SharedFiles`], a
//! reference-counted handle. Readers clone the handle, not the record.
//! A holder that needs to change a shared record goes through
//! [`SharedFiles::make_mut`], which copies the record first if any other
//! handle is still alive, so no reader ever observes a mutation.
//!
//! ## Example
//!
//! ```rust
//! use pk_support::{Files, Role};
//!
//! let record = Files::builder()
//!     .package_id("vim;7.2;x86_64;fedora")
//!     .files(["/usr/bin/vim", "/usr/share/vim/vimrc"])
//!     .role(Role::GetFiles)
//!     .build_shared();
//!
//! let reader = record.clone();
//! assert_eq!(reader.files().len(), 2);
//! assert_eq!(reader.package_id(), Some("vim;7.2;x86_64;fedora"));
//! ```

// ------------------------------------------------------------------------------------------------
// Unit tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests;

// ------------------------------------------------------------------------------------------------
// Includes
// ------------------------------------------------------------------------------------------------

use std::ops::Deref;
use std::sync::Arc;

use tracing::trace;

use crate::package_id::{self, PackageIdError, PackageIdParts};
use crate::source::{Role, Source};

// ------------------------------------------------------------------------------------------------
// Files record
// ------------------------------------------------------------------------------------------------

/// The files owned by a single package.
///
/// Both fields start unset. An unset file list reads back as an empty
/// slice; use [`Files::has_files`] to tell "unset" from "set but empty".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Files {
    /// Transaction header inherited by every result object.
    source: Source,

    /// Identifier of the owning package, stored verbatim.
    package_id: Option<String>,

    /// Absolute paths in the order they were supplied.
    files: Option<Vec<String>>,
}

impl Files {
    /// Creates a record with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a [`FilesBuilder`].
    pub fn builder() -> FilesBuilder {
        FilesBuilder::default()
    }

    // --------------------------------------------------------------------------------------------
    // Package identifier
    // --------------------------------------------------------------------------------------------

    /// Returns the package identifier, if one has been set.
    pub fn package_id(&self) -> Option<&str> {
        self.package_id.as_deref()
    }

    /// Replaces the package identifier with a copy of `id`.
    ///
    /// The identifier is not validated. `None` clears it.
    pub fn set_package_id(&mut self, id: Option<&str>) {
        trace!(package_id = ?id, "files: set package id");
        self.package_id = id.map(str::to_owned);
    }

    /// Splits the stored identifier into its fields.
    ///
    /// Returns `None` when no identifier is set.
    pub fn package_id_parts(&self) -> Option<Result<PackageIdParts<'_>, PackageIdError>> {
        self.package_id.as_deref().map(package_id::split)
    }

    // --------------------------------------------------------------------------------------------
    // File list
    // --------------------------------------------------------------------------------------------

    /// Returns the file list, or an empty slice if it has not been set.
    pub fn files(&self) -> &[String] {
        self.files.as_deref().unwrap_or_default()
    }

    /// Returns `true` once a file list has been set, even an empty one.
    pub fn has_files(&self) -> bool {
        self.files.is_some()
    }

    /// Replaces the file list with a copy of `files`.
    ///
    /// Order and duplicates are preserved. An empty iterator stores an
    /// empty list.
    pub fn set_files<I, S>(&mut self, files: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let files: Vec<String> = files
            .into_iter()
            .map(|path| path.as_ref().to_owned())
            .collect();
        trace!(count = files.len(), "files: set file list");
        self.files = Some(files);
    }

    /// Drops the file list, returning the field to its unset state.
    pub fn clear_files(&mut self) {
        trace!("files: clear file list");
        self.files = None;
    }

    // --------------------------------------------------------------------------------------------
    // Transaction header
    // --------------------------------------------------------------------------------------------

    /// The transaction header.
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Role of the transaction that emitted the record.
    pub fn role(&self) -> Role {
        self.source.role
    }

    /// Replaces the transaction role.
    pub fn set_role(&mut self, role: Role) {
        self.source.role = role;
    }

    /// Transaction id, if one has been set.
    pub fn transaction_id(&self) -> Option<&str> {
        self.source.transaction_id.as_deref()
    }

    /// Replaces the transaction id with a copy of `tid`. `None` clears it.
    pub fn set_transaction_id(&mut self, tid: Option<&str>) {
        self.source.transaction_id = tid.map(str::to_owned);
    }

    /// Moves the record behind a [`SharedFiles`] handle.
    pub fn into_shared(self) -> SharedFiles {
        SharedFiles::from(self)
    }
}

// ------------------------------------------------------------------------------------------------
// Builder
// ------------------------------------------------------------------------------------------------

/// Fills a [`Files`] record in one expression.
///
/// Unset builder fields stay unset in the finished record.
#[derive(Debug, Default)]
#[must_use]
pub struct FilesBuilder {
    inner: Files,
}

impl FilesBuilder {
    pub fn package_id(mut self, id: &str) -> Self {
        self.inner.set_package_id(Some(id));
        self
    }

    pub fn files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.set_files(files);
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.inner.set_role(role);
        self
    }

    pub fn transaction_id(mut self, tid: &str) -> Self {
        self.inner.set_transaction_id(Some(tid));
        self
    }

    /// Returns the finished record.
    pub fn build(self) -> Files {
        self.inner
    }

    /// Returns the finished record behind a shared handle.
    pub fn build_shared(self) -> SharedFiles {
        self.inner.into_shared()
    }
}

// ------------------------------------------------------------------------------------------------
// Shared handle
// ------------------------------------------------------------------------------------------------

/// Reference-counted, read-only handle to a [`Files`] record.
///
/// Cloning the handle is cheap and never copies the record. The record
/// is released when the last handle is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedFiles {
    inner: Arc<Files>,
}

impl SharedFiles {
    /// Returns a mutable reference to the record.
    ///
    /// If other handles point at the same record, it is copied first and
    /// this handle is detached from them.
    pub fn make_mut(&mut self) -> &mut Files {
        if Arc::strong_count(&self.inner) > 1 {
            trace!(
                handles = Arc::strong_count(&self.inner),
                "files: copy-on-write detach"
            );
        }
        Arc::make_mut(&mut self.inner)
    }

    /// Returns `true` if both handles point at the same record.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of live handles to this record.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Returns the record, copying it only if other handles are alive.
    pub fn into_inner(self) -> Files {
        Arc::unwrap_or_clone(self.inner)
    }
}

impl From<Files> for SharedFiles {
    fn from(files: Files) -> Self {
        Self {
            inner: Arc::new(files),
        }
    }
}

impl Deref for SharedFiles {
    type Target = Files;

    fn deref(&self) -> &Files {
        &self.inner
    }
}

impl AsRef<Files> for SharedFiles {
    fn as_ref(&self) -> &Files {
        &self.inner
    }
}
