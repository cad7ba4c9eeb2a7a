//! # Transaction Source
//!
//! Every result object emitted by a transaction carries the same small
//! header: the [`Role`] the transaction was performing and the id of the
//! transaction itself. [`Source`] holds that header and is embedded in
//! result records such as [`Files`](crate::files::Files).
//!
//! Roles have a canonical kebab-case text form (`get-files`,
//! `install-packages`, ...) used by daemons and clients alike; [`Role`]
//! converts to and from it.

// ------------------------------------------------------------------------------------------------
// Unit tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests;

// ------------------------------------------------------------------------------------------------
// Includes
// ------------------------------------------------------------------------------------------------

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ------------------------------------------------------------------------------------------------
// Error Types
// ------------------------------------------------------------------------------------------------

/// Returned when text does not name a known [`Role`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown transaction role: {0:?}")]
pub struct RoleParseError(pub String);

// ------------------------------------------------------------------------------------------------
// Role
// ------------------------------------------------------------------------------------------------

/// The kind of work a transaction performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Unknown,
    Cancel,
    GetDepends,
    GetDetails,
    GetFiles,
    GetPackages,
    GetRepoList,
    GetRequires,
    GetUpdateDetail,
    GetUpdates,
    InstallFiles,
    InstallPackages,
    InstallSignature,
    RefreshCache,
    RemovePackages,
    RepoEnable,
    RepoSetData,
    Resolve,
    Rollback,
    SearchDetails,
    SearchFile,
    SearchGroup,
    SearchName,
    UpdatePackages,
    UpdateSystem,
    WhatProvides,
    AcceptEula,
    DownloadPackages,
    GetDistroUpgrades,
    GetCategories,
    GetOldTransactions,
    SimulateInstallFiles,
    SimulateInstallPackages,
    SimulateRemovePackages,
    SimulateUpdatePackages,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Role; 35] = [
        Role::Unknown,
        Role::Cancel,
        Role::GetDepends,
        Role::GetDetails,
        Role::GetFiles,
        Role::GetPackages,
        Role::GetRepoList,
        Role::GetRequires,
        Role::GetUpdateDetail,
        Role::GetUpdates,
        Role::InstallFiles,
        Role::InstallPackages,
        Role::InstallSignature,
        Role::RefreshCache,
        Role::RemovePackages,
        Role::RepoEnable,
        Role::RepoSetData,
        Role::Resolve,
        Role::Rollback,
        Role::SearchDetails,
        Role::SearchFile,
        Role::SearchGroup,
        Role::SearchName,
        Role::UpdatePackages,
        Role::UpdateSystem,
        Role::WhatProvides,
        Role::AcceptEula,
        Role::DownloadPackages,
        Role::GetDistroUpgrades,
        Role::GetCategories,
        Role::GetOldTransactions,
        Role::SimulateInstallFiles,
        Role::SimulateInstallPackages,
        Role::SimulateRemovePackages,
        Role::SimulateUpdatePackages,
    ];

    /// Canonical text form of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Unknown => "unknown",
            Role::Cancel => "cancel",
            Role::GetDepends => "get-depends",
            Role::GetDetails => "get-details",
            Role::GetFiles => "get-files",
            Role::GetPackages => "get-packages",
            Role::GetRepoList => "get-repo-list",
            Role::GetRequires => "get-requires",
            Role::GetUpdateDetail => "get-update-detail",
            Role::GetUpdates => "get-updates",
            Role::InstallFiles => "install-files",
            Role::InstallPackages => "install-packages",
            Role::InstallSignature => "install-signature",
            Role::RefreshCache => "refresh-cache",
            Role::RemovePackages => "remove-packages",
            Role::RepoEnable => "repo-enable",
            Role::RepoSetData => "repo-set-data",
            Role::Resolve => "resolve",
            Role::Rollback => "rollback",
            Role::SearchDetails => "search-details",
            Role::SearchFile => "search-file",
            Role::SearchGroup => "search-group",
            Role::SearchName => "search-name",
            Role::UpdatePackages => "update-packages",
            Role::UpdateSystem => "update-system",
            Role::WhatProvides => "what-provides",
            Role::AcceptEula => "accept-eula",
            Role::DownloadPackages => "download-packages",
            Role::GetDistroUpgrades => "get-distro-upgrades",
            Role::GetCategories => "get-categories",
            Role::GetOldTransactions => "get-old-transactions",
            Role::SimulateInstallFiles => "simulate-install-files",
            Role::SimulateInstallPackages => "simulate-install-packages",
            Role::SimulateRemovePackages => "simulate-remove-packages",
            Role::SimulateUpdatePackages => "simulate-update-packages",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| RoleParseError(s.to_owned()))
    }
}

// ------------------------------------------------------------------------------------------------
// Source
// ------------------------------------------------------------------------------------------------

/// Header shared by every transaction result object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Source {
    /// Role of the transaction that emitted the result.
    pub role: Role,

    /// Daemon-assigned transaction id, if known.
    pub transaction_id: Option<String>,
}

impl Source {
    /// Creates a header with an unknown role and no transaction id.
    pub fn new() -> Self {
        Self::default()
    }
}
