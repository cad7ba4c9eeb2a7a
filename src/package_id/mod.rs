//! Package identifier helpers.
//!
//! A package identifier is the string `name;version;arch;data`. Only the
//! name is mandatory; the other three fields may be empty (e.g.
//! `"gnome-power-manager;;;"`). Records store identifiers verbatim and
//! never call into this module on assignment; these helpers exist for
//! callers that want to look inside one.


use thiserror::Error;

/// Separator between identifier fields.
pub const SEPARATOR: char = ';';

/// Reasons an identifier cannot be split.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackageIdError {
    /// The identifier did not contain exactly four fields.
    #[error("expected 4 fields in package id {id:?}, found {found}")]
    WrongFieldCount { id: String, found: usize },

    /// The name field was empty.
    #[error("package id {0:?} has an empty name")]
    EmptyName(String),

    /// A field passed to [`build`] contained the separator.
    #[error("package id field {field} contains ';': {value:?}")]
    SeparatorInField { field: &'static str, value: String },
}

/// Borrowed view of the four identifier fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageIdParts<'a> {
    pub name: &'a str,
    pub version: &'a str,
    pub arch: &'a str,
    pub data: &'a str,
}

/// Splits `id` into its four fields.
///
/// # Errors
///
/// Returns [`PackageIdError::WrongFieldCount`] unless there are exactly
/// four fields, and [`PackageIdError::EmptyName`] if the first is empty.
pub fn split(id: &str) -> Result<PackageIdParts<'_>, PackageIdError> {
    let fields: Vec<&str> = id.split(SEPARATOR).collect();
    let &[name, version, arch, data] = fields.as_slice() else {
        return Err(PackageIdError::WrongFieldCount {
            id: id.to_owned(),
            found: fields.len(),
        });
    };
    if name.is_empty() {
        return Err(PackageIdError::EmptyName(id.to_owned()));
    }
    Ok(PackageIdParts {
        name,
        version,
        arch,
        data,
    })
}

/// Joins the four fields into an identifier that [`split`] accepts.
///
/// # Errors
///
/// Returns [`PackageIdError::EmptyName`] if `name` is empty and
/// [`PackageIdError::SeparatorInField`] if any field contains `;`.
pub fn build(
    name: &str,
    version: &str,
    arch: &str,
    data: &str,
) -> Result<String, PackageIdError> {
    let fields = [
        ("name", name),
        ("version", version),
        ("arch", arch),
        ("data", data),
    ];
    if let Some(&(field, value)) = fields
        .iter()
        .find(|(_, value)| value.contains(SEPARATOR))
    {
        return Err(PackageIdError::SeparatorInField {
            field,
            value: value.to_owned(),
        });
    }
    let id = [name, version, arch, data].join(";");
    if name.is_empty() {
        return Err(PackageIdError::EmptyName(id));
    }
    Ok(id)
}

/// Returns `true` if `id` splits cleanly.
pub fn check(id: &str) -> bool {
    split(id).is_ok()
}
