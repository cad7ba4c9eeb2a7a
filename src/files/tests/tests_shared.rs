//! Shared-handle tests for [`SharedFiles`].
//!
//! Coverage:
//! - cloning a handle shares the record and bumps the handle count
//! - dropping handles releases them one at a time
//! - `make_mut` on a sole handle mutates in place
//! - `make_mut` with live readers detaches (clone-on-write)
//! - readers on other threads see a stable record

#[cfg(test)]
mod tests {
    use crate::files::SharedFiles;
    use crate::files::tests::helpers::{VIM_ID, vim_paths, vim_record};
    use std::thread;

    #[test]
    fn clone_shares_record() {
        let a = vim_record().into_shared();
        let b = a.clone();

        assert!(a.ptr_eq(&b));
        assert_eq!(a.handle_count(), 2);
        assert_eq!(b.files(), vim_paths().as_slice());

        drop(b);
        assert_eq!(a.handle_count(), 1);
    }

    #[test]
    fn make_mut_on_sole_handle_mutates_in_place() {
        let mut shared = SharedFiles::from(vim_record());
        let before = &*shared as *const _;

        shared.make_mut().set_files(["/usr/bin/vi"]);

        assert_eq!(&*shared as *const _, before);
        assert_eq!(shared.files(), ["/usr/bin/vi"]);
    }

    /// # Scenario
    /// A writer mutates a record while a reader still holds a handle.
    ///
    /// # Actions
    /// 1. Share a populated record and clone a reader handle.
    /// 2. Replace the writer's package id and file list via `make_mut`.
    ///
    /// # Expected behavior
    /// The writer is detached from the reader; the reader still sees
    /// the original record and both handles now count one.
    #[test]
    fn make_mut_with_reader_copies_on_write() {
        let mut writer = vim_record().into_shared();
        let reader = writer.clone();

        let record = writer.make_mut();
        record.set_package_id(Some("vim-minimal;7.2;x86_64;fedora"));
        record.clear_files();

        assert!(!writer.ptr_eq(&reader));
        assert_eq!(writer.handle_count(), 1);
        assert_eq!(reader.handle_count(), 1);

        assert_eq!(reader.package_id(), Some(VIM_ID));
        assert_eq!(reader.files().len(), 3);
        assert_eq!(writer.package_id(), Some("vim-minimal;7.2;x86_64;fedora"));
        assert!(writer.files().is_empty());
    }

    #[test]
    fn into_inner_returns_record() {
        let shared = vim_record().into_shared();
        let other = shared.clone();

        // Another handle is alive, so this copies.
        let record = shared.into_inner();
        assert_eq!(record, *other);

        // Sole handle, so this moves.
        assert_eq!(other.into_inner(), record);
    }

    #[test]
    fn readers_on_other_threads() {
        let shared = vim_record().into_shared();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let reader = shared.clone();
                thread::spawn(move || reader.files().join(":"))
            })
            .collect();

        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                "/usr/bin/vim:/usr/bin/vimdiff:/usr/share/man/man1/vim.1.gz"
            );
        }
        assert_eq!(shared.handle_count(), 1);
    }
}
