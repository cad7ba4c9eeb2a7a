use crate::files::Files;
use crate::source::Role;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber controlled by `RUST_LOG` env var.
/// Safe to call multiple times; only the first call takes effect.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub const VIM_ID: &str = "vim-enhanced;7.2.148-1.fc11;x86_64;fedora";

pub fn vim_paths() -> Vec<&'static str> {
    vec![
        "/usr/bin/vim",
        "/usr/bin/vimdiff",
        "/usr/share/man/man1/vim.1.gz",
    ]
}

/// A fully populated record, as a `get-files` transaction would emit it.
pub fn vim_record() -> Files {
    init_tracing();
    let mut record = Files::new();
    record.set_package_id(Some(VIM_ID));
    record.set_files(vim_paths());
    record.set_role(Role::GetFiles);
    record.set_transaction_id(Some("/17_bacbdacc_data"));
    record
}
