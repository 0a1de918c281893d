//! File-system checks.
//!
//! These query the file system synchronously on every evaluation. Any I/O
//! error while probing counts as "does not hold".

use std::fs;
use std::path::Path;

use crate::foundation::{Builtin, CheckKey};

fn path_exists<P: AsRef<Path> + ?Sized>(path: &P) -> bool {
    path.as_ref().exists()
}

fn is_file<P: AsRef<Path> + ?Sized>(path: &P) -> bool {
    path.as_ref().is_file()
}

fn is_dir<P: AsRef<Path> + ?Sized>(path: &P) -> bool {
    path.as_ref().is_dir()
}

fn is_readable<P: AsRef<Path> + ?Sized>(path: &P) -> bool {
    let path = path.as_ref();
    if path.is_dir() {
        fs::read_dir(path).is_ok()
    } else {
        fs::File::open(path).is_ok()
    }
}

fn is_writable<P: AsRef<Path> + ?Sized>(path: &P) -> bool {
    fs::metadata(path.as_ref()).is_ok_and(|meta| !meta.permissions().readonly())
}

/// The path exists.
#[must_use]
pub fn exists<P: AsRef<Path> + ?Sized>() -> Builtin<fn(&P) -> bool> {
    Builtin::predicate(CheckKey::EXISTS, path_exists::<P>)
}

/// The path is an existing regular file.
#[must_use]
pub fn file<P: AsRef<Path> + ?Sized>() -> Builtin<fn(&P) -> bool> {
    Builtin::predicate(CheckKey::FILE, is_file::<P>)
}

/// The path is an existing directory.
#[must_use]
pub fn directory<P: AsRef<Path> + ?Sized>() -> Builtin<fn(&P) -> bool> {
    Builtin::predicate(CheckKey::DIRECTORY, is_dir::<P>)
}

/// The path can be opened for reading (listed, for directories).
#[must_use]
pub fn readable<P: AsRef<Path> + ?Sized>() -> Builtin<fn(&P) -> bool> {
    Builtin::predicate(CheckKey::READABLE, is_readable::<P>)
}

/// The path exists and is not read-only.
#[must_use]
pub fn writable<P: AsRef<Path> + ?Sized>() -> Builtin<fn(&P) -> bool> {
    Builtin::predicate(CheckKey::WRITABLE, is_writable::<P>)
}
