//! Filename transformations
//!
//! The language service and the editor disagree on slash direction and case
//! on Windows, so every map keyed by filename goes through [`filename2key`].

/// Returns the filename with forward slashes
pub fn filename2linux(filename: &str) -> String {
    filename.replace('\\', "/")
}

/// Returns the unified version of a filename, usable as a map key
pub fn filename2key(filename: &str) -> String {
    filename2linux(filename).to_lowercase()
}

/// Shortcut for [`filename2key`]
pub fn fn2k(filename: &str) -> String {
    filename2key(filename)
}

/// Shortcut for [`filename2linux`]
pub fn fn2l(filename: &str) -> String {
    filename2linux(filename)
}

/// Normalize the case of a path the way the OS compares them.
///
/// On Windows this lower-cases and turns forward slashes into backslashes;
/// everywhere else the path is returned unchanged.
pub fn normcase(filename: &str) -> String {
    if cfg!(windows) {
        filename.replace('/', "\\").to_lowercase()
    } else {
        filename.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename2linux() {
        assert_eq!(filename2linux(r"C:\proj\src\app.ts"), "C:/proj/src/app.ts");
        assert_eq!(filename2linux("/home/me/app.ts"), "/home/me/app.ts");
    }

    #[test]
    fn test_filename2key_is_idempotent() {
        let once = filename2key(r"C:\Proj\Src\App.ts");
        assert_eq!(once, "c:/proj/src/app.ts");
        assert_eq!(filename2key(&once), once);
    }

    #[test]
    fn test_equivalent_spellings_share_a_key() {
        assert_eq!(
            fn2k(r"C:\Proj\lib.d.ts"),
            fn2k("c:/PROJ/LIB.D.TS")
        );
        assert_ne!(fn2k("/a/b.ts"), fn2k("/a/c.ts"));
    }

    #[test]
    fn test_shortcuts_match() {
        let name = r"D:\work\Main.ts";
        assert_eq!(fn2l(name), filename2linux(name));
        assert_eq!(fn2k(name), filename2key(name));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_normcase_is_identity_off_windows() {
        assert_eq!(normcase("/Tmp/File.TS"), "/Tmp/File.TS");
    }
}
