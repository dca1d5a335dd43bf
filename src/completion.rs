use regex::Regex;
use std::sync::OnceLock;

/// Start of a JavaScript identifier
fn js_identifier() -> &'static Regex {
    static JS_ID: OnceLock<Regex> = OnceLock::new();
    JS_ID.get_or_init(|| {
        Regex::new(r"^[_$a-zA-Z\x{00FF}-\x{FFFF}][_$a-zA-Z0-9\x{00FF}-\x{FFFF}]*")
            .expect("identifier pattern is valid")
    })
}

/// Whether the text left of the cursor asks for members of an object.
///
/// `Instance.`, `Instance.fooba` and `Instance.foobar.alic` do;
/// `Inst` does not.
pub fn is_member_completion(line: &str) -> bool {
    if line.ends_with('.') {
        return true;
    }

    match line.rsplit_once('.') {
        Some((_, partial)) => js_identifier().is_match(partial),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_dot() {
        assert!(is_member_completion("Instance."));
        assert!(is_member_completion("  this.items."));
        assert!(is_member_completion("."));
    }

    #[test]
    fn test_partial_member() {
        assert!(is_member_completion("Instance.fooba"));
        assert!(is_member_completion("Instance.foobar.alic"));
        assert!(is_member_completion("obj.$el"));
        assert!(is_member_completion("obj._private"));
    }

    #[test]
    fn test_not_member() {
        assert!(!is_member_completion("Inst"));
        assert!(!is_member_completion(""));
        assert!(!is_member_completion("x = 1.5"));
        assert!(!is_member_completion("foo. bar"));
    }

    #[test]
    fn test_unicode_identifier() {
        assert!(is_member_completion("obj.ÿber"));
        assert!(is_member_completion("obj.日本"));
    }
}
