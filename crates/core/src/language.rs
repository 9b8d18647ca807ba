use regex::Regex;

/// Ordered lexical signatures for language detection.
///
/// Each entry pairs a language id with a regex matching constructs common in
/// that language. The order is a contract, not an accident: signatures are
/// probed top to bottom and the FIRST match wins, so broad signatures late in
/// the list can be shadowed by earlier ones (a Go `var` declaration is
/// claimed by the JavaScript signature, for instance). Detection is an
/// advisory UX hint only.
pub const LANGUAGE_SIGNATURES: [(&str, &str); 10] = [
    (
        "python",
        r"(?m)\bdef\s+\w+\s*\(.*\):|import\s+\w+|from\s+\w+\s+import|print\s*\(|if\s+.*:\s*$|:\s*$",
    ),
    (
        "javascript",
        r"\bfunction\b|\bconst\b|\blet\b|\bvar\b|\b=>\b|document\.|window\.|console\.log|import\s+.*\bfrom\b|export\s+|class\s+\w+\s+extends\s+\w+",
    ),
    (
        "java",
        r"\bpublic\s+class\b|\bprivate\b|\bprotected\b|\bpackage\b|\bimport\s+java\.|void\s+main\(|System\.out|throws\s+\w+Exception",
    ),
    (
        "cpp",
        r"#include\s+<\w+>|\bstd::\b|\bvoid\s+\w+\s*\(|\bint\s+main\(|::\s*\w+|namespace\s+\w+",
    ),
    (
        "csharp",
        r"\bnamespace\s+\w+|\busing\s+\w+;|\bpublic\s+\w+\s+class\b|\bConsole\.Write|string\[\]\s+args",
    ),
    (
        "php",
        r"\b<\?php\b|\becho\b|\$\w+|->|\bfunction\s+\w+\s*\(.*\)\s*\{",
    ),
    (
        "ruby",
        r"\bdef\s+\w+\s*(?:\(.*\))?\s*\n|\bclass\s+\w+(?:\s+<\s+\w+)?|\bmodule\s+\w+|\battr_|\bputs\b|\brequire\b",
    ),
    ("go", r"\bvar\s+\w+\s+[*\w\[\]]+"),
    (
        "rust",
        r"\bfn\s+\w+\s*\(|\blet\s+mut\b|\buse\s+\w+::|::\w+|\bimpl\s+\w+\s+for\b|\bpub\s+\w+",
    ),
    (
        "swift",
        r"\bfunc\s+\w+\s*\(|\bvar\s+\w+\s*:\s*\w+|\blet\s+\w+\s*=|\bclass\s+\w+\s*\{|\bimport\s+\w+",
    ),
];

/// Language ids with their human-readable names, in detection precedence
/// order.
pub const LANGUAGE_NAMES: [(&str, &str); 10] = [
    ("python", "Python"),
    ("javascript", "JavaScript"),
    ("java", "Java"),
    ("cpp", "C++"),
    ("csharp", "C#"),
    ("php", "PHP"),
    ("ruby", "Ruby"),
    ("go", "Go"),
    ("rust", "Rust"),
    ("swift", "Swift"),
];

/// Guess the language of a code snippet from its lexical shape.
///
/// Probes [`LANGUAGE_SIGNATURES`] in order and returns the first match, or
/// `None` when nothing matches. No correctness guarantee.
pub fn detect_language(code: &str) -> Option<&'static str> {
    for (language, pattern) in LANGUAGE_SIGNATURES {
        let re = Regex::new(pattern).expect("signature table patterns are valid");
        if re.is_match(code) {
            return Some(language);
        }
    }

    None
}

/// Human-readable name for a language id, if it is one we know about.
pub fn display_name(id: &str) -> Option<&'static str> {
    LANGUAGE_NAMES
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_signature_compiles() {
        for (language, pattern) in LANGUAGE_SIGNATURES {
            assert!(
                Regex::new(pattern).is_ok(),
                "signature for {language} must compile"
            );
        }
    }

    #[test]
    fn test_python_function_definition() {
        assert_eq!(detect_language("def foo(): pass"), Some("python"));
    }

    #[test]
    fn test_python_wins_over_javascript_by_order() {
        // Both the python `import` signature and the javascript `const`
        // signature match; python is probed first.
        assert_eq!(
            detect_language("import os\nconst x = 1;"),
            Some("python")
        );
    }

    #[test]
    fn test_go_var_declaration_is_claimed_by_javascript() {
        // The Go signature is a subset of the javascript `var` rule, which
        // is probed earlier. Documented precedence quirk.
        assert_eq!(detect_language("var count int"), Some("javascript"));
    }

    #[test]
    fn test_javascript_arrow_free_snippet() {
        assert_eq!(
            detect_language("const add = function (a, b) { return a + b; }"),
            Some("javascript")
        );
    }

    #[test]
    fn test_java_class() {
        assert_eq!(
            detect_language("public class Main { }"),
            Some("java")
        );
    }

    #[test]
    fn test_cpp_include() {
        assert_eq!(
            detect_language("#include <iostream>\nint main() { return 0; }"),
            Some("cpp")
        );
    }

    #[test]
    fn test_rust_function() {
        assert_eq!(detect_language("fn main() {}"), Some("rust"));
    }

    #[test]
    fn test_ruby_puts() {
        assert_eq!(detect_language("puts \"hello\""), Some("ruby"));
    }

    #[test]
    fn test_plain_prose_matches_nothing() {
        assert_eq!(detect_language("hello world"), None);
    }

    #[test]
    fn test_empty_snippet_matches_nothing() {
        assert_eq!(detect_language(""), None);
    }

    #[test]
    fn test_display_name_lookup() {
        assert_eq!(display_name("cpp"), Some("C++"));
        assert_eq!(display_name("brainfuck"), None);
    }

    #[test]
    fn test_signature_and_name_tables_agree() {
        for (language, _) in LANGUAGE_SIGNATURES {
            assert!(display_name(language).is_some());
        }
    }
}
