/// System prompt sent with every review request.
///
/// The bolded headers requested here are the same labels the section
/// extractor looks for; the model is instructed, but not guaranteed, to use
/// them.
pub const REVIEW_SYSTEM_PROMPT: &str = "\
You are a coding assistant. Analyze the code and:
1. Identify the programming language.
2. Check for errors, bugs, or bad practices.
3. Suggest improvements or optimizations.
4. Provide corrected or optimized code if needed.
5. Explain the changes clearly.
6. If the code is executable, simulate and show the expected OUTPUT.

Respond in this format:

**Corrected Code:**
```
<corrected code>
```

**Suggestions:**
<suggestions for improvements>

**Explanations:**
<explanation of changes>

**Expected Output:**
<expected output of the code>";

/// Build the user turn for a review request.
///
/// The snippet is sent as-is under a `Code:` banner. Language hints are
/// advisory client-side state and are never folded into the prompt.
pub fn build_user_message(code: &str) -> String {
    format!("Code:\n\n{code}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::REVIEW_LABELS;

    #[test]
    fn test_system_prompt_requests_every_review_label() {
        for label in REVIEW_LABELS {
            assert!(
                REVIEW_SYSTEM_PROMPT.contains(&format!("**{label}:**")),
                "prompt must request the {label} header"
            );
        }
    }

    #[test]
    fn test_user_message_wraps_code_under_banner() {
        assert_eq!(
            build_user_message("def foo(): pass"),
            "Code:\n\ndef foo(): pass"
        );
    }

    #[test]
    fn test_user_message_preserves_snippet_verbatim() {
        let snippet = "line one\n\tline two\n";
        assert_eq!(build_user_message(snippet), format!("Code:\n\n{snippet}"));
    }
}
