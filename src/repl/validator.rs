use reedline::{ValidationResult, Validator};

/// Continue lines while brackets or a string are left open
///
/// Anything balanced is submitted as-is, so that malformed commands reach
/// the parser and report their error instead of waiting for more input.
///
pub struct BracketValidator;

impl Validator for BracketValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        if is_unfinished(line) {
            ValidationResult::Incomplete
        } else {
            ValidationResult::Complete
        }
    }
}

pub fn is_unfinished(line: &str) -> bool {
    let mut depth = 0_i32;
    let mut in_string = false;
    let mut in_comment = false;

    for c in line.chars() {
        match c {
            '\n' => in_comment = false,
            _ if in_comment => (),
            '"' => in_string = !in_string,
            _ if in_string => (),
            '#' => in_comment = true,
            '(' | '[' => depth += 1,
            ')' | ']' => depth -= 1,
            _ => (),
        }
    }

    in_string || depth > 0
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn balanced() {
        assert!(!is_unfinished("m[1, c(2, 3)]"));
        assert!(!is_unfinished("x[[1]]"));
        assert!(!is_unfinished("x[1]]"));
    }

    #[test]
    fn open_brackets() {
        assert!(is_unfinished("m[1, c(2,"));
        assert!(is_unfinished("x[[1]"));
    }

    #[test]
    fn strings_and_comments() {
        assert!(is_unfinished("x[\"a"));
        assert!(!is_unfinished("x[\"(\"]"));
        assert!(!is_unfinished("x[1] # (unbalanced"));
    }
}
