use crate::utils::error::{InputProblem, Result, RuleError};

/// Guard and palindrome check over optional text.
pub struct StringRule;

impl StringRule {
    /// Fails with `InvalidInput` when the text is absent or blank after trimming.
    pub fn require_non_blank(input: Option<&str>) -> Result<()> {
        Self::non_blank_text(input).map(|_| ())
    }

    /// Whitespace is removed and case is folded before comparing, so
    /// "take a cat" is checked as "takeacat".
    pub fn is_palindrome(input: Option<&str>) -> Result<bool> {
        let text = Self::non_blank_text(input)?;

        let cleaned: Vec<char> = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        Ok(cleaned.iter().eq(cleaned.iter().rev()))
    }

    fn non_blank_text(input: Option<&str>) -> Result<&str> {
        match input {
            None => Err(RuleError::InvalidInput {
                reason: InputProblem::Absent,
            }),
            Some(text) if text.trim().is_empty() => Err(RuleError::InvalidInput {
                reason: InputProblem::Blank,
            }),
            Some(text) => Ok(text),
        }
    }
}
