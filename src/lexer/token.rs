use serde::{Deserialize, Serialize};

/// A single classified symbol from the input stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `'`
    Quote,
    /// Upper-cased run of name characters
    Name(String),
    /// Space or tab
    Space,
    /// Line break (`\n` or `\r`)
    EndOfLine,
    /// Input is exhausted
    EndOfFile,
    /// Unsupported control character
    Invalid(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_form() {
        let json = serde_json::to_string(&Token::Name("CAR".to_string())).unwrap();
        assert_eq!(json, r#"{"Name":"CAR"}"#);
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Token::Name("CAR".to_string()));
    }
}
