use crate::LanguageRules;

pub(crate) fn rules() -> LanguageRules {
    language! {
        "keyword" => words![
            "auto", "break", "case", "char", "const", "continue", "default", "do",
            "double", "else", "enum", "extern", "float", "for", "goto", "if", "int",
            "long", "register", "return", "short", "signed", "sizeof", "static",
            "struct", "switch", "typedef", "union", "unsigned", "void", "volatile",
            "while",
        ],
        "separator" => words![
            "~", "}", "||", "|=", "|", "{", "^=", "^", "]", "[", "?", ">>=", ">>", ">=",
            ">", "==", "=", "<=", "<<=", "<<", "<", ";", ":", "/=", "/", "...", ".",
            "->", "-=", "--", "-", ",", "+=", "++", "+", "*=", "*", ")", "(", "&=",
            "&&", "&", "%=", "%", "##", "#", "!=", "!",
        ],
        "type" => words![
            "auto", "char", "const", "double", "extern", "float", "int", "int16_t",
            "int32_t", "int64_t", "int8_t", "long", "register", "short", "signed",
            "uint16_t", "uint32_t", "uint64_t", "uint8_t", "unsigned", "volatile",
        ],
        "value" => vec![
            // string literal
            pat!(r#""(?:\\.|[^"\\])*""#),
            // char literal
            pat!(r"'(?:\\.|[^'\\])*'"),
            // floating point: 1.5, .5, 1.5e10
            pat!(r"(?:\b\d+\.\d+|\.\d+)(?:E[+-]?\d+)?\b", CASE_INSENSITIVE),
            // floating point: 1e10, 1.e10, 1.
            pat!(r"\b\d+(?:\.?E[+-]?\d+\b|\.)", CASE_INSENSITIVE),
            // decimal integer
            pat!(r"\b[1-9]\d*\b"),
            // hexadecimal integer
            pat!(r"\b0x[0-9a-f]+\b", CASE_INSENSITIVE),
            // octal integer
            pat!(r"\b0[0-7]*\b"),
        ],
        "comment" => vec![
            pat!(r"/\*[\s\S]*?\*/"),
            pat!(r"//.*"),
            // pre-processor line, with backslash continuations
            pat!(r"#.*(?:\\\n.*)*"),
        ],
    }
}
