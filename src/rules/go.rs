use crate::LanguageRules;

pub(crate) fn rules() -> LanguageRules {
    language! {
        "keyword" => words![
            "break", "default", "func", "interface", "select", "case", "defer", "go",
            "map", "struct", "chan", "else", "goto", "package", "switch", "const",
            "fallthrough", "if", "range", "type", "continue", "for", "import", "return",
            "var",
        ],
        "type" => words![
            "uintptr", "uint8", "uint64", "uint32", "uint16", "uint", "string", "int8",
            "int64", "int32", "int16", "int", "float64", "float32", "float",
            "complex64", "complex128", "complex", "byte",
        ],
        "separator" => words![
            "}", "||", "|=", "|", "{", "^=", "^", "]", "[", ">>=", ">>", ">=", ">",
            "==", "=", "<=", "<<=", "<<", "<-", "<", ";", ":=", ":", "/=", "/", "...",
            ".", "-=", "--", "-", ",", "+=", "++", "+", "*=", "*", ")", "(", "&^=", "&^",
            "&=", "&&", "&", "%=", "%", "!=", "!",
        ],
        "value" => vec![
            // interpreted string
            pat!(r#""(?:\\.|[^\\"])*""#),
            // rune
            pat!(r"'(?:\\.|[^\\'])+'"),
            // raw string
            pat!(r"`[^`]*`"),
            // integer (decimal, hex, octal, imaginary)
            pat!(r"\b(?:[1-9]\d*i?|0i?|0x[0-9a-f]+|0[0-7]+)\b", CASE_INSENSITIVE),
            // floating point: 1.5, .5, 1.5e10, 1.5i
            pat!(r"(?:\b\d+\.\d+|\.\d+)(?:E[+-]?\d+)?i?\b", CASE_INSENSITIVE),
            // floating point: 1e10, 1.e10, 1.i, 1.
            pat!(r"\b\d+(?:\.?E[+-]?\d+i?\b|\.i\b|\.)", CASE_INSENSITIVE),
        ],
        "comment" => vec![
            pat!(r"/\*[\s\S]*?\*/"),
            pat!(r"//.*"),
        ],
    }
}
