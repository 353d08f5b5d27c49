//! Lua's long brackets (`[[ ]]`, `[==[ ]==]`, ...) pair an opening and closing
//! level. The `regex` crate has no backreferences, so levels 0 through 4 are
//! spelled out; deeper levels are not recognised.

use crate::LanguageRules;

pub(crate) fn rules() -> LanguageRules {
    language! {
        "keyword" => words![
            "and", "break", "do", "else", "elseif", "end", "for", "function", "if",
            "in", "local", "not", "or", "repeat", "return", "then", "until", "while",
        ],
        "separator" => words![
            "~=", "}", "{", "^", "]", "[", ">=", ">", "==", "=", "<=", "<", ";", ":",
            "/", "...", "..", ".", "-", ",", "+", "*", ")", "(", "%", "#",
        ],
        "value" => vec![
            pat!(r#""(?:\\.|\\\n|[^\\"])*""#),
            pat!(r"'(?:\\.|\\\n|[^\\'])*'"),
            pat!(r"\[\[(?s:.*?)\]\]"),
            pat!(r"\[=\[(?s:.*?)\]=\]"),
            pat!(r"\[==\[(?s:.*?)\]==\]"),
            pat!(r"\[===\[(?s:.*?)\]===\]"),
            pat!(r"\[====\[(?s:.*?)\]====\]"),
            pat!(r"\b\d+(?:\.\d+)?(?:E[+-]?\d+)?\b", CASE_INSENSITIVE),
            pat!(r"\b0x[0-9a-f]+\b", CASE_INSENSITIVE),
        ],
        "comment" => vec![
            // line comment: `--` not followed by a long bracket opener
            pat!(r"--(?:[^\[\n].*|\[=*(?:[^=\[\n].*)?)?$", MULTI_LINE),
            pat!(r"--\[\[(?s:.*?)\]\]"),
            pat!(r"--\[=\[(?s:.*?)\]=\]"),
            pat!(r"--\[==\[(?s:.*?)\]==\]"),
            pat!(r"--\[===\[(?s:.*?)\]===\]"),
            pat!(r"--\[====\[(?s:.*?)\]====\]"),
        ],
    }
}
