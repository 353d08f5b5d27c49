/// Build a `Vec<RuleSpec>` of literal tokens.
#[macro_export]
macro_rules! words {
    ($($word:literal),* $(,)?) => {
        vec![ $($crate::RuleSpec::Literal(::std::borrow::Cow::Borrowed($word))),* ]
    };
}

/// Build a `RuleSpec::Pattern`, optionally with `PatternFlags` names.
///
/// ```
/// use lexmark::{pat, PatternFlags, RuleSpec};
///
/// let hex = pat!(r"\b0x[0-9a-f]+\b", CASE_INSENSITIVE);
/// match hex {
///     RuleSpec::Pattern(spec) => assert!(spec.flags.contains(PatternFlags::CASE_INSENSITIVE)),
///     RuleSpec::Literal(_) => unreachable!(),
/// }
/// ```
#[macro_export]
macro_rules! pat {
    ($src:literal) => {
        $crate::RuleSpec::Pattern($crate::PatternSpec::new($src))
    };
    ($src:literal, $($flag:ident)|+) => {
        $crate::RuleSpec::Pattern(
            $crate::PatternSpec::new($src).with_flags($($crate::PatternFlags::$flag)|+),
        )
    };
}

/// Build a `LanguageRules` table from `category => rules` entries.
#[macro_export]
macro_rules! language {
    ($($category:literal => $rules:expr),* $(,)?) => {{
        let mut table = $crate::LanguageRules::new();
        $( table.push($category, $rules); )*
        table
    }};
}
