//! Convert lexed tokens into the items of a [`Range`].

use tracing::{debug, trace};

use crate::errors::{SpecError, SpecErrorKind};
use crate::symbols::SymbolTable;

use super::Range;
use super::item::RangeItem;
use super::lexer::{Spanned, Token, lex_range};

/// Compiles range specifications against a table of symbolic names.
///
/// # Examples
/// ```
/// use cutrange::{RangeCompiler, RangeItem, SymbolTable};
///
/// let symbols = SymbolTable::ascii();
/// let range = RangeCompiler::new(&symbols).compile(Some("tab, 'a'...'z'"), None)?;
/// assert_eq!(
///     range.items(),
///     Some(&[RangeItem::single(9), RangeItem::between(97, 122)?][..])
/// );
/// # Ok::<(), cutrange::SpecError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RangeCompiler<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> RangeCompiler<'a> {
    /// Resolve names in specifications through `symbols`.
    #[must_use]
    pub const fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    /// Compile `text`, falling back to `default` if `text` is absent or blank.
    ///
    /// Blank text without a default yields an unrestricted range.
    ///
    /// # Errors
    /// Returns [`SpecError`] for the first rule the effective text violates,
    /// or [`SpecErrorKind::BlankDefault`] if `default` is blank.
    pub fn compile(&self, text: Option<&str>, default: Option<&str>) -> Result<Range, SpecError> {
        if default.is_some_and(is_blank) {
            return Err(SpecErrorKind::BlankDefault.into());
        }
        let Some(text) = text.filter(|text| !is_blank(text)).or(default) else {
            debug!("blank range specification, accepting any value");
            return Ok(Range::unrestricted());
        };

        let tokens = lex_range(text)?;
        let mut items: Vec<RangeItem> = Vec::new();
        let mut start = 0;
        for (index, spanned) in tokens.iter().enumerate() {
            if !matches!(spanned.token, Token::Comma | Token::End) {
                continue;
            }
            let group = tokens.get(start..index).unwrap_or_default();
            start = index + 1;
            let item = self.compile_item(group, spanned.offset)?;
            trace!(%item, "compiled range item");
            if let Some(existing) = items.iter().find(|existing| existing.overlaps(&item)) {
                return Err(SpecError::at(
                    SpecErrorKind::Overlap {
                        first: existing.to_string(),
                        second: item.to_string(),
                    },
                    group.first().map_or(spanned.offset, |first| first.offset),
                ));
            }
            items.push(item);
        }

        debug!(text, items = items.len(), "compiled range specification");
        Ok(Range::restricted(text.to_string(), items))
    }

    fn compile_item(&self, group: &[Spanned], end: usize) -> Result<RangeItem, SpecError> {
        let mut state = ItemState::Start;
        let mut last_offset = end;
        for Spanned { token, offset } in group {
            last_offset = *offset;
            state = self
                .advance(state, token)
                .map_err(|kind| SpecError::at(kind, *offset))?;
        }
        state.finish().map_err(|kind| SpecError::at(kind, last_offset))
    }

    fn advance(&self, state: ItemState, token: &Token) -> Result<ItemState, SpecErrorKind> {
        if let ItemState::AfterHyphen(slot) = state {
            let Token::Number { text, value } = token else {
                return Err(SpecErrorKind::HyphenNotFollowedByNumber {
                    found: token.fragment(),
                });
            };
            return slot.fill(negate(text, *value)?, &format!("-{}", token.fragment()));
        }

        match token {
            Token::Hyphen => state.hyphen(),
            Token::Colon | Token::Ellipsis(_) => state.ellipsis(token),
            _ => {
                let value = self.value_of(token)?;
                state.value(value, token)
            }
        }
    }

    fn value_of(&self, token: &Token) -> Result<i64, SpecErrorKind> {
        match token {
            Token::Number { text, value } => i64::try_from(*value)
                .map_err(|_| SpecErrorKind::NumberOutOfRange { text: text.clone() }),
            Token::Text { value, .. } => Ok(i64::from(u32::from(*value))),
            Token::Name(name) => {
                self.symbols
                    .get(name)
                    .ok_or_else(|| SpecErrorKind::UnknownSymbol {
                        name: name.clone(),
                        valid: self.symbols.human_readable_names(),
                    })
            }
            other => Err(SpecErrorKind::UnexpectedCharacter {
                found: other.fragment(),
                token_type: "operator",
            }),
        }
    }
}

/// Parse a single integer written the way range limits are written: an
/// optional hyphen followed by a decimal or `0x` hexadecimal number.
///
/// # Errors
/// Returns [`SpecErrorKind::InvalidNumber`] if `text` is not a single number
/// and [`SpecErrorKind::NumberOutOfRange`] if it does not fit into `i64`.
///
/// # Examples
/// ```
/// assert_eq!(cutrange::parse_integer(" -0x1F "), Ok(-31));
/// assert!(cutrange::parse_integer("1...2").is_err());
/// ```
pub fn parse_integer(text: &str) -> Result<i64, SpecError> {
    let tokens = lex_range(text)?;
    match tokens.as_slice() {
        [
            Spanned {
                token: Token::Number { text, value },
                offset,
            },
            _,
        ] => i64::try_from(*value).map_err(|_| {
            SpecError::at(SpecErrorKind::NumberOutOfRange { text: text.clone() }, *offset)
        }),
        [
            Spanned {
                token: Token::Hyphen,
                offset,
            },
            Spanned {
                token: Token::Number { text, value },
                ..
            },
            _,
        ] => negate(text, *value).map_err(|kind| SpecError::at(kind, *offset)),
        _ => Err(SpecError::at(
            SpecErrorKind::InvalidNumber {
                text: text.trim().to_string(),
            },
            0,
        )),
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn negate(text: &str, magnitude: u64) -> Result<i64, SpecErrorKind> {
    0_i64
        .checked_sub_unsigned(magnitude)
        .ok_or_else(|| SpecErrorKind::NumberOutOfRange {
            text: format!("-{text}"),
        })
}

/// Which limit a negated number will fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Lower,
    Upper { lower: Option<i64> },
    Surplus { ellipsis_found: bool },
}

impl Slot {
    fn fill(self, value: i64, found: &str) -> Result<ItemState, SpecErrorKind> {
        match self {
            Self::Lower => Ok(ItemState::HaveLower(value)),
            Self::Upper { lower } => Ok(ItemState::HaveUpper {
                lower,
                upper: value,
            }),
            Self::Surplus {
                ellipsis_found: false,
            } => Err(SpecErrorKind::MissingEllipsis {
                found: found.into(),
            }),
            Self::Surplus {
                ellipsis_found: true,
            } => Err(SpecErrorKind::TooManyLimits {
                found: found.into(),
            }),
        }
    }
}

/// Progress through one comma separated item. Errors leave the machine
/// through the `Err` arm of each transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemState {
    Start,
    AfterHyphen(Slot),
    HaveLower(i64),
    AfterEllipsis { lower: Option<i64> },
    HaveUpper { lower: Option<i64>, upper: i64 },
}

impl ItemState {
    fn hyphen(self) -> Result<Self, SpecErrorKind> {
        let slot = match self {
            Self::Start => Slot::Lower,
            Self::AfterEllipsis { lower } => Slot::Upper { lower },
            Self::HaveLower(_) => Slot::Surplus {
                ellipsis_found: false,
            },
            Self::HaveUpper { .. } => Slot::Surplus {
                ellipsis_found: true,
            },
            Self::AfterHyphen(_) => {
                return Err(SpecErrorKind::HyphenNotFollowedByNumber { found: "-".into() });
            }
        };
        Ok(Self::AfterHyphen(slot))
    }

    fn ellipsis(self, token: &Token) -> Result<Self, SpecErrorKind> {
        match self {
            Self::Start => Ok(Self::AfterEllipsis { lower: None }),
            Self::HaveLower(lower) => Ok(Self::AfterEllipsis { lower: Some(lower) }),
            Self::AfterEllipsis { .. } | Self::HaveUpper { .. } => {
                Err(SpecErrorKind::RepeatedEllipsis {
                    found: token.fragment(),
                })
            }
            Self::AfterHyphen(_) => Err(SpecErrorKind::HyphenNotFollowedByNumber {
                found: token.fragment(),
            }),
        }
    }

    fn value(self, value: i64, token: &Token) -> Result<Self, SpecErrorKind> {
        match self {
            Self::Start => Ok(Self::HaveLower(value)),
            Self::AfterEllipsis { lower } => Ok(Self::HaveUpper {
                lower,
                upper: value,
            }),
            Self::HaveLower(_) => Err(SpecErrorKind::MissingEllipsis {
                found: token.fragment(),
            }),
            Self::HaveUpper { .. } => Err(SpecErrorKind::TooManyLimits {
                found: token.fragment(),
            }),
            Self::AfterHyphen(_) => Err(SpecErrorKind::HyphenNotFollowedByNumber {
                found: token.fragment(),
            }),
        }
    }

    fn finish(self) -> Result<RangeItem, SpecErrorKind> {
        match self {
            Self::Start => Err(SpecErrorKind::EmptyItem),
            Self::AfterHyphen(_) => Err(SpecErrorKind::TrailingHyphen),
            Self::HaveLower(value) => Ok(RangeItem::single(value)),
            Self::AfterEllipsis { lower: None } => Err(SpecErrorKind::BareEllipsis),
            Self::AfterEllipsis { lower: Some(lower) } => Ok(RangeItem::at_least(lower)),
            Self::HaveUpper { lower: None, upper } => Ok(RangeItem::at_most(upper)),
            Self::HaveUpper {
                lower: Some(lower),
                upper,
            } => RangeItem::between(lower, upper).map_err(|err| err.kind().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::test_support::{compile_err, compile_ok};
    use rstest::rstest;

    #[rstest]
    #[case("1...40", "1:40")]
    #[case("...40", ":40")]
    #[case("40...", "40:")]
    #[case("-5...-1", "-5:-1")]
    #[case("- 5 : - 1", "-5:-1")]
    #[case("7", "7")]
    #[case("-7", "-7")]
    #[case("0x10:0X1f", "16:31")]
    #[case("'a'\u{2026}\"z\"", "97:122")]
    #[case("cr, LF", "13, 10")]
    #[case("1...5, 6...8", "1:5, 6:8")]
    #[case("20..., ...-20, 0", "20:, :-20, 0")]
    #[case("-9223372036854775808:9223372036854775807", "-9223372036854775808:9223372036854775807")]
    fn compiles_specifications(#[case] text: &str, #[case] rendered: &str) {
        assert_eq!(compile_ok(text).to_string(), rendered);
    }

    #[rstest]
    #[case("1-", SpecErrorKind::TrailingHyphen)]
    #[case("-", SpecErrorKind::TrailingHyphen)]
    #[case("1:-", SpecErrorKind::TrailingHyphen)]
    #[case("1-2", SpecErrorKind::MissingEllipsis { found: "-2".into() })]
    #[case("1:2 -3", SpecErrorKind::TooManyLimits { found: "-3".into() })]
    #[case("1:2-", SpecErrorKind::TrailingHyphen)]
    #[case("1 2", SpecErrorKind::MissingEllipsis { found: "2".into() })]
    #[case("1:2:3", SpecErrorKind::RepeatedEllipsis { found: ":".into() })]
    #[case("1:2 3", SpecErrorKind::TooManyLimits { found: "3".into() })]
    #[case("1::2", SpecErrorKind::RepeatedEllipsis { found: ":".into() })]
    #[case("--1", SpecErrorKind::HyphenNotFollowedByNumber { found: "-".into() })]
    #[case("-tab", SpecErrorKind::HyphenNotFollowedByNumber { found: "tab".into() })]
    #[case("-'a'", SpecErrorKind::HyphenNotFollowedByNumber { found: "'a'".into() })]
    #[case("-...", SpecErrorKind::HyphenNotFollowedByNumber { found: "...".into() })]
    #[case("-\u{2026}", SpecErrorKind::HyphenNotFollowedByNumber { found: "\u{2026}".into() })]
    #[case("-\"a\"", SpecErrorKind::HyphenNotFollowedByNumber { found: "\"a\"".into() })]
    #[case("1\u{2026}2\u{2026}", SpecErrorKind::RepeatedEllipsis { found: "\u{2026}".into() })]
    #[case("'a' \"b\"", SpecErrorKind::MissingEllipsis { found: "\"b\"".into() })]
    #[case("...", SpecErrorKind::BareEllipsis)]
    #[case("1, :", SpecErrorKind::BareEllipsis)]
    #[case("5...1", SpecErrorKind::LowerAboveUpper { lower: 5, upper: 1 })]
    #[case("1,,2", SpecErrorKind::EmptyItem)]
    #[case(",", SpecErrorKind::EmptyItem)]
    #[case("1,", SpecErrorKind::EmptyItem)]
    #[case(
        "9223372036854775808",
        SpecErrorKind::NumberOutOfRange { text: "9223372036854775808".into() }
    )]
    #[case(
        "-9223372036854775809",
        SpecErrorKind::NumberOutOfRange { text: "-9223372036854775809".into() }
    )]
    #[case("1...5,3...8", SpecErrorKind::Overlap { first: "1:5".into(), second: "3:8".into() })]
    #[case("1...10, 3...4", SpecErrorKind::Overlap { first: "1:10".into(), second: "3:4".into() })]
    #[case("3...4, 1...10", SpecErrorKind::Overlap { first: "3:4".into(), second: "1:10".into() })]
    #[case("...0, 0...", SpecErrorKind::Overlap { first: ":0".into(), second: "0:".into() })]
    #[case("65, 'A'", SpecErrorKind::Overlap { first: "65".into(), second: "65".into() })]
    fn rejects_specifications(#[case] text: &str, #[case] expected: SpecErrorKind) {
        assert_eq!(compile_err(text).kind(), &expected);
    }

    #[rstest]
    #[case("0", Ok(0))]
    #[case(" 42 ", Ok(42))]
    #[case("-0x10", Ok(-16))]
    #[case("- 3", Ok(-3))]
    #[case("-9223372036854775808", Ok(i64::MIN))]
    #[case(
        "9223372036854775808",
        Err(SpecErrorKind::NumberOutOfRange { text: "9223372036854775808".into() })
    )]
    #[case("12ab", Err(SpecErrorKind::InvalidNumber { text: "12ab".into() }))]
    #[case("1:2", Err(SpecErrorKind::InvalidNumber { text: "1:2".into() }))]
    #[case("tab", Err(SpecErrorKind::InvalidNumber { text: "tab".into() }))]
    #[case("", Err(SpecErrorKind::InvalidNumber { text: String::new() }))]
    fn parses_single_integers(#[case] text: &str, #[case] expected: Result<i64, SpecErrorKind>) {
        assert_eq!(parse_integer(text).map_err(|err| err.kind().clone()), expected);
    }

    #[test]
    fn lists_valid_names_for_unknown_symbol() {
        let symbols: SymbolTable = [("cr", 13), ("lf", 10)].into_iter().collect();
        let Err(err) = RangeCompiler::new(&symbols).compile(Some("crlf"), None) else {
            panic!("unknown symbol should fail");
        };
        assert_eq!(
            err.to_string(),
            "symbolic name 'crlf' must be one of: 'cr' or 'lf'"
        );
    }

    #[rstest]
    #[case("1-", 1)]
    #[case("1, 2 3", 5)]
    #[case("1,,2", 2)]
    #[case("1:5, 3", 5)]
    fn reports_error_offsets(#[case] text: &str, #[case] offset: usize) {
        assert_eq!(compile_err(text).offset(), Some(offset));
    }

    #[test]
    fn substitutes_default_for_blank_text() {
        let symbols = SymbolTable::ascii();
        let compiler = RangeCompiler::new(&symbols);
        for text in [None, Some(""), Some("  \t")] {
            let Ok(range) = compiler.compile(text, Some("1:9")) else {
                panic!("default should compile");
            };
            assert_eq!(range.description(), Some("1:9"));
            assert_eq!(range.to_string(), "1:9");
        }
    }

    #[test]
    fn prefers_text_over_default() {
        let symbols = SymbolTable::ascii();
        let Ok(range) = RangeCompiler::new(&symbols).compile(Some("2"), Some("1:9")) else {
            panic!("text should compile");
        };
        assert_eq!(range.description(), Some("2"));
    }

    #[test]
    fn rejects_blank_default() {
        let symbols = SymbolTable::ascii();
        let Err(err) = RangeCompiler::new(&symbols).compile(Some("1"), Some(" ")) else {
            panic!("blank default should fail");
        };
        assert_eq!(err.kind(), &SpecErrorKind::BlankDefault);
    }

    #[test]
    fn blank_text_without_default_is_unrestricted() {
        let symbols = SymbolTable::new();
        let compiler = RangeCompiler::new(&symbols);
        for text in [None, Some(""), Some(" \n ")] {
            let Ok(range) = compiler.compile(text, None) else {
                panic!("blank text should compile");
            };
            assert!(range.is_unrestricted());
            assert_eq!(range.description(), None);
        }
    }
}
