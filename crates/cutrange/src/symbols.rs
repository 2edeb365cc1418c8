//! Symbolic names usable in place of numbers, such as `tab` or `cr`.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::sync::LazyLock;

/// ASCII control character mnemonics and their codes.
const ASCII_NAMES: &[(&str, i64)] = &[
    ("nul", 0),
    ("soh", 1),
    ("stx", 2),
    ("etx", 3),
    ("eot", 4),
    ("enq", 5),
    ("ack", 6),
    ("bel", 7),
    ("bs", 8),
    ("ht", 9),
    ("tab", 9),
    ("lf", 10),
    ("nl", 10),
    ("vt", 11),
    ("ff", 12),
    ("cr", 13),
    ("so", 14),
    ("si", 15),
    ("dle", 16),
    ("dc1", 17),
    ("dc2", 18),
    ("dc3", 19),
    ("dc4", 20),
    ("nak", 21),
    ("syn", 22),
    ("etb", 23),
    ("can", 24),
    ("em", 25),
    ("sub", 26),
    ("esc", 27),
    ("fs", 28),
    ("gs", 29),
    ("rs", 30),
    ("us", 31),
    ("sp", 32),
    ("space", 32),
    ("del", 127),
];

pub(crate) static ASCII: LazyLock<SymbolTable> = LazyLock::new(SymbolTable::ascii);

/// Read-only mapping from symbolic names to integer codes.
///
/// Names are stored lower-cased and looked up case-insensitively.
///
/// # Examples
/// ```
/// use cutrange::SymbolTable;
///
/// let symbols = SymbolTable::ascii();
/// assert_eq!(symbols.get("CR"), Some(13));
/// assert_eq!(symbols.get("carriage"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    codes: BTreeMap<String, i64>,
}

impl SymbolTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The ASCII control character mnemonics (`nul` to `us`, `sp`, `del`).
    #[must_use]
    pub fn ascii() -> Self {
        ASCII_NAMES.iter().copied().collect()
    }

    /// Add or replace `name`.
    pub fn insert(&mut self, name: &str, code: i64) {
        self.codes.insert(name.to_lowercase(), code);
    }

    /// Look up the code for `name`, ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.codes.get(&name.to_lowercase()).copied()
    }

    /// Names and codes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.codes.iter().map(|(name, &code)| (name.as_str(), code))
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.codes.keys().map(String::as_str)
    }

    /// Number of known names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table knows no names at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All names formatted as `'a', 'b' or 'c'`.
    #[must_use]
    pub fn human_readable_names(&self) -> String {
        human_readable_list(self.names(), "or")
    }
}

impl<S: AsRef<str>> FromIterator<(S, i64)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, code) in iter {
            table.insert(name.as_ref(), code);
        }
        table
    }
}

/// Join quoted `items` with commas and `final_separator` before the last one.
///
/// # Examples
/// ```
/// use cutrange::human_readable_list;
///
/// assert_eq!(human_readable_list(["a", "b", "c"], "or"), "'a', 'b' or 'c'");
/// assert_eq!(human_readable_list(["a"], "and"), "'a'");
/// assert_eq!(human_readable_list(Vec::<&str>::new(), "or"), "");
/// ```
pub fn human_readable_list<I>(items: I, final_separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let items: Vec<String> = items.into_iter().map(|item| format!("'{item}'")).collect();
    match items.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} {final_separator} {last}", rest.join(", ")),
    }
}
