use std::rc::Rc;

use crate::runtime::function::Function;

/// A callable selected for interception: either a live function handle or
/// one or more registry names.
#[derive(Debug, Clone)]
pub enum Target {
    Function(Rc<Function>),
    Name(String),
    Names(Vec<String>),
}

/// Whether a name-string actually names a list of targets.
pub(crate) fn is_name_list(name: &str) -> bool {
    name.contains(' ') || name.contains(',')
}

/// Splits a separator-carrying name-string into individual names.
///
/// Commas and whitespace both separate; the separators themselves are
/// discarded, so `"$, $.fn.on"` and `"$ $.fn.on"` are equivalent.
pub fn split_names(list: &str) -> Vec<String> {
    list.split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

impl From<Rc<Function>> for Target {
    fn from(func: Rc<Function>) -> Self {
        Target::Function(func)
    }
}

impl From<&str> for Target {
    fn from(name: &str) -> Self {
        Target::Name(name.to_string())
    }
}

impl From<String> for Target {
    fn from(name: String) -> Self {
        Target::Name(name)
    }
}

impl From<Vec<String>> for Target {
    fn from(names: Vec<String>) -> Self {
        Target::Names(names)
    }
}
