//! Mapping of physical keys to controller actions.

use std::{collections::BTreeMap, fmt, str::FromStr};

use crate::{error, orientation::Orientation};

/// A logical input event understood by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Lower the recursion depth by one.
    DecreaseLevel,
    /// Raise the recursion depth by one.
    IncreaseLevel,
    /// Switch to the given orientation.
    SelectOrientation(Orientation),
    /// Stop accepting input.
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DecreaseLevel => write!(f, "decrease"),
            Self::IncreaseLevel => write!(f, "increase"),
            Self::SelectOrientation(o) => write!(f, "orientation-{}", o.letter().to_ascii_lowercase()),
            Self::Quit => write!(f, "quit"),
        }
    }
}

impl FromStr for Action {
    type Err = error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let unknown = || error::Error::UnknownAction(s.to_string());
        match name.as_str() {
            "decrease" => Ok(Self::DecreaseLevel),
            "increase" => Ok(Self::IncreaseLevel),
            "quit" => Ok(Self::Quit),
            other => other
                .strip_prefix("orientation-")
                .unwrap_or(other)
                .parse::<Orientation>()
                .map(Self::SelectOrientation)
                .map_err(|_| unknown()),
        }
    }
}

/// Key bindings used to translate typed characters into [`Action`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    /// Bound keys, ordered for stable listing.
    bindings: BTreeMap<char, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_pairs([
            ('a', Action::DecreaseLevel),
            ('s', Action::IncreaseLevel),
            ('z', Action::SelectOrientation(Orientation::A)),
            ('x', Action::SelectOrientation(Orientation::B)),
            ('c', Action::SelectOrientation(Orientation::C)),
            ('v', Action::SelectOrientation(Orientation::D)),
            ('q', Action::Quit),
        ])
    }
}

impl KeyMap {
    /// A key map with no bindings.
    pub fn empty() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// Build a key map from explicit `(key, action)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (char, Action)>) -> Self {
        Self {
            bindings: pairs.into_iter().collect(),
        }
    }

    /// Look up the action bound to `key`.
    pub fn action(&self, key: char) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: char, action: Action) {
        self.bindings.insert(key, action);
    }

    /// Apply a `KEY=ACTION` binding spec such as `j=decrease`.
    pub fn bind_spec(&mut self, spec: &str) -> error::Result<()> {
        let (key, action) = parse_binding(spec)?;
        self.bind(key, action);
        Ok(())
    }

    /// Bound keys and their actions, ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (char, Action)> + '_ {
        self.bindings.iter().map(|(&k, &a)| (k, a))
    }

    /// All keys bound to `action`, ordered by key.
    pub fn keys_for(&self, action: Action) -> Vec<char> {
        self.iter()
            .filter(|&(_, a)| a == action)
            .map(|(k, _)| k)
            .collect()
    }
}

/// Parse a `KEY=ACTION` spec into its parts.
pub fn parse_binding(spec: &str) -> error::Result<(char, Action)> {
    let invalid = |reason: String| error::Error::InvalidBinding {
        spec: spec.to_string(),
        reason,
    };

    let (key, action) = spec
        .split_once('=')
        .ok_or_else(|| invalid("expected KEY=ACTION".to_string()))?;

    let mut chars = key.chars();
    let key = match (chars.next(), chars.next()) {
        (Some(k), None) if !k.is_whitespace() => k,
        _ => return Err(invalid(format!("key '{key}' must be a single character"))),
    };

    let action = action
        .parse::<Action>()
        .map_err(|e| invalid(e.to_string()))?;
    Ok((key, action))
}
