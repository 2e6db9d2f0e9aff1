//! Single wildcard pattern.

/// Where the literal part of a pattern must appear in a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The whole name.
    Exact,
    /// The start of the name (`text*`).
    Prefix,
    /// The end of the name (`*text`).
    Suffix,
    /// Anywhere in the name (`*text*`).
    Contains,
}

/// A parsed, lower-cased wildcard pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionPattern {
    kind: MatchKind,
    needle: String,
}

impl ActionPattern {
    /// Parse `pattern`. Returns `None` for an empty pattern, which matches
    /// nothing.
    ///
    /// ```
    /// use treadmill_classifier::{ActionPattern, MatchKind};
    ///
    /// let pattern = ActionPattern::parse("*Move*");
    /// assert_eq!(pattern.map(|p| p.kind()), Some(MatchKind::Contains));
    /// assert!(ActionPattern::parse("").is_none());
    /// ```
    pub fn parse(pattern: &str) -> Option<Self> {
        if pattern.is_empty() {
            return None;
        }
        let lowered = pattern.to_lowercase();
        let (leading, rest) = match lowered.strip_prefix('*') {
            Some(rest) => (true, rest),
            None => (false, lowered.as_str()),
        };
        let (trailing, needle) = match rest.strip_suffix('*') {
            Some(needle) => (true, needle),
            None => (false, rest),
        };
        let kind = match (leading, trailing) {
            (true, true) => MatchKind::Contains,
            (true, false) => MatchKind::Suffix,
            (false, true) => MatchKind::Prefix,
            (false, false) => MatchKind::Exact,
        };
        Some(Self {
            kind,
            needle: needle.to_string(),
        })
    }

    /// How the literal part is anchored.
    pub fn kind(&self) -> MatchKind {
        self.kind
    }

    /// The lower-cased literal part.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Match against a name that is already lower-cased.
    pub fn matches_lowered(&self, name: &str) -> bool {
        match self.kind {
            MatchKind::Exact => name == self.needle,
            MatchKind::Prefix => name.starts_with(&self.needle),
            MatchKind::Suffix => name.ends_with(&self.needle),
            MatchKind::Contains => name.contains(&self.needle),
        }
    }

    /// Match against `name`, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        self.matches_lowered(&name.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(pattern: &str) -> Result<ActionPattern, String> {
        ActionPattern::parse(pattern).ok_or_else(|| format!("pattern {pattern:?} did not parse"))
    }

    #[test]
    fn grammar_selects_match_kind() -> Result<(), String> {
        assert_eq!(parsed("move")?.kind(), MatchKind::Exact);
        assert_eq!(parsed("move*")?.kind(), MatchKind::Prefix);
        assert_eq!(parsed("*move")?.kind(), MatchKind::Suffix);
        assert_eq!(parsed("*move*")?.kind(), MatchKind::Contains);
        Ok(())
    }

    #[test]
    fn exact_requires_whole_name() -> Result<(), String> {
        let pattern = parsed("Move")?;
        assert!(pattern.matches("move"));
        assert!(pattern.matches("MOVE"));
        assert!(!pattern.matches("moves"));
        Ok(())
    }

    #[test]
    fn prefix_and_suffix_anchor() -> Result<(), String> {
        let prefix = parsed("left*")?;
        assert!(prefix.matches("LeftStick"));
        assert!(!prefix.matches("StickLeft"));

        let suffix = parsed("*stick")?;
        assert!(suffix.matches("LeftStick"));
        assert!(!suffix.matches("StickLeft"));
        Ok(())
    }

    #[test]
    fn lone_star_matches_everything() -> Result<(), String> {
        let pattern = parsed("*")?;
        assert!(pattern.matches(""));
        assert!(pattern.matches("anything at all"));
        Ok(())
    }

    #[test]
    fn empty_pattern_is_none() {
        assert!(ActionPattern::parse("").is_none());
    }

    #[test]
    fn needle_is_lower_cased() -> Result<(), String> {
        assert_eq!(parsed("*LoCoMoTiOn*")?.needle(), "locomotion");
        Ok(())
    }
}
