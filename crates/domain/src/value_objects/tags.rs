//! Tag list parsing

use serde::{Deserialize, Serialize};

/// Ordered, de-duplicated list of non-empty tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagList(Vec<String>);

impl TagList {
    /// Parse a comma separated string such as `"cats, pets,,cats"`.
    pub fn from_csv(raw: &str) -> Self {
        Self::from_iter(raw.split(','))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Comma joined form used in signed parameters.
    pub fn joined(&self) -> String {
        self.0.join(",")
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags: Vec<String> = Vec::new();
        for tag in iter {
            let tag = tag.as_ref().trim();
            if tag.is_empty() || tags.iter().any(|t| t == tag) {
                continue;
            }
            tags.push(tag.to_string());
        }
        Self(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_csv_and_trims() {
        let tags = TagList::from_csv(" cats, pets ,,cats,");
        assert_eq!(tags.into_vec(), vec!["cats".to_string(), "pets".to_string()]);
    }

    #[test]
    fn empty_csv_is_empty() {
        assert!(TagList::from_csv("").is_empty());
        assert!(TagList::from_csv(" , ,").is_empty());
    }

    #[test]
    fn joined_keeps_order() {
        let tags: TagList = ["b", "a", "b"].into_iter().collect();
        assert_eq!(tags.joined(), "b,a");
        assert_eq!(tags.len(), 2);
    }
}
