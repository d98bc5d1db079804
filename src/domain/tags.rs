//! Tag normalization and the selected-tags buffer of the entry form.

/// Maximum number of tags carried by a single entry.
pub const MAX_TAGS: usize = 5;

/// Normalizes a raw tag: trims surrounding whitespace and lowercases.
///
/// Returns `None` when nothing is left after trimming.
///
/// # Examples
///
/// ```
/// use mood_journal::domain::tags::normalize_tag;
///
/// assert_eq!(normalize_tag("  Work "), Some("work".to_string()));
/// assert_eq!(normalize_tag("   "), None);
/// ```
#[must_use]
pub fn normalize_tag(raw: &str) -> Option<String> {
    let tag = raw.trim().to_lowercase();
    if tag.is_empty() {
        None
    } else {
        Some(tag)
    }
}

/// Ordered, deduplicated set of at most [`MAX_TAGS`] normalized tags.
///
/// Used both as the form's selected-tags buffer and to normalize the tags of
/// imported entries, so every entry in the store obeys the same rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagBuffer {
    tags: Vec<String>,
}

impl TagBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag, returning `true` if the buffer changed.
    ///
    /// Empty tags, duplicates and additions beyond [`MAX_TAGS`] are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use mood_journal::domain::TagBuffer;
    ///
    /// let mut tags = TagBuffer::new();
    /// assert!(tags.add("Work"));
    /// assert!(!tags.add("work"));
    /// assert_eq!(tags.as_slice(), ["work"]);
    /// ```
    pub fn add(&mut self, raw: &str) -> bool {
        let Some(tag) = normalize_tag(raw) else {
            return false;
        };
        if self.tags.len() >= MAX_TAGS || self.tags.contains(&tag) {
            tracing::trace!(len = self.tags.len(), "tag ignored");
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Removes a tag, returning `true` if it was present.
    pub fn remove(&mut self, raw: &str) -> bool {
        let Some(tag) = normalize_tag(raw) else {
            return false;
        };
        let before = self.tags.len();
        self.tags.retain(|t| *t != tag);
        before != self.tags.len()
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.tags
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagBuffer {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut buffer = Self::new();
        for tag in iter {
            buffer.add(tag.as_ref());
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_first_five_tags() {
        let mut tags = TagBuffer::new();
        for tag in ["a", "b", "c", "d", "e", "f"] {
            tags.add(tag);
        }
        assert_eq!(tags.len(), MAX_TAGS);
        assert_eq!(tags.as_slice(), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn duplicate_tag_is_a_no_op() {
        let mut tags = TagBuffer::new();
        assert!(tags.add("gym"));
        assert!(!tags.add(" GYM "));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn remove_reports_presence() {
        let mut tags: TagBuffer = ["work", "family"].into_iter().collect();
        assert!(tags.remove("Work"));
        assert!(!tags.remove("work"));
        assert_eq!(tags.as_slice(), ["family"]);
    }

    #[test]
    fn blank_tags_are_rejected() {
        let mut tags = TagBuffer::new();
        assert!(!tags.add("   "));
        assert!(tags.is_empty());
    }
}
