/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
    /// The input exceeded the maximum permitted length
    #[error("Text exceeds maximum length of {0} characters")]
    TooLong(usize),
    /// The input contained a character outside the permitted set
    #[error("Invalid character {0:?} (only lowercase alphanumeric, '_', '-' allowed)")]
    InvalidCharacter(char),
}

/// A stable identifier key for catalog entries.
///
/// Item and group keys are embedded in response maps, export documents and
/// catalog files, so the character set is restricted to a conservative ASCII
/// subset: lowercase alphanumeric plus `_` and `-`. Input is trimmed during
/// construction; validation failures are configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    /// Maximum permitted key length.
    const MAX_LEN: usize = 64;

    /// Creates a new `ItemId` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace before
    /// validation.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty,
    /// `TextError::TooLong` if it exceeds the maximum length, or
    /// `TextError::InvalidCharacter` for anything outside
    /// `[a-z0-9_-]`.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        if trimmed.len() > Self::MAX_LEN {
            return Err(TextError::TooLong(Self::MAX_LEN));
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| !matches!(c, 'a'..='z' | '0'..='9' | '_' | '-'))
        {
            return Err(TextError::InvalidCharacter(bad));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Display text for a symptom statement or group heading.
///
/// A `Label` guarantees non-empty content. It may embed `**emphasis**`
/// markers for UIs that render them; [`Label::plain`] strips the markers for
/// plain-text output. Decision logic never inspects label text — labels are
/// presentation data keyed by [`ItemId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(String);

impl Label {
    /// Creates a new `Label` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the
    /// trimmed result is empty, an error is returned.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty or contains
    /// only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the raw label text, emphasis markers included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the label text with `**emphasis**` markers removed.
    pub fn plain(&self) -> String {
        self.0.replace("**", "")
    }
}

macro_rules! impl_text_traits {
    ($ty:ident) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $ty::new(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

impl_text_traits!(ItemId);
impl_text_traits!(Label);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_trims_and_accepts_valid_keys() {
        let id = ItemId::new("  vomited_blood  ").unwrap();
        assert_eq!(id.as_str(), "vomited_blood");
        assert!(ItemId::new("alarm-1").is_ok());
    }

    #[test]
    fn test_item_id_rejects_empty() {
        assert!(matches!(ItemId::new("   "), Err(TextError::Empty)));
    }

    #[test]
    fn test_item_id_rejects_uppercase_and_spaces() {
        assert!(matches!(
            ItemId::new("Vomited"),
            Err(TextError::InvalidCharacter('V'))
        ));
        assert!(matches!(
            ItemId::new("vomited blood"),
            Err(TextError::InvalidCharacter(' '))
        ));
    }

    #[test]
    fn test_item_id_rejects_overlong() {
        let long = "a".repeat(65);
        assert!(matches!(ItemId::new(long), Err(TextError::TooLong(64))));
    }

    #[test]
    fn test_label_rejects_empty() {
        assert!(ItemId::new("").is_err());
        assert!(Label::new("  \n ").is_err());
    }

    #[test]
    fn test_label_plain_strips_emphasis() {
        let label = Label::new("I find it **increasingly hard to swallow**").unwrap();
        assert_eq!(label.as_str(), "I find it **increasingly hard to swallow**");
        assert_eq!(label.plain(), "I find it increasingly hard to swallow");
    }

    #[test]
    fn test_deserialize_runs_validation() {
        let ok: Result<ItemId, _> = serde_json::from_str("\"melena\"");
        assert!(ok.is_ok());
        let bad: Result<ItemId, _> = serde_json::from_str("\"not valid\"");
        assert!(bad.is_err());
    }
}
