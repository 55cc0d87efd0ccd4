//! Configuration merging and precedence handling.

use crate::config::schema::Config;

/// Merges configuration layers; later layers win field by field.
///
/// # Examples
///
/// ```
/// use incguard::config::{Config, ConfigMerger};
///
/// let low = Config { prefix: Some("low".to_string()), ..Default::default() };
/// let high = Config { prefix: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.prefix.as_deref(), Some("high"));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge layers given from lowest to highest precedence.
    #[must_use]
    pub fn merge<'a>(layers: impl IntoIterator<Item = &'a Config>) -> Config {
        let mut result = Config::default();
        for layer in layers {
            Self::merge_into(&mut result, layer);
        }
        result
    }

    /// Overlay `source` onto `target`. Fields that are `None` in `source`
    /// leave `target` untouched; the extension list is replaced as a whole.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.root.is_some() {
            target.root.clone_from(&source.root);
        }

        if source.prefix.is_some() {
            target.prefix.clone_from(&source.prefix);
        }

        if source.extensions.is_some() {
            target.extensions.clone_from(&source.extensions);
        }

        if source.keep_going.is_some() {
            target.keep_going = source.keep_going;
        }
    }
}
