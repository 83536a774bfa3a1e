//! Translated-string lookup for the rendering surface.

use std::borrow::Cow;

/// The three strings the refresh surface can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelKey {
    PullToRefresh,
    ReleaseToRefresh,
    Updating,
}

impl LabelKey {
    /// Picks the label matching the published signal state: "updating"
    /// once a reload is in flight, "release" once the pull would
    /// qualify, "pull" otherwise.
    pub fn for_state(pull_distance: f32, pull_threshold: f32, is_refreshing: bool) -> Self {
        if is_refreshing {
            LabelKey::Updating
        } else if pull_distance >= pull_threshold {
            LabelKey::ReleaseToRefresh
        } else {
            LabelKey::PullToRefresh
        }
    }
}

/// Host-provided localisation collaborator.
pub trait LabelResolver {
    fn resolve(&self, key: LabelKey) -> Cow<'static, str>;
}

/// Built-in English strings, used when the host supplies no resolver.
#[derive(Default)]
pub struct EnglishLabels;

impl LabelResolver for EnglishLabels {
    fn resolve(&self, key: LabelKey) -> Cow<'static, str> {
        Cow::Borrowed(match key {
            LabelKey::PullToRefresh => "Pull to refresh",
            LabelKey::ReleaseToRefresh => "Release to refresh",
            LabelKey::Updating => "Updating\u{2026}",
        })
    }
}
