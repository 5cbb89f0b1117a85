use serde::{Deserialize, Serialize};

/// Where a payload came from: the upstream provider, or the built-in
/// sample catalog after the live fetch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    Live,
    Sample,
}

/// Facade envelope: the entity payload tagged with its origin. Sample
/// payloads carry a human-readable notice explaining the substitution.
#[derive(Debug, Clone, Serialize)]
pub struct Sourced<T> {
    pub source: DataOrigin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub data: T,
}

impl<T> Sourced<T> {
    pub fn live(data: T) -> Self {
        Self {
            source: DataOrigin::Live,
            notice: None,
            data,
        }
    }

    pub fn sample(data: T, notice: impl Into<String>) -> Self {
        Self {
            source: DataOrigin::Sample,
            notice: Some(notice.into()),
            data,
        }
    }

    pub fn is_sample(&self) -> bool {
        self.source == DataOrigin::Sample
    }

    /// Re-shape the payload while keeping the origin tag and notice.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        Sourced {
            source: self.source,
            notice: self.notice,
            data: f(self.data),
        }
    }
}
