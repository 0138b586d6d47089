//! In-memory video backend answering REST-style query parameters.

use std::sync::Arc;

use log::debug;

use crate::error::HostError;
use crate::query::QueryParams;
use crate::videos::Video;

/// One page of query results.
#[derive(Debug, Clone)]
pub struct Page {
    /// Videos of the requested page, in result order.
    pub items: Vec<Arc<Video>>,
    /// Number of videos matching the filters, across all pages.
    pub total: usize,
}

enum Condition {
    Contains(String, String),
    AtLeast(String, f64),
    AtMost(String, f64),
    Is(String, bool),
}

impl Condition {
    fn matches(&self, video: &Video) -> bool {
        match self {
            Condition::Contains(field, needle) => video
                .text(field)
                .is_some_and(|t| t.to_lowercase().contains(needle.as_str())),
            Condition::AtLeast(field, bound) => video.number(field).is_some_and(|n| n >= *bound),
            Condition::AtMost(field, bound) => video.number(field).is_some_and(|n| n <= *bound),
            Condition::Is(field, expected) => video.flag(field) == Some(*expected),
        }
    }
}

/// A fixed collection of videos.
///
/// The same `Arc` is handed out for a video on every request, so unchanged
/// rows keep their identity between pages.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    videos: Vec<Arc<Video>>,
}

impl Catalog {
    /// Creates a catalog over the given videos.
    pub fn new(videos: Vec<Video>) -> Self {
        Self {
            videos: videos.into_iter().map(Arc::new).collect(),
        }
    }

    /// Number of videos in the catalog.
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Answers a query.
    ///
    /// Unknown parameters and malformed values are errors; a missing
    /// `limit` returns everything from `offset` on.
    pub fn query(&self, params: &QueryParams) -> Result<Page, HostError> {
        let mut conditions = Vec::new();
        let mut ordering = None;
        let mut limit = None;
        let mut offset = 0;

        for (key, value) in params.pairs() {
            let bad = || HostError::BadParam {
                key: key.clone(),
                value: value.clone(),
            };
            match key.as_str() {
                "ordering" => ordering = Some(value.as_str()),
                "limit" => limit = Some(value.parse::<usize>().map_err(|_| bad())?),
                "offset" => offset = value.parse::<usize>().map_err(|_| bad())?,
                _ => {
                    let condition = match key.split_once("__") {
                        Some((field, "icontains")) => {
                            Condition::Contains(field.to_string(), value.to_lowercase())
                        }
                        Some((field, "gte")) => {
                            Condition::AtLeast(field.to_string(), value.parse().map_err(|_| bad())?)
                        }
                        Some((field, "lte")) => {
                            Condition::AtMost(field.to_string(), value.parse().map_err(|_| bad())?)
                        }
                        Some(_) => return Err(bad()),
                        None => Condition::Is(key.clone(), value.parse().map_err(|_| bad())?),
                    };
                    conditions.push(condition);
                }
            }
        }

        let mut matching: Vec<&Arc<Video>> = self
            .videos
            .iter()
            .filter(|v| conditions.iter().all(|c| c.matches(v)))
            .collect();

        if let Some(ordering) = ordering {
            let (field, descending) = match ordering.strip_prefix('-') {
                Some(field) => (field, true),
                None => (ordering, false),
            };
            let probe = self.videos.first();
            if probe.is_some_and(|v| v.compare(v, field).is_none()) {
                return Err(HostError::BadParam {
                    key: "ordering".to_string(),
                    value: ordering.to_string(),
                });
            }
            matching.sort_by(|a, b| {
                let ord = a.compare(b, field).unwrap_or(std::cmp::Ordering::Equal);
                if descending { ord.reverse() } else { ord }
            });
        }

        let total = matching.len();
        let items: Vec<Arc<Video>> = matching
            .into_iter()
            .skip(offset)
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();

        debug!(
            "Catalog query {:?}: {} of {} matching",
            params.to_query_string(),
            items.len(),
            total
        );
        Ok(Page { items, total })
    }
}
