//! The video row type and its table setup.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};
use datagrid::TableConfig;
use datagrid::filter::FilterFieldDescriptor;
use datagrid::grid::{Alignment, ColumnDescriptor, GridRow, OrderBy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A video listing row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub views: u64,
    pub likes: u64,
    /// Length in seconds.
    pub duration: u32,
    pub published: bool,
    pub uploaded_at: DateTime<Utc>,
}

impl GridRow for Video {
    fn row_key(&self) -> String {
        self.id.to_string()
    }
}

impl Video {
    /// Creates a video with a fresh id, uploaded now.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            author: author.into(),
            views: 0,
            likes: 0,
            duration: 0,
            published: false,
            uploaded_at: Utc::now(),
        }
    }

    /// Sets view and like counts.
    pub fn with_stats(mut self, views: u64, likes: u64) -> Self {
        self.views = views;
        self.likes = likes;
        self
    }

    /// Sets the length in seconds.
    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration = seconds;
        self
    }

    /// Marks the video as published.
    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// Sets the upload time.
    pub fn uploaded_at(mut self, at: DateTime<Utc>) -> Self {
        self.uploaded_at = at;
        self
    }

    /// Value of a text field.
    pub fn text(&self, field: &str) -> Option<&str> {
        match field {
            "title" => Some(&self.title),
            "author" => Some(&self.author),
            _ => None,
        }
    }

    /// Value of a numeric field.
    pub fn number(&self, field: &str) -> Option<f64> {
        match field {
            "views" => Some(self.views as f64),
            "likes" => Some(self.likes as f64),
            "duration" => Some(f64::from(self.duration)),
            _ => None,
        }
    }

    /// Value of a boolean field.
    pub fn flag(&self, field: &str) -> Option<bool> {
        match field {
            "published" => Some(self.published),
            _ => None,
        }
    }

    /// Compares two videos on a field. `None` for fields that cannot be
    /// ordered.
    pub fn compare(&self, other: &Self, field: &str) -> Option<Ordering> {
        if let (Some(a), Some(b)) = (self.text(field), other.text(field)) {
            return Some(a.to_lowercase().cmp(&b.to_lowercase()));
        }
        if let (Some(a), Some(b)) = (self.number(field), other.number(field)) {
            return Some(a.total_cmp(&b));
        }
        if let (Some(a), Some(b)) = (self.flag(field), other.flag(field)) {
            return Some(a.cmp(&b));
        }
        match field {
            "uploaded" => Some(self.uploaded_at.cmp(&other.uploaded_at)),
            _ => None,
        }
    }
}

/// Formats seconds as `m:ss`, or `h:mm:ss` from one hour.
pub fn format_duration(seconds: u32) -> String {
    let (h, m, s) = (seconds / 3600, seconds / 60 % 60, seconds % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

/// Grid columns for videos.
pub fn columns() -> Vec<ColumnDescriptor<Video>> {
    vec![
        ColumnDescriptor::new("title", "Title", |v: &Video| v.title.clone()).orderable(),
        ColumnDescriptor::new("author", "Author", |v: &Video| v.author.clone()),
        ColumnDescriptor::new("views", "Views", |v: &Video| v.views.to_string())
            .orderable()
            .align(Alignment::Right),
        ColumnDescriptor::new("likes", "Likes", |v: &Video| v.likes.to_string())
            .orderable()
            .align(Alignment::Right),
        ColumnDescriptor::new("duration", "Length", |v: &Video| format_duration(v.duration))
            .orderable()
            .align(Alignment::Right),
        ColumnDescriptor::new("published", "Published", |v: &Video| {
            String::from(if v.published { "yes" } else { "no" })
        })
        .align(Alignment::Center),
        ColumnDescriptor::new("uploaded", "Uploaded", |v: &Video| {
            v.uploaded_at.format("%Y-%m-%d").to_string()
        })
        .orderable(),
    ]
}

/// Filterable video fields.
pub fn filter_options() -> Vec<FilterFieldDescriptor> {
    vec![
        FilterFieldDescriptor::char("title", "Title"),
        FilterFieldDescriptor::char("author", "Author"),
        FilterFieldDescriptor::number("views", "Views"),
        FilterFieldDescriptor::number("likes", "Likes"),
        FilterFieldDescriptor::number("duration", "Duration (seconds)"),
        FilterFieldDescriptor::boolean("published", "Published"),
    ]
}

/// The built-in table configuration for videos.
pub fn table_config() -> TableConfig {
    TableConfig::new(filter_options())
        .with_main_field("title")
        .with_default_ordering(OrderBy::desc("uploaded"))
}

const SAMPLE: &[(&str, &str, u64, u64, u32, bool)] = &[
    ("Cats learning to open doors", "Mina Ko", 1_204_331, 88_120, 412, true),
    ("Sourdough from scratch", "Pavel Novak", 310_442, 12_003, 1_934, true),
    ("Rust ownership in 10 minutes", "Ada Byte", 98_211, 7_480, 601, true),
    ("東京 night walk", "Kenji Mori", 542_019, 31_877, 3_721, true),
    ("Café ☕ study session", "Lena Roth", 75_338, 4_102, 7_200, true),
    ("Unboxing a 1987 synthesizer", "Omar Haddad", 22_904, 1_340, 845, true),
    ("Cat vs cucumber, slow motion", "Mina Ko", 2_871_560, 140_221, 95, true),
    ("Draft: channel trailer", "Ada Byte", 0, 0, 58, false),
    ("How bridges stay up", "Grace Lin", 640_117, 40_318, 1_122, true),
    ("Pottery wheel basics", "Sofia Reyes", 51_240, 3_977, 1_480, true),
    ("Speedrun commentary", "Tobias Berg", 189_003, 9_612, 5_402, true),
    ("Winter cycling gear", "Pavel Novak", 12_870, 611, 733, true),
    ("Knife skills for beginners", "Lena Roth", 433_502, 21_908, 960, true),
    ("Draft: Q&A outtakes", "Grace Lin", 0, 0, 1_311, false),
    ("Birdsong at dawn (1 hour)", "Kenji Mori", 88_760, 6_215, 3_600, true),
    ("Fixing a dripping tap", "Omar Haddad", 920_315, 25_007, 318, true),
    ("Cats and laser pointers", "Sofia Reyes", 701_488, 52_960, 240, true),
    ("Learning chess openings", "Tobias Berg", 265_090, 14_380, 2_105, true),
    ("Night sky timelapse", "Grace Lin", 150_772, 11_204, 182, true),
    ("Draft: studio tour", "Mina Ko", 0, 0, 905, false),
    ("Making fresh pasta", "Lena Roth", 388_146, 19_733, 1_010, true),
    ("Guitar pedal shootout", "Omar Haddad", 47_309, 2_688, 2_456, true),
    ("Tiny house build, part 3", "Pavel Novak", 1_012_884, 61_450, 1_860, true),
    ("Rust async explained", "Ada Byte", 143_920, 10_995, 2_730, true),
    ("Repotting succulents", "Sofia Reyes", 29_455, 2_001, 527, true),
];

/// A fixed set of sample videos, one upload per day going back from
/// `now`, newest first.
pub fn sample_videos(now: DateTime<Utc>) -> Vec<Video> {
    SAMPLE
        .iter()
        .enumerate()
        .map(|(i, &(title, author, views, likes, duration, published))| {
            Video::new(title, author)
                .with_stats(views, likes)
                .with_duration(duration)
                .published(published)
                .uploaded_at(now - Duration::days(i as i64))
        })
        .collect()
}
