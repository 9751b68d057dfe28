use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::extract::extract_urls;
use crate::media::Classification;

/// Anything that may carry a URL string.
///
/// Values without a string URL (a JSON number, `None`, ...) return `None`,
/// which every validator treats as a shape mismatch.
pub trait UrlSource {
    fn url_str(&self) -> Option<&str>;
}

impl UrlSource for str {
    fn url_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl UrlSource for String {
    fn url_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: UrlSource + ?Sized> UrlSource for &T {
    fn url_str(&self) -> Option<&str> {
        (**self).url_str()
    }
}

impl<T: UrlSource> UrlSource for Option<T> {
    fn url_str(&self) -> Option<&str> {
        self.as_ref().and_then(UrlSource::url_str)
    }
}

impl UrlSource for serde_json::Value {
    fn url_str(&self) -> Option<&str> {
        self.as_str()
    }
}

impl UrlSource for UrlRecord {
    fn url_str(&self) -> Option<&str> {
        Some(&self.url)
    }
}

/// An extracted URL together with where it came from.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct UrlRecord {
    id: String,
    parent_id: String,
    url: String,
    // display text of the source fragment
    title: String,
    upvotes: i64,
    upvote_ratio: Option<f64>,
    created_utc: DateTime<Utc>,
}

impl UrlRecord {
    pub fn new(
        id: impl Into<String>,
        parent_id: impl Into<String>,
        url: impl Into<String>,
        title: impl Into<String>,
        upvotes: i64,
        upvote_ratio: Option<f64>,
        created_utc: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.into(),
            url: url.into(),
            title: title.into(),
            upvotes,
            upvote_ratio,
            created_utc,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parent_id(&self) -> &str {
        &self.parent_id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn upvotes(&self) -> i64 {
        self.upvotes
    }

    pub fn upvote_ratio(&self) -> Option<f64> {
        self.upvote_ratio
    }

    pub fn created_utc(&self) -> DateTime<Utc> {
        self.created_utc
    }
}

/// A classified URL paired with its untouched provenance record.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ClassifiedRecord {
    pub classification: Classification,
    pub record: UrlRecord,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FragmentKind {
    Post {
        title: String,
        #[serde(default)]
        link_url: Option<String>,
        #[serde(default)]
        upvote_ratio: Option<f64>,
    },
    Comment,
}

/// A post or comment as handed over by a feed fetcher.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TextFragment {
    pub id: String,
    pub parent_id: String,
    #[serde(flatten)]
    pub kind: FragmentKind,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub upvotes: i64,
    pub created_utc: DateTime<Utc>,
}

impl TextFragment {
    pub fn post(
        id: impl Into<String>,
        title: impl Into<String>,
        link_url: Option<String>,
        body: impl Into<String>,
        upvotes: i64,
        upvote_ratio: Option<f64>,
        created_utc: DateTime<Utc>,
    ) -> Self {
        let id = id.into();
        Self {
            parent_id: id.clone(),
            id,
            kind: FragmentKind::Post {
                title: title.into(),
                link_url,
                upvote_ratio,
            },
            body: body.into(),
            upvotes,
            created_utc,
        }
    }

    pub fn comment(
        id: impl Into<String>,
        parent_id: impl Into<String>,
        body: impl Into<String>,
        upvotes: i64,
        created_utc: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.into(),
            kind: FragmentKind::Comment,
            body: body.into(),
            upvotes,
            created_utc,
        }
    }

    /// Produces one record per URL carried by this fragment.
    ///
    /// A post yields its own link first, then every URL found in its body, all
    /// titled with the post title. A comment has no title of its own, so its
    /// records carry the comment body as the display text.
    pub fn url_records(&self) -> Vec<UrlRecord> {
        let (title, link_url, upvote_ratio) = match &self.kind {
            FragmentKind::Post {
                title,
                link_url,
                upvote_ratio,
            } => (title.as_str(), link_url.as_deref(), *upvote_ratio),
            FragmentKind::Comment => (self.body.as_str(), None, None),
        };

        link_url
            .into_iter()
            .chain(extract_urls(&self.body))
            .map(|url| {
                UrlRecord::new(
                    self.id.as_str(),
                    self.parent_id.as_str(),
                    url,
                    title,
                    self.upvotes,
                    upvote_ratio,
                    self.created_utc,
                )
            })
            .collect()
    }
}
