use serde::Deserialize;

/// One geotagged post, reduced to the fields the classifier needs.
///
/// Posts with no usable location keep the (0.0, 0.0) default and are
/// classified like any other point; posts with no body carry a single
/// space so the tag extractor sees well-formed text.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Raw wire shape of a post record. Coordinates can be found in more than
/// one place: the nested `doc.coordinates.coordinates` pair is preferred,
/// the top-level `geo.coordinates` pair is the fallback.
#[derive(Deserialize)]
struct RawPost {
    doc: Option<RawDoc>,
    geo: Option<RawGeo>,
}

#[derive(Deserialize)]
struct RawDoc {
    coordinates: Option<RawCoordinates>,
    text: Option<String>,
}

#[derive(Deserialize)]
struct RawCoordinates {
    coordinates: Option<Vec<f64>>,
}

#[derive(Deserialize)]
struct RawGeo {
    coordinates: Option<Vec<f64>>,
}

impl Post {
    /// Parse one line of the post stream.
    ///
    /// All lines but the last carry a trailing `,` separator; it is
    /// stripped before parsing. Returns None for lines that do not hold a
    /// well-formed record, which the caller skips.
    pub fn parse_line(line: &str) -> Option<Post> {
        let trimmed = line.trim_end();
        let body = trimmed.strip_suffix(',').unwrap_or(trimmed);
        let raw: RawPost = serde_json::from_str(body).ok()?;
        Some(Post::from(raw))
    }
}

impl From<RawPost> for Post {
    fn from(raw: RawPost) -> Self {
        let mut x = 0.0;
        let mut y = 0.0;
        let mut text = String::from(" ");

        if let Some(doc) = raw.doc {
            if let Some(pair) = doc.coordinates.and_then(|c| c.coordinates) {
                if pair.len() >= 2 {
                    x = pair[0];
                    y = pair[1];
                }
            }
            if let Some(body) = doc.text {
                text = body.to_lowercase();
            }
        }

        // The fallback pair is consulted only when the preferred one left
        // x at its default.
        if x == 0.0 {
            if let Some(pair) = raw.geo.and_then(|g| g.coordinates) {
                if pair.len() >= 2 {
                    x = pair[0];
                    y = pair[1];
                }
            }
        }

        Post { x, y, text }
    }
}
