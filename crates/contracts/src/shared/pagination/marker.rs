use serde::{Deserialize, Serialize};

/// Which side of the current page an elided run sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EllipsisPosition {
    Start,
    End,
}

impl EllipsisPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            EllipsisPosition::Start => "start",
            EllipsisPosition::End => "end",
        }
    }
}

/// One entry of a rendered page list
///
/// On the wire a page is a plain number and an elision marker is the string
/// `"ellipsis-start"` or `"ellipsis-end"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMarker", into = "RawMarker")]
pub enum PageMarker {
    Number(i64),
    Ellipsis(EllipsisPosition),
}

impl PageMarker {
    pub fn is_number(&self) -> bool {
        matches!(self, PageMarker::Number(_))
    }

    /// Page number, if this marker is not an ellipsis
    pub fn page(&self) -> Option<i64> {
        match self {
            PageMarker::Number(n) => Some(*n),
            PageMarker::Ellipsis(_) => None,
        }
    }

    /// Stable key for keyed list rendering
    pub fn key(&self) -> String {
        match self {
            PageMarker::Number(n) => n.to_string(),
            PageMarker::Ellipsis(pos) => format!("ellipsis-{}", pos.as_str()),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawMarker {
    Number(i64),
    Label(String),
}

impl From<PageMarker> for RawMarker {
    fn from(marker: PageMarker) -> Self {
        match marker {
            PageMarker::Number(n) => RawMarker::Number(n),
            PageMarker::Ellipsis(_) => RawMarker::Label(marker.key()),
        }
    }
}

impl TryFrom<RawMarker> for PageMarker {
    type Error = String;

    fn try_from(raw: RawMarker) -> Result<Self, Self::Error> {
        match raw {
            RawMarker::Number(n) => Ok(PageMarker::Number(n)),
            RawMarker::Label(label) => match label.as_str() {
                "ellipsis-start" => Ok(PageMarker::Ellipsis(EllipsisPosition::Start)),
                "ellipsis-end" => Ok(PageMarker::Ellipsis(EllipsisPosition::End)),
                other => Err(format!("Unknown page marker: {}", other)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_wire_format() {
        let markers = vec![
            PageMarker::Number(1),
            PageMarker::Ellipsis(EllipsisPosition::Start),
            PageMarker::Number(5),
            PageMarker::Ellipsis(EllipsisPosition::End),
        ];
        let json = serde_json::to_string(&markers).unwrap();
        assert_eq!(json, r#"[1,"ellipsis-start",5,"ellipsis-end"]"#);

        let back: Vec<PageMarker> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, markers);
    }

    #[test]
    fn test_unknown_label_rejected() {
        let result: Result<PageMarker, _> = serde_json::from_str(r#""ellipsis-middle""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_page_accessor() {
        assert_eq!(PageMarker::Number(3).page(), Some(3));
        assert_eq!(PageMarker::Ellipsis(EllipsisPosition::End).page(), None);
        assert!(!PageMarker::Ellipsis(EllipsisPosition::Start).is_number());
    }
}
