use std::fmt::{Display, Formatter};

/// The resource kinds the console administers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Movie,
    CarouselImage,
    Advertisement,
    VideoAd,
}

impl ResourceKind {
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Movie => "movie",
            ResourceKind::CarouselImage => "carousel entry",
            ResourceKind::Advertisement => "advertisement",
            ResourceKind::VideoAd => "video ad",
        }
    }

    /// Plural form used in list headers.
    pub fn label_plural(self) -> &'static str {
        match self {
            ResourceKind::Movie => "movies",
            ResourceKind::CarouselImage => "carousel entries",
            ResourceKind::Advertisement => "advertisements",
            ResourceKind::VideoAd => "video ads",
        }
    }

    /// Whether this kind carries an active/disabled lifecycle status.
    pub fn has_status(self) -> bool {
        matches!(self, ResourceKind::Advertisement | ResourceKind::VideoAd)
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
