//! Image size variants recognised by the webservice.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A named image variant.
///
/// PrestaShop generates one file per image type; the webservice serves each
/// under the `<name>_default` token.
///
/// # Example
///
/// ```rust
/// use prestashop_api::ImageSize;
///
/// assert_eq!(ImageSize::default(), ImageSize::Large);
/// assert_eq!(ImageSize::Small.token(), "small_default");
///
/// let size: ImageSize = "thickbox".parse().unwrap();
/// assert_eq!(size, ImageSize::Thickbox);
///
/// let size: ImageSize = "home_default".parse().unwrap();
/// assert_eq!(size, ImageSize::Home);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImageSize {
    /// Cart thumbnail.
    Cart,
    /// Small thumbnail.
    Small,
    /// Medium thumbnail.
    Medium,
    /// Large product image.
    #[default]
    Large,
    /// Zoom image.
    Thickbox,
    /// Home page featured image.
    Home,
    /// Category listing image.
    Category,
}

impl ImageSize {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Cart,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Thickbox,
        Self::Home,
        Self::Category,
    ];

    /// Returns the short name (e.g. `large`).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Thickbox => "thickbox",
            Self::Home => "home",
            Self::Category => "category",
        }
    }

    /// Returns the path token used in image URLs (e.g. `large_default`).
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Cart => "cart_default",
            Self::Small => "small_default",
            Self::Medium => "medium_default",
            Self::Large => "large_default",
            Self::Thickbox => "thickbox_default",
            Self::Home => "home_default",
            Self::Category => "category_default",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error returned when parsing an unknown image size name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown image size '{name}'. Expected one of: cart, small, medium, large, thickbox, home, category.")]
pub struct ParseImageSizeError {
    /// The name that was provided.
    pub name: String,
}

impl FromStr for ImageSize {
    type Err = ParseImageSizeError;

    /// Parses a short name (`small`) or a token (`small_default`),
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let name = lowered.strip_suffix("_default").unwrap_or(&lowered);

        Self::ALL
            .into_iter()
            .find(|size| size.name() == name)
            .ok_or_else(|| ParseImageSizeError {
                name: s.to_string(),
            })
    }
}
