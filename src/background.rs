//! Background image handle.
//!
//! The asset loader decodes the background out of band and hands the store a
//! handle. Handles compare by identity: two handles are equal only when they
//! point at the same loaded image, no matter what the image contains.

use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Metadata of a loaded background image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BackgroundImage {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

/// Shared, identity-compared reference to a loaded background image.
#[derive(Clone)]
pub struct ImageHandle(Arc<BackgroundImage>);

impl ImageHandle {
    pub fn new(src: impl Into<String>, width: u32, height: u32) -> Self {
        Self(Arc::new(BackgroundImage {
            src: src.into(),
            width,
            height,
        }))
    }

    pub fn src(&self) -> &str {
        &self.0.src
    }

    pub fn width(&self) -> u32 {
        self.0.width
    }

    pub fn height(&self) -> u32 {
        self.0.height
    }

    pub fn image(&self) -> &BackgroundImage {
        &self.0
    }
}

impl PartialEq for ImageHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ImageHandle {}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageHandle")
            .field("src", &self.0.src)
            .field("width", &self.0.width)
            .field("height", &self.0.height)
            .finish()
    }
}

impl Serialize for ImageHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
