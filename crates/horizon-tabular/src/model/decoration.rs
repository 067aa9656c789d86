//! Row image annotations.
//!
//! Models hand out [`ImageHandle`]s; hosts decide how to load and paint them.
//! Handles are reference counted, so two handles are the "same image" exactly
//! when they share an allocation, see [`ImageHandle::same`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The kind of image a decoration refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    /// A raster bitmap (PNG, BMP, ...).
    Bitmap,
    /// A multi-resolution icon (ICO).
    Icon,
}

#[derive(Debug)]
struct ImageSource {
    kind: DecorationKind,
    path: PathBuf,
}

/// A cheaply clonable reference to a decorative image.
#[derive(Clone)]
pub struct ImageHandle {
    inner: Arc<ImageSource>,
}

impl ImageHandle {
    /// Creates a handle for an image loaded from `path`.
    pub fn new(kind: DecorationKind, path: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(ImageSource {
                kind,
                path: path.into(),
            }),
        }
    }

    /// Creates a bitmap handle.
    pub fn bitmap(path: impl Into<PathBuf>) -> Self {
        Self::new(DecorationKind::Bitmap, path)
    }

    /// Creates an icon handle.
    pub fn icon(path: impl Into<PathBuf>) -> Self {
        Self::new(DecorationKind::Icon, path)
    }

    /// Returns the image kind.
    pub fn kind(&self) -> DecorationKind {
        self.inner.kind
    }

    /// Returns the path the image is loaded from.
    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Returns `true` if both handles refer to the same image.
    pub fn same(&self, other: &ImageHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageHandle")
            .field("kind", &self.inner.kind)
            .field("path", &self.inner.path)
            .finish()
    }
}

/// The pair of images a model alternates between, by row parity.
#[derive(Debug, Clone)]
pub struct RowImages {
    even: ImageHandle,
    odd: ImageHandle,
}

impl RowImages {
    /// Creates the pair.
    pub fn new(even: ImageHandle, odd: ImageHandle) -> Self {
        Self { even, odd }
    }

    /// Returns the image for a row position. Content plays no part.
    pub fn for_row(&self, row: usize) -> ImageHandle {
        if row % 2 == 0 {
            self.even.clone()
        } else {
            self.odd.clone()
        }
    }
}
