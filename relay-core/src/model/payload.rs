use bytes::Bytes;
use std::str::Utf8Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Text,
    Binary,
}

/// One relayed frame. The relay never looks inside; it only keeps the frame kind
/// so text arrives as text and binary as binary.
///
/// The data is reference counted, so cloning a payload for each recipient
/// does not copy it. A `Text` payload always holds valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalPayload {
    kind: FrameKind,
    data: Bytes,
}

impl SignalPayload {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: FrameKind::Text,
            data: Bytes::from(text.into()),
        }
    }

    /// Wrap bytes that arrived as a text frame, checking they are UTF-8.
    pub fn text_from_utf8(data: Bytes) -> Result<Self, Utf8Error> {
        std::str::from_utf8(&data)?;
        Ok(Self {
            kind: FrameKind::Text,
            data,
        })
    }

    pub fn binary(data: impl Into<Bytes>) -> Self {
        Self {
            kind: FrameKind::Binary,
            data: data.into(),
        }
    }

    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    pub fn is_text(&self) -> bool {
        self.kind == FrameKind::Text
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<String> for SignalPayload {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<&str> for SignalPayload {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<Bytes> for SignalPayload {
    fn from(data: Bytes) -> Self {
        Self::binary(data)
    }
}

impl From<Vec<u8>> for SignalPayload {
    fn from(data: Vec<u8>) -> Self {
        Self::binary(data)
    }
}
