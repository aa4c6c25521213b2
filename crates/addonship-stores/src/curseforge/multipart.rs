//! Multipart upload request building
//!
//! The upload endpoint's multipart parser expects the closing boundary to
//! appear inside the file part as well, so `\n--<boundary>--` is written
//! after the payload bytes and the form then closes normally. Uploads
//! without it are rejected.
// TODO: re-test against the live upload endpoint and drop the inner
// trailer once the service accepts a standard body.

use bytes::Bytes;
use futures::stream::{self, Stream, StreamExt};
use reqwest::multipart::{Form, Part};
use reqwest::Body;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;
use tracing::debug;

use crate::error::Result;
use crate::traits::Payload;
use crate::types::ReleaseFileMetadata;

/// Form field holding the file content
pub const FILE_FIELD: &str = "file";

/// MIME type of the file part
pub const FILE_MIME: &str = "application/octet-stream";

/// A ready-to-send upload body
pub struct UploadRequest {
    form: Form,
    boundary: String,
}

impl UploadRequest {
    /// Build the form: one text field per metadata entry, then the file part
    ///
    /// The payload is not read here; it is streamed when the request is sent.
    pub fn build(
        metadata: &ReleaseFileMetadata,
        file_name: &str,
        payload: Payload,
    ) -> Result<Self> {
        let mut form = Form::new();
        let boundary = form.boundary().to_string();

        let fields = metadata.form_fields()?;
        debug!(field_count = fields.len(), "adding metadata fields");
        for (name, value) in fields {
            form = form.text(name, value);
        }

        let body = Body::wrap_stream(file_part_stream(payload, &boundary));
        let part = Part::stream(body)
            .file_name(file_name.to_string())
            .mime_str(FILE_MIME)?;

        Ok(Self {
            form: form.part(FILE_FIELD, part),
            boundary,
        })
    }

    /// Boundary token separating the parts
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value of the `Content-Type` header for this body
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn into_form(self) -> Form {
        self.form
    }
}

/// Bytes appended to the file content inside the file part
pub fn inner_trailer(boundary: &str) -> Bytes {
    Bytes::from(format!("\n--{}--", boundary))
}

/// File part content: the payload followed by [`inner_trailer`]
pub fn file_part_stream<R>(
    payload: R,
    boundary: &str,
) -> impl Stream<Item = std::io::Result<Bytes>> + Send + Sync + 'static
where
    R: AsyncRead + Send + Sync + Unpin + 'static,
{
    let trailer = inner_trailer(boundary);
    ReaderStream::new(payload).chain(stream::iter([Ok::<_, std::io::Error>(trailer)]))
}
