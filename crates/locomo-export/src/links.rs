//! Links printed on the report: the explanatory video and a QR code for it.
//!
//! The QR image is produced by an external image service; only its URL is
//! built here.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub const DEFAULT_VIDEO_URL: &str = "https://www.youtube.com/watch?v=lGlh4LhFWjs";

const QR_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Everything but the RFC 3986 unreserved characters gets escaped.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLinks {
    pub video_url: String,
    pub qr_code_url: String,
}

impl ReportLinks {
    pub fn for_video(video_url: &str) -> Self {
        Self {
            video_url: video_url.to_string(),
            qr_code_url: qr_code_url(video_url),
        }
    }
}

impl Default for ReportLinks {
    fn default() -> Self {
        Self::for_video(DEFAULT_VIDEO_URL)
    }
}

/// 150×150 QR image on a white background encoding `data`.
pub fn qr_code_url(data: &str) -> String {
    format!(
        "{QR_SERVICE}?size=150x150&bgcolor=ffffff&data={}",
        utf8_percent_encode(data, UNRESERVED)
    )
}
