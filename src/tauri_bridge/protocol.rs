//! Custom protocol handlers for efficient data transfer
//!
//! This module implements the `frame://` custom protocol for direct binary
//! transfer of render frames, bypassing Tauri's IPC JSON serialization.

use image::{codecs::jpeg::JpegEncoder, ImageBuffer, ImageEncoder, Rgba};
use tauri::http::Response as HttpResponse;
use tracing::{trace, warn};

use super::shared_state::{SharedFrameBuffer, SharedViewerStatus};
use crate::config::{compression::JPEG_QUALITY, RENDER_HEIGHT, RENDER_WIDTH};

type Response = HttpResponse<Vec<u8>>;

/// Handle requests to the custom `frame://` protocol
///
/// Supported endpoints:
/// - `frame` or `frame.jpg`: JPEG-compressed frame
/// - `frame.raw`: Raw RGBA frame
/// - `state`: the current [`ViewerStatus`](super::shared_state::ViewerStatus) as JSON
pub fn handle_frame_protocol(
    uri_path: &str,
    buffer: &SharedFrameBuffer,
    status: &SharedViewerStatus,
) -> Response {
    let resource = uri_path.trim_start_matches('/');
    trace!(resource, "frame protocol request");

    match resource {
        "frame" | "frame.jpg" => handle_jpeg_frame(buffer),
        "frame.raw" => handle_raw_frame(buffer),
        "state" => handle_state(status),
        _ => plain(404, "Not Found"),
    }
}

fn plain(status: u16, message: &str) -> Response {
    HttpResponse::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .body(message.as_bytes().to_vec())
        .unwrap_or_default()
}

fn frame_response(content_type: &str, body: Vec<u8>) -> Response {
    HttpResponse::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Cache-Control", "no-store")
        .header("X-Frame-Width", RENDER_WIDTH.to_string())
        .header("X-Frame-Height", RENDER_HEIGHT.to_string())
        .header("Access-Control-Allow-Origin", "*")
        .header(
            "Access-Control-Expose-Headers",
            "X-Frame-Width, X-Frame-Height",
        )
        .body(body)
        .unwrap_or_default()
}

/// Compresses one RGBA8 frame to JPEG, dropping the alpha channel.
pub fn encode_jpeg(rgba: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>, image::ImageError> {
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(width, height, rgba).ok_or_else(|| {
            image::ImageError::Parameter(image::error::ParameterError::from_kind(
                image::error::ParameterErrorKind::DimensionMismatch,
            ))
        })?;
    let rgb_img = image::DynamicImage::ImageRgba8(img).to_rgb8();

    let mut jpeg_data = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg_data, JPEG_QUALITY).write_image(
        rgb_img.as_raw(),
        width,
        height,
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(jpeg_data)
}

fn handle_jpeg_frame(buffer: &SharedFrameBuffer) -> Response {
    match buffer.latest() {
        Ok(Some(rgba)) => match encode_jpeg(rgba, RENDER_WIDTH, RENDER_HEIGHT) {
            Ok(jpeg) => frame_response("image/jpeg", jpeg),
            Err(err) => {
                warn!(%err, "jpeg encoding failed");
                plain(500, "Encoding failed")
            }
        },
        Ok(None) => plain(503, "Frame not ready"),
        Err(err) => plain(500, &err.to_string()),
    }
}

fn handle_raw_frame(buffer: &SharedFrameBuffer) -> Response {
    match buffer.latest() {
        Ok(Some(rgba)) => frame_response("application/octet-stream", rgba),
        Ok(None) => plain(503, "Frame not ready"),
        Err(err) => plain(500, &err.to_string()),
    }
}

fn handle_state(status: &SharedViewerStatus) -> Response {
    let snapshot = match status.snapshot() {
        Ok(snapshot) => snapshot,
        Err(err) => return plain(500, &err.to_string()),
    };
    let json = serde_json::to_vec(&snapshot).unwrap_or_default();

    HttpResponse::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Cache-Control", "no-store")
        .header("Access-Control-Allow-Origin", "*")
        .body(json)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_unavailable_until_published() {
        let buffer = SharedFrameBuffer::default();
        let status = SharedViewerStatus::default();
        assert_eq!(handle_frame_protocol("/frame", &buffer, &status).status(), 503);
        assert_eq!(handle_frame_protocol("/frame.raw", &buffer, &status).status(), 503);
    }

    #[test]
    fn raw_frame_is_returned_verbatim() {
        let buffer = SharedFrameBuffer::default();
        let status = SharedViewerStatus::default();
        buffer.publish(vec![7; 16]).unwrap();

        let response = handle_frame_protocol("/frame.raw", &buffer, &status);
        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), &vec![7; 16]);
    }

    #[test]
    fn jpeg_encoding_produces_jpeg_magic() {
        let jpeg = encode_jpeg(vec![200; 8 * 8 * 4], 8, 8).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn jpeg_encoding_rejects_short_buffers() {
        assert!(encode_jpeg(vec![0; 3], 8, 8).is_err());
    }

    #[test]
    fn state_endpoint_serves_json() {
        let buffer = SharedFrameBuffer::default();
        let status = SharedViewerStatus::default();
        let response = handle_frame_protocol("/state", &buffer, &status);
        assert_eq!(response.status(), 200);
        let json: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(json["route"], "home");
    }

    #[test]
    fn unknown_resources_are_not_found() {
        let buffer = SharedFrameBuffer::default();
        let status = SharedViewerStatus::default();
        assert_eq!(handle_frame_protocol("/stats", &buffer, &status).status(), 404);
    }
}
