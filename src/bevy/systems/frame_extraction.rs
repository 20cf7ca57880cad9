//! Frame extraction system
//!
//! This module takes the frames read back from the GPU and publishes them
//! to the shared buffer served by the `frame://` protocol.

use bevy::{prelude::*, render::renderer::RenderDevice};

use crate::bevy::resources::{FrameBufferRes, MainWorldReceiver};
use crate::config::{RENDER_HEIGHT, RENDER_WIDTH};

/// Publish the newest frame received from the render world
pub fn publish_frames(receiver: Res<MainWorldReceiver>, buffer: Res<FrameBufferRes>) {
    // only the latest frame matters
    let Some(image_data) = receiver.try_iter().last() else {
        return;
    };

    let row_bytes = RENDER_WIDTH as usize * 4;
    let aligned_row_bytes = RenderDevice::align_copy_bytes_per_row(row_bytes);
    let Some(rgba) = remove_row_padding(&image_data, row_bytes, aligned_row_bytes, RENDER_HEIGHT)
    else {
        return;
    };

    if let Err(err) = buffer.0.publish(rgba) {
        warn!("Failed to publish frame: {err}");
    }
}

/// Remove GPU buffer row padding alignment, returning pure RGBA data
fn remove_row_padding(
    data: &[u8],
    row_bytes: usize,
    aligned_row_bytes: usize,
    height: u32,
) -> Option<Vec<u8>> {
    if data.len() < aligned_row_bytes * (height as usize).saturating_sub(1) + row_bytes {
        return None;
    }

    if row_bytes == aligned_row_bytes {
        return Some(data[..row_bytes * height as usize].to_vec());
    }

    Some(
        data.chunks(aligned_row_bytes)
            .take(height as usize)
            .flat_map(|row| &row[..row_bytes])
            .copied()
            .collect(),
    )
}
