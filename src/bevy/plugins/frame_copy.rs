//! GPU to CPU frame copy
//!
//! A render-graph node copies the offscreen target into a mappable buffer
//! after the camera driver runs; the buffer is then read back in the render
//! world and sent to the main world over a channel.

use bevy::{
    prelude::*,
    render::{
        render_asset::RenderAssets,
        render_graph::{self, NodeRunError, RenderGraph, RenderGraphContext, RenderLabel},
        render_resource::{
            Buffer, BufferDescriptor, BufferUsages, CommandEncoderDescriptor, Extent3d, MapMode,
            PollType, TexelCopyBufferInfo, TexelCopyBufferLayout,
        },
        renderer::{RenderContext, RenderDevice, RenderQueue},
        texture::GpuImage,
        Extract, Render, RenderApp, RenderSystems,
    },
};
use std::num::NonZero;

use crate::bevy::resources::{MainWorldReceiver, RenderWorldSender};

/// Installs the copy node and the channel between render and main world
pub struct FrameCopyPlugin;

impl Plugin for FrameCopyPlugin {
    fn build(&self, app: &mut App) {
        let (s, r) = crossbeam_channel::unbounded();

        let render_app = app
            .insert_resource(MainWorldReceiver(r))
            .sub_app_mut(RenderApp);

        let mut graph = render_app.world_mut().resource_mut::<RenderGraph>();
        graph.add_node(FrameCopy, FrameCopyDriver);
        graph.add_node_edge(bevy::render::graph::CameraDriverLabel, FrameCopy);

        render_app
            .insert_resource(RenderWorldSender(s))
            .add_systems(ExtractSchedule, frame_copier_extract)
            .add_systems(Render, receive_frame_from_buffer.after(RenderSystems::Render));
    }
}

#[derive(Clone, Default, Resource, Deref, DerefMut)]
struct FrameCopiers(Vec<FrameCopier>);

/// Copies `src_image` into a CPU-readable buffer every frame
#[derive(Clone, Component)]
pub struct FrameCopier {
    buffer: Buffer,
    src_image: Handle<Image>,
}

impl FrameCopier {
    pub fn new(src_image: Handle<Image>, size: Extent3d, render_device: &RenderDevice) -> Self {
        let padded_bytes_per_row = RenderDevice::align_copy_bytes_per_row(size.width as usize * 4);

        let buffer = render_device.create_buffer(&BufferDescriptor {
            label: Some("frame_copy_buffer"),
            size: padded_bytes_per_row as u64 * size.height as u64,
            usage: BufferUsages::MAP_READ | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self { buffer, src_image }
    }
}

fn frame_copier_extract(mut commands: Commands, copiers: Extract<Query<&FrameCopier>>) {
    commands.insert_resource(FrameCopiers(copiers.iter().cloned().collect()));
}

#[derive(Debug, PartialEq, Eq, Clone, Hash, RenderLabel)]
struct FrameCopy;

#[derive(Default)]
struct FrameCopyDriver;

impl render_graph::Node for FrameCopyDriver {
    fn run(
        &self,
        _graph: &mut RenderGraphContext,
        render_context: &mut RenderContext,
        world: &World,
    ) -> Result<(), NodeRunError> {
        let (Some(copiers), Some(gpu_images), Some(render_queue)) = (
            world.get_resource::<FrameCopiers>(),
            world.get_resource::<RenderAssets<GpuImage>>(),
            world.get_resource::<RenderQueue>(),
        ) else {
            return Ok(());
        };

        for copier in copiers.iter() {
            // not uploaded yet on the first frames
            let Some(src_image) = gpu_images.get(&copier.src_image) else {
                continue;
            };
            let Some(block_size) = src_image.texture_format.block_copy_size(None) else {
                continue;
            };
            let block_dimensions = src_image.texture_format.block_dimensions();
            let padded_bytes_per_row = RenderDevice::align_copy_bytes_per_row(
                (src_image.size.width as usize / block_dimensions.0 as usize) * block_size as usize,
            );
            let Some(bytes_per_row) = NonZero::<u32>::new(padded_bytes_per_row as u32) else {
                continue;
            };

            let mut encoder = render_context
                .render_device()
                .create_command_encoder(&CommandEncoderDescriptor::default());

            encoder.copy_texture_to_buffer(
                src_image.texture.as_image_copy(),
                TexelCopyBufferInfo {
                    buffer: &copier.buffer,
                    layout: TexelCopyBufferLayout {
                        offset: 0,
                        bytes_per_row: Some(bytes_per_row.into()),
                        rows_per_image: None,
                    },
                },
                src_image.size,
            );

            render_queue.submit(std::iter::once(encoder.finish()));
        }

        Ok(())
    }
}

fn receive_frame_from_buffer(
    copiers: Res<FrameCopiers>,
    render_device: Res<RenderDevice>,
    sender: Res<RenderWorldSender>,
) {
    for copier in copiers.iter() {
        let buffer_slice = copier.buffer.slice(..);

        let (s, r) = crossbeam_channel::bounded(1);
        buffer_slice.map_async(MapMode::Read, move |result| {
            let _ = s.send(result);
        });

        if let Err(err) = render_device.poll(PollType::wait()) {
            warn!("Failed to poll device for frame readback: {err}");
            return;
        }

        match r.recv() {
            Ok(Ok(())) => {
                let _ = sender.send(buffer_slice.get_mapped_range().to_vec());
                copier.buffer.unmap();
            }
            Ok(Err(err)) => warn!("Failed to map frame buffer: {err}"),
            Err(_) => warn!("Frame buffer mapping was dropped"),
        }
    }
}
