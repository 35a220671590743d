//! Instanced draw batches assembled from the scene graph.
//!
//! Nodes sharing one geometry and one material (every cloud block, every
//! hair cube) collapse into a single instanced draw call. Batches are
//! assembled once at startup — the graph never changes shape afterwards —
//! and only their instance buffers are rewritten each frame with the
//! current world transforms. Batch order follows the first-seen traversal
//! order, which is the graph's insertion order.

use std::collections::HashMap;
use std::sync::Arc;

use wgpu::util::DeviceExt;

use crate::data_structures::{
    geometry::{Geometry, Material},
    instance::InstanceRaw,
    scene_graph::{NodeId, SceneGraph},
};

/// One instanced draw: shared geometry expanded to flat-shaded vertices plus
/// a per-node instance buffer.
pub struct MeshBatch {
    vertex_buffer: wgpu::Buffer,
    num_vertices: u32,
    instance_buffer: wgpu::Buffer,
    nodes: Vec<NodeId>,
    material: Arc<Material>,
    transparent: bool,
}

pub struct SceneRenderer {
    batches: Vec<MeshBatch>,
}

impl SceneRenderer {
    pub fn new(device: &wgpu::Device, graph: &SceneGraph) -> Self {
        // Group nodes by geometry/material identity, in draw order.
        let mut slots: HashMap<(*const Geometry, *const Material), usize> = HashMap::new();
        let mut groups: Vec<(Arc<Geometry>, Arc<Material>, Vec<NodeId>)> = Vec::new();
        graph.visit(|id, node| {
            if let Some(shape) = &node.shape {
                let key = (Arc::as_ptr(&shape.geometry), Arc::as_ptr(&shape.material));
                let slot = *slots.entry(key).or_insert_with(|| {
                    groups.push((
                        Arc::clone(&shape.geometry),
                        Arc::clone(&shape.material),
                        Vec::new(),
                    ));
                    groups.len() - 1
                });
                groups[slot].2.push(id);
            }
        });

        let batches: Vec<MeshBatch> = groups
            .into_iter()
            .map(|(geometry, material, nodes)| {
                let vertices = geometry.flat_shaded_vertices();
                let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Batch Vertex Buffer"),
                    contents: bytemuck::cast_slice(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                // The node count per batch is fixed for the process lifetime,
                // so the instance buffer never has to grow.
                let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("Batch Instance Buffer"),
                    size: (nodes.len() * std::mem::size_of::<InstanceRaw>())
                        as wgpu::BufferAddress,
                    usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                MeshBatch {
                    vertex_buffer,
                    num_vertices: vertices.len() as u32,
                    instance_buffer,
                    transparent: material.is_transparent(),
                    nodes,
                    material,
                }
            })
            .collect();
        log::debug!("assembled {} instanced draw batches", batches.len());

        Self { batches }
    }

    /// Write the current world transforms into the per-batch instance buffers.
    pub fn prepare(&self, queue: &wgpu::Queue, graph: &SceneGraph) {
        for batch in &self.batches {
            let color = batch.material.to_rgba();
            let instances: Vec<InstanceRaw> = batch
                .nodes
                .iter()
                .map(|&id| graph.world_transform(id).to_raw(color))
                .collect();
            queue.write_buffer(&batch.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }
    }

    pub fn draw_opaque(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        for batch in self.batches.iter().filter(|batch| !batch.transparent) {
            draw_batch(render_pass, batch);
        }
    }

    pub fn draw_transparent(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        for batch in self.batches.iter().filter(|batch| batch.transparent) {
            draw_batch(render_pass, batch);
        }
    }

    /// Opaque batches double as the shadow casters; the semi-transparent sea
    /// only receives.
    pub fn draw_shadow_casters(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        self.draw_opaque(render_pass);
    }
}

fn draw_batch(render_pass: &mut wgpu::RenderPass<'_>, batch: &MeshBatch) {
    render_pass.set_vertex_buffer(0, batch.vertex_buffer.slice(..));
    render_pass.set_vertex_buffer(1, batch.instance_buffer.slice(..));
    render_pass.draw(0..batch.num_vertices, 0..batch.nodes.len() as u32);
}
