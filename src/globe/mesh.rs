use rand::Rng;
use std::f32::consts::PI;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// CPU-side geometry ready for upload.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// UV sphere with `width_segments` around the equator and `height_segments`
/// pole to pole. Texture v runs 0 at the north pole to 1 at the south pole.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let nx = -(u * 2.0 * PI).cos() * (v * PI).sin();
            let ny = (v * PI).cos();
            let nz = (u * 2.0 * PI).sin() * (v * PI).sin();
            vertices.push(Vertex {
                position: [nx * radius, ny * radius, nz * radius],
                normal: [nx, ny, nz],
                uv: [u, v],
            });
        }
    }

    let row = ws + 1;
    let mut indices = Vec::with_capacity((ws * hs * 6) as usize);
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // the pole rows collapse to a single triangle per quad
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    MeshData { vertices, indices }
}

/// Latitude/longitude grid lines over a sphere built with the same segment
/// counts, as a line list.
pub fn sphere_wire_indices(width_segments: u32, height_segments: u32) -> Vec<u32> {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let row = ws + 1;
    let mut indices = Vec::new();
    for iy in 0..=hs {
        for ix in 0..=ws {
            let here = iy * row + ix;
            if ix < ws && iy != 0 && iy != hs {
                indices.extend_from_slice(&[here, here + 1]);
            }
            if iy < hs {
                indices.extend_from_slice(&[here, here + row]);
            }
        }
    }
    indices
}

/// Random points filling a cube of edge `spread` centered on the origin.
pub fn star_points<R: Rng + ?Sized>(count: usize, spread: f32, rng: &mut R) -> Vec<Vertex> {
    (0..count)
        .map(|_| Vertex {
            position: [
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
            ],
            normal: [0.0; 3],
            uv: [0.0; 2],
        })
        .collect()
}
