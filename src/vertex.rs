use nalgebra::{Point2, Vector3};

use crate::attribute::{Normal, Position, Texcoord};

/// A welded output vertex: one per distinct face corner token.
///
/// Optional attributes a corner does not reference are stored as zeroed sentinels, with the
/// matching `has_*` flag cleared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeVertex {
    pub position: Position,
    pub texcoord: Texcoord,
    pub normal: Normal,
    pub has_texcoord: bool,
    pub has_normal: bool,
}

impl CompositeVertex {
    pub fn new(position: Position, texcoord: Option<Texcoord>, normal: Option<Normal>) -> Self {
        Self {
            position,
            texcoord: texcoord.unwrap_or_else(Point2::origin),
            normal: normal.unwrap_or_else(Vector3::zeros),
            has_texcoord: texcoord.is_some(),
            has_normal: normal.is_some(),
        }
    }

    /// The texcoord, if the source corner referenced one.
    #[inline]
    pub fn texcoord(&self) -> Option<&Texcoord> {
        self.has_texcoord.then_some(&self.texcoord)
    }

    /// The normal, if the source corner referenced one.
    #[inline]
    pub fn normal(&self) -> Option<&Normal> {
        self.has_normal.then_some(&self.normal)
    }

    /// Narrow to the layout uploaded to the GPU.
    pub fn to_gpu(&self) -> GpuVertex {
        GpuVertex {
            position: [
                self.position.x as f32,
                self.position.y as f32,
                self.position.z as f32,
            ],
            texcoord: [self.texcoord.x as f32, self.texcoord.y as f32],
            normal: [
                self.normal.x as f32,
                self.normal.y as f32,
                self.normal.z as f32,
            ],
            textured: self.has_texcoord as i32,
            has_normal: self.has_normal as i32,
        }
    }
}

/// Interleaved vertex record as read by the renderer's vertex shader.
///
/// | attribute | offset | format |
/// |-----------|--------|--------|
/// | position  | 0      | 3 × f32 |
/// | texcoord  | 12     | 2 × f32 |
/// | normal    | 20     | 3 × f32 |
/// | textured  | 32     | i32 |
/// | has_normal| 36     | i32 |
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub texcoord: [f32; 2],
    pub normal: [f32; 3],
    pub textured: i32,
    pub has_normal: i32,
}

impl GpuVertex {
    /// Distance in bytes between consecutive vertices in a buffer.
    pub const STRIDE: usize = std::mem::size_of::<Self>();
}

static_assertions::const_assert_eq!(std::mem::size_of::<GpuVertex>(), 40);
static_assertions::const_assert_eq!(std::mem::align_of::<GpuVertex>(), 4);
static_assertions::const_assert_eq!(std::mem::offset_of!(GpuVertex, texcoord), 12);
static_assertions::const_assert_eq!(std::mem::offset_of!(GpuVertex, normal), 20);
static_assertions::const_assert_eq!(std::mem::offset_of!(GpuVertex, textured), 32);
static_assertions::const_assert_eq!(std::mem::offset_of!(GpuVertex, has_normal), 36);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels() {
        let v = CompositeVertex::new(nalgebra::point![1.0, 2.0, 3.0], None, None);
        assert_eq!(v.texcoord, Point2::origin());
        assert_eq!(v.normal, Vector3::zeros());
        assert!(!v.has_texcoord);
        assert!(!v.has_normal);
        assert_eq!(v.texcoord(), None);
        assert_eq!(v.normal(), None);
    }

    #[test]
    fn gpu_flags() {
        let v = CompositeVertex::new(
            nalgebra::point![1.0, 2.0, 3.0],
            Some(nalgebra::point![0.5, 0.25]),
            None,
        );
        let gpu = v.to_gpu();
        assert_eq!(gpu.position, [1.0, 2.0, 3.0]);
        assert_eq!(gpu.texcoord, [0.5, 0.25]);
        assert_eq!(gpu.normal, [0.0; 3]);
        assert_eq!((gpu.textured, gpu.has_normal), (1, 0));
        assert_eq!(GpuVertex::STRIDE, 40);
    }
}
