//! Array sampling.
//!
//! The fragment stage picks one texture out of the bound array by integer
//! index and samples it with the single shared sampler. [`TextureArray`] is
//! that seam; [`CpuTextureArray`] is the host-side reference used by tests
//! and tooling.
//!
//! An index outside the array is not an error. The CPU reference returns
//! transparent black for it, the way robust buffer access reads zero.

use glam::{Vec2, Vec4};

use crate::config::{AddressMode, FilterMode, SamplerConfig};
use crate::error::{RenderError, RenderResult};
use crate::vertex::TextureIndex;

/// A bound array of 2D textures.
pub trait TextureArray {
    /// Number of textures in the array.
    fn layer_count(&self) -> usize;

    /// Samples texture `index` at `uv` with the given sampler state.
    fn sample(&self, index: TextureIndex, uv: Vec2, sampler: &SamplerConfig) -> Vec4;
}

/// One RGBA texture with float texels in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct TextureLayer {
    width: u32,
    height: u32,
    texels: Vec<Vec4>,
}

impl TextureLayer {
    /// Builds a layer from tightly packed RGBA8 rows, top row first.
    ///
    /// # Errors
    ///
    /// Returns `EmptyTexture` for a zero dimension and `TexelDataMismatch`
    /// if `rgba.len() != width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyTexture);
        }

        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(RenderError::TexelDataMismatch {
                expected,
                actual: rgba.len(),
            });
        }

        let texels = rgba
            .chunks_exact(4)
            .map(|px| {
                Vec4::new(
                    f32::from(px[0]) / 255.0,
                    f32::from(px[1]) / 255.0,
                    f32::from(px[2]) / 255.0,
                    f32::from(px[3]) / 255.0,
                )
            })
            .collect();

        Ok(Self { width, height, texels })
    }

    /// A 1×1 layer of a single color.
    #[must_use]
    pub fn solid(color: Vec4) -> Self {
        Self {
            width: 1,
            height: 1,
            texels: vec![color],
        }
    }

    /// Width in texels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in texels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Reads one texel after addressing the integer coordinates.
    fn texel(&self, x: i64, y: i64, mode: AddressMode) -> Vec4 {
        let x = address(x, i64::from(self.width), mode);
        let y = address(y, i64::from(self.height), mode);
        // address() keeps both coordinates inside the layer
        self.texels[y * self.width as usize + x]
    }

    /// Samples at a normalized coordinate.
    ///
    /// Texel coordinates that are not finite (NaN, or overflowing once
    /// scaled) sample as 0. Huge finite ones saturate at the `i64` range
    /// before addressing.
    #[must_use]
    pub fn sample(&self, uv: Vec2, sampler: &SamplerConfig) -> Vec4 {
        let px = finite_or_zero(uv.x * self.width as f32);
        let py = finite_or_zero(uv.y * self.height as f32);
        let mode = sampler.address_mode;

        // No LOD is computed, so the magnification filter always applies.
        match sampler.mag_filter {
            FilterMode::Nearest => self.texel(px.floor() as i64, py.floor() as i64, mode),
            FilterMode::Linear => {
                let fx = px - 0.5;
                let fy = py - 0.5;
                let x0 = fx.floor();
                let y0 = fy.floor();
                // Past 2^24 every f32 is an integer, so the weights are exact zeros.
                let tx = fx - x0;
                let ty = fy - y0;
                let (x0, y0) = (x0 as i64, y0 as i64);
                let (x1, y1) = (x0.saturating_add(1), y0.saturating_add(1));

                let top = self.texel(x0, y0, mode).lerp(self.texel(x1, y0, mode), tx);
                let bottom = self.texel(x0, y1, mode).lerp(self.texel(x1, y1, mode), tx);
                top.lerp(bottom, ty)
            }
        }
    }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// Resolves an integer texel coordinate into `0..size`.
fn address(coord: i64, size: i64, mode: AddressMode) -> usize {
    let resolved = match mode {
        AddressMode::ClampToEdge => coord.clamp(0, size - 1),
        AddressMode::Repeat => coord.rem_euclid(size),
        AddressMode::MirrorRepeat => {
            let period = coord.rem_euclid(size * 2);
            if period >= size {
                size * 2 - 1 - period
            } else {
                period
            }
        }
    };
    // resolved is in 0..size, and size came from a u32
    resolved as usize
}

/// Host-side texture array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuTextureArray {
    layers: Vec<TextureLayer>,
}

impl CpuTextureArray {
    /// Creates an array from layers; layer `i` answers texture index `i`.
    #[must_use]
    pub fn new(layers: Vec<TextureLayer>) -> Self {
        Self { layers }
    }

    /// Appends a layer and returns its index.
    ///
    /// # Errors
    ///
    /// Returns `TextureIndexOverflow` if the new layer's index does not fit
    /// a [`TextureIndex`]; the array is left unchanged.
    pub fn push(&mut self, layer: TextureLayer) -> RenderResult<TextureIndex> {
        let index = layer_index(self.layers.len())?;
        self.layers.push(layer);
        Ok(index)
    }

    /// Looks up a layer by shader-side index.
    #[must_use]
    pub fn layer(&self, index: TextureIndex) -> Option<&TextureLayer> {
        usize::try_from(index).ok().and_then(|i| self.layers.get(i))
    }
}

fn layer_index(position: usize) -> RenderResult<TextureIndex> {
    TextureIndex::try_from(position).map_err(|_| RenderError::TextureIndexOverflow(position))
}

impl TextureArray for CpuTextureArray {
    fn layer_count(&self) -> usize {
        self.layers.len()
    }

    fn sample(&self, index: TextureIndex, uv: Vec2, sampler: &SamplerConfig) -> Vec4 {
        self.layer(index)
            .map_or(Vec4::ZERO, |layer| layer.sample(uv, sampler))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2×2 checker: red, green / blue, white.
    fn checker() -> TextureLayer {
        #[rustfmt::skip]
        let rgba = [
            255, 0, 0, 255,     0, 255, 0, 255,
            0, 0, 255, 255,     255, 255, 255, 255,
        ];
        TextureLayer::from_rgba8(2, 2, &rgba).unwrap()
    }

    #[test]
    fn test_from_rgba8_validates_length() {
        assert_eq!(
            TextureLayer::from_rgba8(2, 2, &[0; 12]),
            Err(RenderError::TexelDataMismatch { expected: 16, actual: 12 })
        );
        assert_eq!(TextureLayer::from_rgba8(0, 4, &[]), Err(RenderError::EmptyTexture));
    }

    #[test]
    fn test_nearest_sampling() {
        let layer = checker();
        let sampler = SamplerConfig::default();

        assert_eq!(layer.sample(Vec2::new(0.25, 0.25), &sampler), Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(layer.sample(Vec2::new(0.75, 0.25), &sampler), Vec4::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(layer.sample(Vec2::new(0.25, 0.75), &sampler), Vec4::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(layer.sample(Vec2::new(0.75, 0.75), &sampler), Vec4::ONE);
    }

    #[test]
    fn test_clamp_to_edge() {
        let layer = checker();
        let sampler = SamplerConfig::default();

        assert_eq!(layer.sample(Vec2::new(-3.0, 0.25), &sampler), Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(layer.sample(Vec2::new(1.0, 1.0), &sampler), Vec4::ONE);
    }

    #[test]
    fn test_repeat_and_mirror() {
        let layer = checker();
        let repeat = SamplerConfig {
            address_mode: AddressMode::Repeat,
            ..SamplerConfig::default()
        };
        let mirror = SamplerConfig {
            address_mode: AddressMode::MirrorRepeat,
            ..SamplerConfig::default()
        };

        // u = 1.25 → texel 2: repeat wraps to column 0, mirror reflects to column 1
        assert_eq!(layer.sample(Vec2::new(1.25, 0.25), &repeat), Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(layer.sample(Vec2::new(1.25, 0.25), &mirror), Vec4::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn test_linear_blends_at_texel_boundary() {
        let layer = checker();
        let sampler = SamplerConfig {
            mag_filter: FilterMode::Linear,
            ..SamplerConfig::default()
        };

        // Halfway between the red and green texel centers on the top row
        let c = layer.sample(Vec2::new(0.5, 0.25), &sampler);
        assert!((c.x - 0.5).abs() < 1e-6);
        assert!((c.y - 0.5).abs() < 1e-6);
        assert!(c.z.abs() < 1e-6);
        assert!((c.w - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_index_is_transparent_black() {
        let array = CpuTextureArray::new(vec![TextureLayer::solid(Vec4::ONE)]);
        let sampler = SamplerConfig::default();

        assert_eq!(array.sample(0, Vec2::splat(0.5), &sampler), Vec4::ONE);
        assert_eq!(array.sample(1, Vec2::splat(0.5), &sampler), Vec4::ZERO);
        assert_eq!(array.sample(-1, Vec2::splat(0.5), &sampler), Vec4::ZERO);
    }

    #[test]
    fn test_push_returns_index() {
        let mut array = CpuTextureArray::default();
        assert_eq!(array.push(TextureLayer::solid(Vec4::ONE)), Ok(0));
        assert_eq!(array.push(TextureLayer::solid(Vec4::ZERO)), Ok(1));
        assert_eq!(array.layer_count(), 2);
    }

    #[test]
    fn test_layer_index_overflow() {
        let max = TextureIndex::MAX as usize;
        assert_eq!(layer_index(max), Ok(TextureIndex::MAX));
        assert_eq!(layer_index(max + 1), Err(RenderError::TextureIndexOverflow(max + 1)));
    }

    #[test]
    fn test_huge_and_non_finite_uv_do_not_panic() {
        let layers = [TextureLayer::solid(Vec4::ONE), checker()];
        let coords = [
            Vec2::new(1e20, 0.5),
            Vec2::new(0.5, -1e20),
            Vec2::splat(f32::MAX),
            Vec2::splat(f32::MIN),
            Vec2::new(f32::INFINITY, f32::NEG_INFINITY),
            Vec2::splat(f32::NAN),
        ];

        for address_mode in [AddressMode::ClampToEdge, AddressMode::Repeat, AddressMode::MirrorRepeat] {
            for mag_filter in [FilterMode::Nearest, FilterMode::Linear] {
                let sampler = SamplerConfig {
                    address_mode,
                    mag_filter,
                    ..SamplerConfig::default()
                };
                for layer in &layers {
                    for uv in coords {
                        let c = layer.sample(uv, &sampler);
                        assert!(
                            c.is_finite() && c.min_element() >= 0.0 && c.max_element() <= 1.0,
                            "{address_mode:?}/{mag_filter:?} at {uv:?} gave {c:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_linear_on_solid_is_exact_far_away() {
        let layer = TextureLayer::solid(Vec4::ONE);
        let sampler = SamplerConfig {
            mag_filter: FilterMode::Linear,
            ..SamplerConfig::default()
        };
        assert_eq!(layer.sample(Vec2::new(1e20, 0.5), &sampler), Vec4::ONE);
        assert_eq!(layer.sample(Vec2::splat(f32::NAN), &sampler), Vec4::ONE);
    }
}
