use super::helpers;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch and decode a remote image into an `ImageBitmap`.
///
/// Network failures and non-2xx responses are errors; the caller keeps its
/// fallback material in either case.
pub async fn fetch_bitmap(url: &str) -> anyhow::Result<web::ImageBitmap> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch failed: {:?}", e))?
        .dyn_into::<web::Response>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("HTTP {} for {}", resp.status(), url);
    }
    let blob = JsFuture::from(resp.blob().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::Blob>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let decode = window
        .create_image_bitmap_with_blob(&blob)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    JsFuture::from(decode)
        .await
        .map_err(|e| anyhow::anyhow!("decode failed: {:?}", e))?
        .dyn_into::<web::ImageBitmap>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Copy a decoded bitmap into a new sampleable texture.
pub fn upload_bitmap(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    bitmap: &web::ImageBitmap,
) -> anyhow::Result<(wgpu::Texture, wgpu::TextureView)> {
    let width = bitmap.width();
    let height = bitmap.height();
    let max_dim = device.limits().max_texture_dimension_2d;
    if width == 0 || height == 0 || width > max_dim || height > max_dim {
        anyhow::bail!("texture {}x{} outside 1..={}", width, height, max_dim);
    }
    let (tex, view) = helpers::create_surface_texture(device, "earth_texture", width, height);
    queue.copy_external_image_to_texture(
        &wgpu::CopyExternalImageSourceInfo {
            source: wgpu::ExternalImageSource::ImageBitmap(bitmap.clone()),
            origin: wgpu::Origin2d::ZERO,
            flip_y: false,
        },
        wgpu::CopyExternalImageDestInfo {
            texture: &tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
            color_space: wgpu::PredefinedColorSpace::Srgb,
            premultiplied_alpha: false,
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );
    Ok((tex, view))
}

/// 1×1 white texture bound until the real surface texture arrives.
pub fn placeholder_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> (wgpu::Texture, wgpu::TextureView) {
    let (tex, view) = helpers::create_surface_texture(device, "placeholder_texture", 1, 1);
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &[255, 255, 255, 255],
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4),
            rows_per_image: Some(1),
        },
        wgpu::Extent3d {
            width: 1,
            height: 1,
            depth_or_array_layers: 1,
        },
    );
    (tex, view)
}
