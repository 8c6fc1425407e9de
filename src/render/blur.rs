use crate::foundation::error::{TextcardError, TextcardResult};

/// Separable gaussian blur over premultiplied RGBA8 pixels.
///
/// Fixed-point (q16) kernel weights keep the result bit-exact across
/// platforms. Radius 0 is the identity.
pub(crate) fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> TextcardResult<Vec<u8>> {
    let expected = (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(4);
    if src.len() != expected {
        return Err(TextcardError::render("blur input buffer size mismatch"));
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut dst = vec![0u8; expected];
    let mut tmp = vec![0u8; expected];
    blur_rgba8_premul_q16(src, &mut dst, &mut tmp, width, height, &kernel);
    Ok(dst)
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> TextcardResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(TextcardError::render("blur sigma must be finite and > 0"));
    }

    let r = radius as i32;
    let mut weights_f = Vec::<f64>::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    let sigma = f64::from(sigma);
    let denom = 2.0 * sigma * sigma;
    for i in -r..=r {
        let x = f64::from(i);
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }
    if sum <= 0.0 {
        return Err(TextcardError::render("gaussian kernel sum is zero"));
    }

    // Quantize to q16; any rounding residue lands on the center tap so the
    // weights sum to exactly 1.0.
    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let mid_val = i64::from(weights[mid]);
        weights[mid] = (mid_val + delta).clamp(0, 65536) as u32;
    }

    Ok(weights)
}

fn blur_rgba8_premul_q16(
    src: &[u8],
    dst: &mut [u8],
    tmp: &mut [u8],
    width: u32,
    height: u32,
    kernel_q16: &[u32],
) {
    if kernel_q16.len() == 1 {
        dst.copy_from_slice(src);
        return;
    }

    horizontal_blur_q16(src, tmp, width, height, kernel_q16);
    vertical_blur_q16(tmp, dst, width, height, kernel_q16);
}

fn horizontal_blur_q16(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height as i32 {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let dx = ki as i32 - radius;
                let sx = (x + dx).clamp(0, w - 1);
                let idx = ((y * w + sx) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn vertical_blur_q16(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let dy = ki as i32 - radius;
                let sy = (y + dy).clamp(0, h - 1);
                let idx = ((sy * w + x) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    (v.min(255)) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
