// Dot product and norm kernels used by the batch cosine ranker.
// SSE2 on x86_64 and NEON on aarch64 are part of the baseline target, so no
// runtime feature detection is needed; other targets use the scalar path.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

/// Dot product of two equal-length slices.
/// Returns 0.0 for mismatched lengths.
#[inline]
pub fn dot_product_simd(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    #[cfg(target_arch = "x86_64")]
    {
        // SAFETY: SSE is always available on x86_64 and the lengths match.
        return unsafe { dot_product_sse(a, b) };
    }

    #[cfg(target_arch = "aarch64")]
    {
        // SAFETY: NEON is always available on aarch64 and the lengths match.
        return unsafe { dot_product_neon(a, b) };
    }

    #[allow(unreachable_code)]
    dot_product_scalar(a, b)
}

#[cfg(target_arch = "x86_64")]
#[inline]
unsafe fn dot_product_sse(a: &[f32], b: &[f32]) -> f32 {
    let dim = a.len();
    let mut i = 0;
    let mut acc0 = _mm_setzero_ps();
    let mut acc1 = _mm_setzero_ps();

    while i + 8 <= dim {
        let a0 = _mm_loadu_ps(a.as_ptr().add(i));
        let b0 = _mm_loadu_ps(b.as_ptr().add(i));
        let a1 = _mm_loadu_ps(a.as_ptr().add(i + 4));
        let b1 = _mm_loadu_ps(b.as_ptr().add(i + 4));
        acc0 = _mm_add_ps(acc0, _mm_mul_ps(a0, b0));
        acc1 = _mm_add_ps(acc1, _mm_mul_ps(a1, b1));
        i += 8;
    }

    let mut lanes = [0.0f32; 4];
    _mm_storeu_ps(lanes.as_mut_ptr(), _mm_add_ps(acc0, acc1));
    let mut dot = lanes.iter().sum::<f32>();

    while i < dim {
        dot += a[i] * b[i];
        i += 1;
    }

    dot
}

#[cfg(target_arch = "aarch64")]
#[inline]
unsafe fn dot_product_neon(a: &[f32], b: &[f32]) -> f32 {
    let dim = a.len();
    let mut i = 0;
    let mut acc0 = vdupq_n_f32(0.0);
    let mut acc1 = vdupq_n_f32(0.0);

    while i + 8 <= dim {
        acc0 = vfmaq_f32(acc0, vld1q_f32(a.as_ptr().add(i)), vld1q_f32(b.as_ptr().add(i)));
        acc1 = vfmaq_f32(
            acc1,
            vld1q_f32(a.as_ptr().add(i + 4)),
            vld1q_f32(b.as_ptr().add(i + 4)),
        );
        i += 8;
    }

    let mut dot = vaddvq_f32(vaddq_f32(acc0, acc1));

    while i < dim {
        dot += a[i] * b[i];
        i += 1;
    }

    dot
}

/// Scalar fallback with two accumulators
#[inline]
fn dot_product_scalar(a: &[f32], b: &[f32]) -> f32 {
    let mut dot0 = 0.0f32;
    let mut dot1 = 0.0f32;

    let chunks = a.chunks_exact(4);
    let remainder = chunks.remainder();

    for (x, y) in chunks.zip(b.chunks_exact(4)) {
        dot0 += x[0] * y[0] + x[1] * y[1];
        dot1 += x[2] * y[2] + x[3] * y[3];
    }

    let tail = a.len() - remainder.len();
    for (x, y) in remainder.iter().zip(&b[tail..]) {
        dot0 += x * y;
    }

    dot0 + dot1
}

/// Euclidean length
#[inline]
pub fn norm_simd(v: &[f32]) -> f32 {
    dot_product_simd(v, v).sqrt()
}
