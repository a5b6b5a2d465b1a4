/// Attention mask helpers
use candle_core::{Device, Tensor};

use crate::Result;

/// Create a causal attention mask
///
/// Returns an N×N U8 tensor with 1 on and below the diagonal and 0 strictly
/// above it: position (i, j) is attendable iff j <= i, so the decoder never
/// sees future positions.
///
/// The mask is deterministic per size; [`TranslationDataset`] computes it
/// once for its fixed seq_len at construction and reuses the tensor for
/// every example.
///
/// [`TranslationDataset`]: super::bilingual::TranslationDataset
pub fn causal_mask(size: usize, device: &Device) -> Result<Tensor> {
    let mut mask_data = vec![0u8; size * size];

    for i in 0..size {
        for j in 0..=i {
            mask_data[i * size + j] = 1;
        }
    }

    Ok(Tensor::from_vec(mask_data, (size, size), device)?)
}
