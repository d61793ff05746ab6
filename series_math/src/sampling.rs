//! Fixed-stride index sampling
//!
//! Selects positions `0, stride, 2 * stride, ...` from a sequence of known
//! length. The selection depends only on `(len, stride)`, so it is
//! deterministic and can be restarted at any time.

use crate::{MathError, Result};
use std::iter::StepBy;
use std::ops::Range;

/// Indices retained when sampling `len` items every `stride` positions
pub fn stride_indices(len: usize, stride: usize) -> Result<StepBy<Range<usize>>> {
    validate_stride(stride)?;
    Ok((0..len).step_by(stride))
}

/// Number of indices `stride_indices` yields, `ceil(len / stride)`
pub fn stride_len(len: usize, stride: usize) -> Result<usize> {
    validate_stride(stride)?;
    Ok(len.div_ceil(stride))
}

fn validate_stride(stride: usize) -> Result<()> {
    if stride == 0 {
        return Err(MathError::InvalidInput(
            "Stride must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
