// SPDX-License-Identifier: LGPL-3.0-or-later

//! # sigviz-dsp
//!
//! Sample-buffer processing kernel for the sigviz signal-visualization
//! tool.
//!
//! The crate provides stateless operations over fixed-length sequences
//! of `f64` samples. The host decodes audio into a plain buffer, hands
//! it to one of these functions together with a numeric parameter, and
//! renders or re-encodes the sequence it gets back. It includes:
//!
//! - **Buffers**: zero allocation, generator fill, concatenation
//! - **Arithmetic**: element-wise add/subtract/multiply under the
//!   zero-fallback masking rule, scalar amplification
//! - **Convolution**: full linear convolution
//! - **Reordering**: in-place reflection, zero-fill displacement
//! - **Resampling**: sparse decimation and three upsampling variants
//!   (zero insertion, zero-order hold, absolute-difference ramp)
//! - **Comparison**: decimal rounding and prefix predicate scanning
//!
//! ## Design
//!
//! Element-wise operations take the number of samples to process as
//! their first parameter and only ever touch that prefix, so buffers may
//! be over-allocated. Each comes in an allocating form, a `*_into` form
//! writing a caller-supplied buffer, and a `*_assign` form where the
//! destination doubles as the first operand (in-place update). The one
//! exception is [`shift::reflect`], which mutates its argument directly.
//!
//! The kernel holds no state and retains no references across calls;
//! callers on separate threads are safe as long as they do not share a
//! buffer between concurrent calls. Element-wise hot loops use runtime
//! SIMD dispatch via the `multiversion` crate, compiled for AVX2+FMA,
//! AVX, SSE4.1, and NEON targets with automatic selection at startup.

pub mod arith;
pub mod buffer;
pub mod convolution;
pub mod error;
pub mod float;
pub mod resampling;
pub mod scan;
pub mod shift;

pub use error::Error;
