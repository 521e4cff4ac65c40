//! core — validated data containers and model-space mappings.
//!
//! Purpose
//! -------
//! Provide the foundational building blocks of the classification layer:
//! validated labeled-data containers, design-matrix construction (bias
//! augmentation, one-hot encoding), and the row-major mapping between
//! matrix-shaped weights and the optimizer's flat parameter space.
//!
//! Key behaviors
//! -------------
//! - [`data`] validates feature matrices, labels, and split consistency at
//!   the crate boundary, so models can assume clean inputs.
//! - [`design`] builds the augmented design matrix (intercept column at
//!   index 0) and one-hot label targets at fit/predict time.
//! - [`weights`] flattens and reshapes `(D + 1) × K` weight matrices in
//!   row-major order with fail-fast shape checks.
//!
//! Downstream usage
//! ----------------
//! - Classifier models consume these helpers when assembling their training
//!   problems and when mapping optimizer output back into weight matrices.
//! - The metrics layer relies on [`data::DatasetSplits`] invariants when
//!   scoring a fitted model on all three splits.

pub mod data;
pub mod design;
pub mod weights;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::{DatasetSplits, LabeledData};
pub use self::design::{augment_with_bias, one_hot};
pub use self::weights::{flatten_weights, unflatten_weights};
