//! models — logistic-regression model families.
//!
//! Purpose
//! -------
//! House the two model families built on the shared optimization layer:
//! one-vs-all binary logistic regression ([`binary`]) and joint multinomial
//! softmax regression ([`multinomial`]). Both expose the same lifecycle —
//! construct, `fit` on a [`LabeledData`](crate::classification::core::data::LabeledData),
//! then predict through the shared
//! [`Classifier`](crate::classification::predict::Classifier) trait.
//!
//! Conventions
//! -----------
//! - Both families fit from zero initial weights and are fully
//!   deterministic.
//! - Fitted weights are `(D + 1) × K` matrices with the intercept in row 0
//!   and one column per class.

pub mod binary;
pub mod multinomial;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::binary::{BinaryProblem, OneVsAllClassifier};
pub use self::multinomial::{MultinomialProblem, SoftmaxClassifier};
