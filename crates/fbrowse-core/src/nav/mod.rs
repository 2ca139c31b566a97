//! Navigation state.
//!
//! [`navigator::Navigator`] owns the current directory, its listing, the
//! selection and the hidden-file flag.

pub mod navigator;
