//! A library of utilities to train and evaluate `densedepth` models

#![deny(rustdoc::broken_intra_doc_links)]
#![allow(clippy::excessive_precision)]

pub mod checkpoint;
pub mod dataset;
pub mod error;
pub mod function;
pub mod metric;
pub mod train;
