//! # truthcheck protocols
//!
//! Types and interfaces shared by every truthcheck crate. Contains only
//! definitions; the implementations live in the page, runtime and extension
//! crates.
//!
//! ## Core Traits
//!
//! - [`Classifier`] - sends a title to the remote classification service
//! - [`MetadataSource`] - scrapes optional video page metadata
//! - [`TitleChecker`] - page-side view of the host messaging channel

pub mod checker;
pub mod classifier;
pub mod error;
pub mod message;
pub mod metadata;
pub mod types;

pub use checker::TitleChecker;
pub use classifier::Classifier;
pub use error::{CheckError, ClassifierError};
pub use message::{ErrorKind, HostRequest, HostResponse};
pub use metadata::MetadataSource;
pub use types::*;
