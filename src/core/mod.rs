// src/core/mod.rs

pub mod error;
pub mod net;
pub mod xml;

pub use error::{Error, Result};
pub use net::{XmlApi, XmlSource};
pub use xml::{Accessor, Element};
