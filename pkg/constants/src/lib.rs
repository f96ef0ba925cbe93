//! Fixed values shared by the secretgen crates: manifest defaults, output
//! file naming and the cluster tool invocation.

pub mod apply;
pub mod manifest;
pub mod paths;
