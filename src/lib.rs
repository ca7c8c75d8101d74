//! Doubler: a newline-delimited number filter
//!
//! Reads lines from an input stream, coerces each one to a number, doubles
//! it and writes the result on its own line to an output stream.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             LineTransformer             │
//! │                                         │
//! │ read line ─► coerce ─► double ─► render │
//! │                                         │
//! ├─────────────────────────────────────────┤
//! │        number  - coercion/rendering     │
//! │        error   - stream failures        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Text that does not form a number is never an error. It becomes `NaN`
//! and flows through as ordinary output:
//!
//! ```
//! use doubler::process;
//!
//! assert_eq!(process("3"), "6");
//! assert_eq!(process("-2.5"), "-5");
//! assert_eq!(process("abc"), "NaN");
//! ```

pub mod error;
pub mod number;
pub mod transform;

pub use error::TransformError;
pub use number::{coerce, double, render, NAN_TOKEN};
pub use transform::{process, LineTransformer, Summary};
