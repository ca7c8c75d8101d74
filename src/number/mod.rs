//! Permissive number coercion
//!
//! Lines are coerced with [`coerce`], which never fails: text that is not a
//! numeric literal comes back as `NaN`. Results are turned back into text
//! with [`render`], which writes the shortest decimal that reads back as the
//! same `f64`.

mod format;
mod parse;

pub use format::render;
pub use parse::coerce;

/// Output token for the not-a-number sentinel.
pub const NAN_TOKEN: &str = "NaN";

/// Double a coerced value. `NaN` stays `NaN`.
pub fn double(value: f64) -> f64 {
    value * 2.0
}
