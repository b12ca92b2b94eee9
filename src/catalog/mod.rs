//! The fixed node catalog: categories, default payloads, handles and palette entries.

pub mod category;
pub mod handles;
pub mod palette;
pub mod payload;

pub use category::*;
pub use handles::*;
pub use palette::*;
pub use payload::*;
