pub mod color;
pub mod event;
pub mod lanes;
pub mod layout;
pub mod overlap;
pub mod wrap;

pub use color::{CategoryRegistry, PaletteExhausted, Rgb, DEFAULT_PALETTE};
pub use event::{InvalidRange, PositionedEvent, RawEvent};
pub use layout::{layout, Layout, LayoutError};
pub use wrap::{wrap, DEFAULT_WRAP_WIDTH};
