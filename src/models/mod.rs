pub mod asset;
pub mod order;

pub use asset::AssetSpec;
pub use order::{OrderInput, OrderLabels, OrderSide, ValidatedOrder};
