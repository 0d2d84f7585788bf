/// Cryptocurrency listing models
pub mod asset;
/// Price refresh models
pub mod price;
/// Theme preference
pub mod theme;

pub use asset::{CryptoAsset, decode_listing};
pub use price::SimplePrices;
pub use theme::AppTheme;
