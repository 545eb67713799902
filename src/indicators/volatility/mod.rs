pub mod bollinger;
pub mod expansion;

pub use bollinger::{bollinger_bands, bollinger_bands_default, BollingerBands};
pub use expansion::volatility_expansion;
