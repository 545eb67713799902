pub mod momentum;
pub mod volatility;
pub mod volume;

pub use momentum::{relative_strength_index, relative_strength_index_default};
pub use volatility::{bollinger_bands, bollinger_bands_default, volatility_expansion};
pub use volume::{volume_ratio, VolumeProfile};
