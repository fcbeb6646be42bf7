//! Fixed token metadata. Written to instance storage once by `initialize`.

pub const TOKEN_NAME: &str = "Emerald";
pub const TOKEN_SYMBOL: &str = "EMR";
/// ERC20 default precision.
pub const TOKEN_DECIMALS: u32 = 18;
