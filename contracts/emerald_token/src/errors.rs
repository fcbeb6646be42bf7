use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 400,
    NotInitialized = 401,
    NotOwner = 402,
    InsufficientBalance = 403,
    InsufficientAllowance = 404,
    AllowanceUnderflow = 405,
    NegativeAmount = 406,
    Overflow = 407,
    FilmExists = 408,
    FilmNotFound = 409,
    InvalidFilm = 410,
}
