use std::{
    error::Error,
    fmt::{Display, Formatter},
};

#[derive(Debug, Clone, Copy)]
pub struct PropMapError {
    pub msg: &'static str,
}

impl Display for PropMapError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.msg)
    }
}

impl Error for PropMapError {}

/// Result alias used at the tooling seams of this crate.
pub type PropMapResult<T> = Result<T, Box<dyn Error>>;
