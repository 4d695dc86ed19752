use core::fmt;

/// Scene error
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// Table bounds don't describe a non-empty area
    InvalidBounds{ left: f32, right: f32, far: f32, near: f32 },
    /// A size or factor is out of its valid range
    InvalidValue{ name: &'static str, value: f32 },
    /// Viewport with a zero dimension
    InvalidViewport{ width: u32, height: u32 },
    /// A matrix that needs to be inverted is singular
    SingularMatrix(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBounds { left, right, far, near } => f.write_fmt(format_args!("Invalid table bounds: left {left}, right {right}, far {far}, near {near} (expected left < right and far < near)")),
            Error::InvalidValue { name, value }             => f.write_fmt(format_args!("Invalid value for '{name}': {value}")),
            Error::InvalidViewport { width, height }        => f.write_fmt(format_args!("Invalid viewport size: {width}x{height}")),
            Error::SingularMatrix(name)                     => f.write_fmt(format_args!("Matrix cannot be inverted: '{name}'")),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
