//! Error types for FXOS8700Q operations.
//!
//! Both the blocking and the async drivers report through these types; they
//! are generic over the bus' [`ErrorType`], which the blocking and async I2C
//! traits share.

use core::fmt::{Debug, Formatter};
use embedded_hal::i2c::ErrorType;

/// Error during construction of a driver. Wraps [`Error`] and hands the bus
/// back to the caller.
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct InitError<I>
where
    I: ErrorType,
{
    pub i2c: I,
    pub error: Error<I>,
}

impl<I> Debug for InitError<I>
where
    I: ErrorType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.error.fmt(f)
    }
}

/// Error for sensor operations.
///
/// A failed read is always reported here; the driver never substitutes a
/// zero or stale sample for it.
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error<I>
where
    I: ErrorType,
{
    /// Error occurred during an I2C write operation
    WriteError(I::Error),
    /// Error occurred during an I2C write-read operation
    WriteReadError(I::Error),
    /// WHO_AM_I did not identify an FXOS8700
    WrongDevice(u8),
}

impl<I> Debug for Error<I>
where
    I: ErrorType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Self::WriteReadError(e) => f.debug_tuple("WriteReadError").field(e).finish(),
            Self::WriteError(e) => f.debug_tuple("WriteError").field(e).finish(),
            Self::WrongDevice(id) => f.debug_tuple("WrongDevice").field(id).finish(),
        }
    }
}
