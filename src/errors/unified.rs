// src/errors/unified.rs

//! Unified error types for the driver
//!
//! The text console has no failure modes; everything that can go wrong
//! lives in the graphics engine, the dispatch layer or the serial sink.

use core::fmt;

/// Top-level driver error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// Graphics engine error
    Graphics(GraphicsError),
    /// Dispatch layer error
    Display(DisplayError),
    /// Serial logging sink error
    Serial(SerialError),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Graphics(e) => write!(f, "Graphics error: {}", e),
            DriverError::Display(e) => write!(f, "Display error: {}", e),
            DriverError::Serial(e) => write!(f, "Serial error: {}", e),
        }
    }
}

/// Graphics engine errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsError {
    /// Coordinates or rectangle extent outside the drawing surface
    OutOfBounds,
}

impl GraphicsError {
    pub const fn as_str(&self) -> &'static str {
        match self {
            GraphicsError::OutOfBounds => "coordinates out of bounds",
        }
    }
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<GraphicsError> for DriverError {
    fn from(err: GraphicsError) -> Self {
        DriverError::Graphics(err)
    }
}

/// Dispatch layer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// The operation has no implementation in the active display mode
    Unsupported,
    /// The direct-adapter graphics engine rejected the call
    Graphics(GraphicsError),
}

impl DisplayError {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DisplayError::Unsupported => "operation not supported in this display mode",
            DisplayError::Graphics(e) => e.as_str(),
        }
    }
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<GraphicsError> for DisplayError {
    fn from(err: GraphicsError) -> Self {
        DisplayError::Graphics(err)
    }
}

impl From<DisplayError> for DriverError {
    fn from(err: DisplayError) -> Self {
        DriverError::Display(err)
    }
}

/// Serial subsystem errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    /// Logger already installed
    AlreadyInitialized,
    /// Loopback test failed; no UART at the port
    PortNotPresent,
    /// Transmit holding register never drained
    Timeout,
}

impl fmt::Display for SerialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerialError::AlreadyInitialized => write!(f, "already initialized"),
            SerialError::PortNotPresent => write!(f, "hardware not present"),
            SerialError::Timeout => write!(f, "transmit timeout"),
        }
    }
}

impl From<SerialError> for DriverError {
    fn from(err: SerialError) -> Self {
        DriverError::Serial(err)
    }
}

/// Result type alias for driver operations
pub type Result<T> = core::result::Result<T, DriverError>;

/// Helper trait for error context
pub trait ErrorContext {
    /// Get a detailed description of the error
    fn context(&self) -> &'static str;
}

impl ErrorContext for DriverError {
    fn context(&self) -> &'static str {
        match self {
            DriverError::Graphics(_) => "Error occurred in the graphics engine",
            DriverError::Display(_) => "Error occurred in the display dispatch layer",
            DriverError::Serial(_) => "Error occurred in the serial logging sink",
        }
    }
}

impl ErrorContext for GraphicsError {
    fn context(&self) -> &'static str {
        match self {
            GraphicsError::OutOfBounds => {
                "Pixel or rectangle lies outside the 320x200 back buffer; nothing was drawn"
            }
        }
    }
}

impl ErrorContext for DisplayError {
    fn context(&self) -> &'static str {
        match self {
            DisplayError::Unsupported => {
                "Graphics output is not available while the firmware terminal is active"
            }
            DisplayError::Graphics(e) => e.context(),
        }
    }
}

impl ErrorContext for SerialError {
    fn context(&self) -> &'static str {
        match self {
            SerialError::AlreadyInitialized => "Serial logger cannot be installed twice",
            SerialError::PortNotPresent => "Serial port hardware is not available",
            SerialError::Timeout => "UART did not accept a byte within the polling limit",
        }
    }
}
