/// Error code registry for drills
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 3000-3999: I/O errors
/// - 7000-7999: Validation errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_TOML: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;
    pub const CONFIG_INVALID_ENV: u16 = 1006;
    pub const CONFIG_SERIALIZE_FAILED: u16 = 1007;

    // I/O errors (3000-3999)
    pub const IO_READ_FAILED: u16 = 3001;

    // Validation errors (7000-7999)
    pub const VALIDATION_RANGE: u16 = 7001;
    pub const VALIDATION_GEARBOX: u16 = 7002;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
}
